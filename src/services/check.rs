use anyhow::{Context, Result};
use log::info;

use super::loading::load_store;
use crate::config::AppConfig;

/// Validate the data directory and print the load report
pub struct CheckService {
    config: AppConfig,
}

impl CheckService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<()> {
        info!("=== Checking {} ===", self.config.data.data_dir.display());

        let output = self.render()?;
        print!("{}", output);

        info!("=== Check Complete ===");
        Ok(())
    }

    pub fn render(&self) -> Result<String> {
        let (_, report) = load_store(&self.config).with_context(|| {
            format!(
                "Leaderboard data in {} is not loadable",
                self.config.data.data_dir.display()
            )
        })?;

        let verdict = if report.is_clean() {
            "OK".to_string()
        } else {
            format!("OK with {} warnings", report.warnings.len())
        };

        Ok(format!("{}{}\n", report, verdict))
    }
}

use std::fmt;
use std::path::PathBuf;

use super::validation::RatingInversion;

/// Summary of a successful load
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<PathBuf>,
    pub superseded: Vec<PathBuf>,
    /// Files in the data directory that are not leaderboards of the configured region
    pub skipped: Vec<PathBuf>,
    pub seasons: usize,
    pub boards: usize,
    pub records: usize,
    pub warnings: Vec<RatingInversion>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} records in {} leaderboards across {} seasons",
            self.records, self.boards, self.seasons
        )?;
        writeln!(
            f,
            "{} files loaded, {} superseded, {} skipped",
            self.loaded.len(),
            self.superseded.len(),
            self.skipped.len()
        )?;

        for path in &self.superseded {
            writeln!(f, "  superseded: {}", path.display())?;
        }
        for warning in &self.warnings {
            writeln!(f, "  warning: {}", warning)?;
        }
        Ok(())
    }
}

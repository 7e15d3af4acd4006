use log::{error, info};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::presentation::LoadState;
use crate::store::{DataStore, DataStoreLoader, LoadReport, StoreError};

/// Load the data directory named by the configuration
pub fn load_store(config: &AppConfig) -> Result<(DataStore, LoadReport), StoreError> {
    let loader = DataStoreLoader::new(&config.data)?;
    loader.load()
}

/// Load for display: a failure becomes the visible error state instead of an exit
pub fn load_state(config: &AppConfig) -> LoadState {
    match load_store(config) {
        Ok((store, report)) => {
            info!("Data store ready: {}", report.to_string().trim_end());
            LoadState::Ready(Arc::new(store))
        }
        Err(e) => {
            let message = describe_error(&e);
            error!("Failed to load leaderboard data: {}", message);
            LoadState::Failed(message)
        }
    }
}

/// Error message including its chain of causes
pub fn describe_error(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{individual_snapshot, TempDataDir};

    fn config_for(dir: &TempDataDir) -> AppConfig {
        let mut config = AppConfig::new();
        config.data.data_dir = dir.path().to_path_buf();
        config
    }

    #[test]
    fn test_load_state_ready() {
        let dir = TempDataDir::new("load_state_ready");
        dir.write(
            "season_11_3v3_tw_arena.json",
            &individual_snapshot(&[(1, "Alice", 2100)]),
        );

        let state = load_state(&config_for(&dir));

        assert!(state.store().is_some());
    }

    #[test]
    fn test_load_state_failed_carries_cause() {
        let dir = TempDataDir::new("load_state_failed");
        dir.write(
            "season_11_3v3_tw_arena.json",
            &individual_snapshot(&[(1, "Alice", 2100), (1, "Bob", 2000)]),
        );

        match load_state(&config_for(&dir)) {
            LoadState::Failed(message) => assert!(message.contains("rank 1 appears more than once")),
            LoadState::Ready(_) => panic!("duplicate ranks must not load"),
        }
    }
}

use std::path::PathBuf;

use log::warn;

use crate::domain::Bracket;
use crate::pagination::PaginationConfig;

#[derive(Debug, Clone)]
pub struct DataSettings {
    pub data_dir: PathBuf,
    /// Region tag embedded in data file names, e.g. `season_6_2v2_tw_arena.json`
    pub region: String,
    pub manifest_file: &'static str,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            region: "tw".to_string(),
            manifest_file: "seasons.json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PresentationSettings {
    pub default_bracket: Bracket,
    pub pagination: PaginationConfig,
    pub site_title: &'static str,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            default_bracket: Bracket::ThreeVsThree,
            pagination: PaginationConfig::default(),
            site_title: "WoW Classic Arena Ladder",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data: DataSettings,
    pub presentation: PresentationSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            data: DataSettings::default(),
            presentation: PresentationSettings::default(),
        }
    }

    /// Defaults overridden by `DATA_DIR`, `LADDER_REGION` and `PAGE_SIZE`
    pub fn from_env() -> Self {
        Self::new().with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("DATA_DIR").filter(|d| !d.trim().is_empty()) {
            self.data.data_dir = PathBuf::from(dir);
        }

        if let Some(region) = lookup("LADDER_REGION").filter(|r| !r.trim().is_empty()) {
            self.data.region = region.trim().to_ascii_lowercase();
        }

        if let Some(raw) = lookup("PAGE_SIZE") {
            match raw.trim().parse::<usize>() {
                Ok(size) => self.presentation.pagination = self.presentation.pagination.with_page_size(size),
                Err(_) => warn!("Ignoring invalid PAGE_SIZE value: {}", raw),
            }
        }

        self
    }
}

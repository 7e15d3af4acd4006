use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::error::StoreError;
use crate::domain::{default_label, Season, SeasonId};

/// One entry of the optional `seasons.json` manifest
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    id: SeasonId,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    start: Option<NaiveDate>,
    #[serde(default)]
    end: Option<NaiveDate>,
}

impl ManifestEntry {
    fn into_season(self) -> Season {
        Season {
            label: self.label.unwrap_or_else(|| default_label(self.id)),
            id: self.id,
            start: self.start,
            end: self.end,
        }
    }
}

/// Season labels and dates keyed by id; empty when the manifest is absent
pub fn load_manifest(path: &Path) -> Result<BTreeMap<SeasonId, Season>, StoreError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let json = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let entries: Vec<ManifestEntry> =
        serde_json::from_str(&json).map_err(|source| StoreError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(entries
        .into_iter()
        .map(|entry| (entry.id, entry.into_season()))
        .collect())
}

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{Bracket, EntryError, SeasonId};

/// Reasons the data store refuses to load
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data directory {0} does not exist")]
    DataDirMissing(PathBuf),

    #[error("no leaderboard files found in {0}")]
    NoData(PathBuf),

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed CSV in {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid entry #{index} in {path}")]
    InvalidEntry {
        path: PathBuf,
        index: usize,
        #[source]
        source: EntryError,
    },

    #[error("malformed season manifest {path}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("data integrity violation: rank {rank} appears more than once in season {season} {bracket} ({path})")]
    DuplicateRank {
        season: SeasonId,
        bracket: Bracket,
        rank: u32,
        path: PathBuf,
    },

    #[error("season {season} has no {bracket} leaderboard ({path})")]
    UnsupportedBracket {
        season: SeasonId,
        bracket: Bracket,
        path: PathBuf,
    },

    #[error("{first} and {second} carry the same revision of season {season} {bracket}")]
    RevisionConflict {
        season: SeasonId,
        bracket: Bracket,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("failed to compile data file pattern")]
    Pattern(#[from] regex::Error),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error is a violation of the leaderboard invariants rather than a read/parse failure
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            StoreError::DuplicateRank { .. }
                | StoreError::UnsupportedBracket { .. }
                | StoreError::RevisionConflict { .. }
                | StoreError::InvalidEntry { .. }
        )
    }
}

use log::{debug, warn};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::StoreError;
use crate::domain::{Bracket, SeasonId};

const FILE_NAME_PATTERN: &str =
    r"(?i)^season_(\d+)_(2v2|3v3|5v5|rbg)_([a-z]+)_arena(?:_r(\d+))?\.(json|csv)$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Csv,
}

/// A leaderboard file recognised by name
#[derive(Debug, Clone, PartialEq)]
pub struct DataFile {
    pub path: PathBuf,
    pub season: SeasonId,
    pub bracket: Bracket,
    pub region: String,
    pub revision: u32,
    pub format: FileFormat,
}

/// How a directory entry relates to the leaderboard naming scheme
#[derive(Debug, Clone, PartialEq)]
pub enum FileMatch {
    Leaderboard(DataFile),
    /// Follows the naming scheme for another region
    OtherRegion(String),
    /// Follows the naming scheme but carries an unusable season or revision
    Malformed(String),
    Unrelated,
}

/// Recognises `season_{N}_{bracket}_{region}_arena[_r{REV}].{json|csv}` names
pub struct DataFileMatcher {
    pattern: Regex,
    region: String,
}

impl DataFileMatcher {
    pub fn new(region: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(FILE_NAME_PATTERN)?,
            region: region.to_ascii_lowercase(),
        })
    }

    /// Parse a file name; `None` for unrelated files and other regions
    pub fn match_path(&self, path: &Path) -> Option<DataFile> {
        match self.classify(path) {
            FileMatch::Leaderboard(file) => Some(file),
            _ => None,
        }
    }

    pub fn classify(&self, path: &Path) -> FileMatch {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return FileMatch::Unrelated;
        };
        let Some(captures) = self.pattern.captures(name) else {
            return FileMatch::Unrelated;
        };

        let season = match captures[1].parse::<SeasonId>() {
            Ok(season) => season,
            Err(e) => return FileMatch::Malformed(e.to_string()),
        };
        let Ok(bracket) = captures[2].parse::<Bracket>() else {
            return FileMatch::Unrelated;
        };
        let region = captures[3].to_ascii_lowercase();
        let revision = match captures.get(4).map(|rev| rev.as_str().parse::<u32>()) {
            Some(Ok(rev)) => rev,
            Some(Err(_)) => return FileMatch::Malformed(format!("revision {:?} is out of range", &captures[4])),
            None => 0,
        };
        let format = match captures[5].to_ascii_lowercase().as_str() {
            "csv" => FileFormat::Csv,
            _ => FileFormat::Json,
        };

        if region != self.region {
            return FileMatch::OtherRegion(region);
        }

        FileMatch::Leaderboard(DataFile {
            path: path.to_path_buf(),
            season,
            bracket,
            region,
            revision,
            format,
        })
    }

    /// Leaderboard files in `dir` plus the unrelated files passed over, both sorted by path
    pub fn discover(&self, dir: &Path) -> Result<(Vec<DataFile>, Vec<PathBuf>), StoreError> {
        if !dir.is_dir() {
            return Err(StoreError::DataDirMissing(dir.to_path_buf()));
        }

        let mut files = Vec::new();
        let mut skipped = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| StoreError::io(dir, e))? {
            let path = entry.map_err(|e| StoreError::io(dir, e))?.path();
            if !path.is_file() {
                continue;
            }

            match self.classify(&path) {
                FileMatch::Leaderboard(file) => files.push(file),
                FileMatch::Malformed(reason) => {
                    warn!("Skipping {}: {}", path.display(), reason);
                    skipped.push(path);
                }
                FileMatch::OtherRegion(region) => {
                    debug!("Skipping {} (region {})", path.display(), region);
                    skipped.push(path);
                }
                FileMatch::Unrelated => {
                    debug!("Skipping unrelated file {}", path.display());
                    skipped.push(path);
                }
            }
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        skipped.sort();
        Ok((files, skipped))
    }
}

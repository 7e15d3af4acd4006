use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::PathBuf;

use super::data_store::DataStore;
use super::error::StoreError;
use super::files::{DataFile, DataFileMatcher};
use super::manifest::load_manifest;
use super::parse::read_records;
use super::report::LoadReport;
use super::validation::validate_board;
use crate::config::DataSettings;
use crate::domain::{Admission, LeaderboardCollection, LoadedBoard, Season};

/// Loads every leaderboard file of the data directory into a `DataStore`
pub struct DataStoreLoader {
    data_dir: PathBuf,
    manifest_path: PathBuf,
    matcher: DataFileMatcher,
}

impl DataStoreLoader {
    pub fn new(settings: &DataSettings) -> Result<Self, StoreError> {
        Ok(Self {
            data_dir: settings.data_dir.clone(),
            manifest_path: settings.data_dir.join(settings.manifest_file),
            matcher: DataFileMatcher::new(&settings.region)?,
        })
    }

    /// Load and validate everything; any failure discards the whole load
    pub fn load(&self) -> Result<(DataStore, LoadReport), StoreError> {
        info!("Loading leaderboards from {}", self.data_dir.display());

        let mut report = LoadReport::default();
        let files = self.discover_files(&mut report)?;
        info!("  → Found {} leaderboard files", files.len());

        let collection = self.collect_boards(files, &mut report)?;

        let store = self.build_store(collection, &mut report)?;
        info!(
            "  → Loaded {} records in {} leaderboards",
            report.records, report.boards
        );

        Ok((store, report))
    }

    fn discover_files(&self, report: &mut LoadReport) -> Result<Vec<DataFile>, StoreError> {
        let (files, skipped) = self.matcher.discover(&self.data_dir)?;
        report.skipped = skipped
            .into_iter()
            .filter(|path| *path != self.manifest_path)
            .collect();
        if files.is_empty() {
            return Err(StoreError::NoData(self.data_dir.clone()));
        }
        Ok(files)
    }

    fn collect_boards(
        &self,
        files: Vec<DataFile>,
        report: &mut LoadReport,
    ) -> Result<LeaderboardCollection, StoreError> {
        let mut collection = LeaderboardCollection::new();

        for file in files {
            let records = read_records(&file)?;
            let board = LoadedBoard {
                season: file.season,
                bracket: file.bracket,
                revision: file.revision,
                source: file.path.clone(),
                records,
            };

            match collection.add(board) {
                Admission::Added => {}
                Admission::Replaced(old) | Admission::Ignored(old) => {
                    warn!("Superseded leaderboard file {}", old.display());
                    report.superseded.push(old);
                }
                Admission::Conflict(other) => {
                    debug!(
                        "{} has the same revision as {}",
                        file.path.display(),
                        other.display()
                    );
                    report.superseded.push(file.path);
                }
            }
        }

        if let Some(((season, bracket), tie)) = collection.ties().next() {
            return Err(StoreError::RevisionConflict {
                season: *season,
                bracket: *bracket,
                first: tie.first.clone(),
                second: tie.second.clone(),
            });
        }

        report.superseded.sort();
        Ok(collection)
    }

    fn build_store(
        &self,
        collection: LeaderboardCollection,
        report: &mut LoadReport,
    ) -> Result<DataStore, StoreError> {
        let mut seasons = load_manifest(&self.manifest_path)?;
        let mut boards = HashMap::new();

        for mut board in collection.into_vec() {
            let inversions = validate_board(&mut board)?;
            for inversion in &inversions {
                warn!("Rating inversion in {}: {}", board.source.display(), inversion);
            }
            report.warnings.extend(inversions);
            report.loaded.push(board.source.clone());
            report.records += board.records.len();

            boards.insert(board.key(), board.records);
        }

        seasons.retain(|id, _| boards.keys().any(|(season, _)| season == id));
        for (season, _) in boards.keys() {
            seasons.entry(*season).or_insert_with(|| Season::new(*season));
        }

        report.loaded.sort();
        report.seasons = seasons.len();
        report.boards = boards.len();

        Ok(DataStore::new(seasons, boards))
    }
}

use std::collections::{BTreeMap, HashMap};

use crate::domain::{BoardKey, Bracket, PlayerRecord, Season, SeasonId};

/// Immutable, fully validated leaderboard data
#[derive(Debug, Default)]
pub struct DataStore {
    seasons: BTreeMap<SeasonId, Season>,
    boards: HashMap<BoardKey, Vec<PlayerRecord>>,
}

impl DataStore {
    /// Build a store from boards already sorted by ascending rank
    pub fn new(seasons: BTreeMap<SeasonId, Season>, boards: HashMap<BoardKey, Vec<PlayerRecord>>) -> Self {
        Self { seasons, boards }
    }

    /// Records of one season and bracket in rank order; empty for unknown pairs
    pub fn board(&self, season: SeasonId, bracket: Bracket) -> &[PlayerRecord] {
        self.boards
            .get(&(season, bracket))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Seasons with at least one loaded board, oldest first
    pub fn seasons(&self) -> impl Iterator<Item = &Season> {
        self.seasons.values()
    }

    pub fn season(&self, id: SeasonId) -> Option<&Season> {
        self.seasons.get(&id)
    }

    pub fn latest_season(&self) -> Option<&Season> {
        self.seasons.values().next_back()
    }

    /// Brackets loaded for a season, in display order
    pub fn brackets_for(&self, season: SeasonId) -> Vec<Bracket> {
        Bracket::ALL
            .into_iter()
            .filter(|b| self.boards.contains_key(&(season, *b)))
            .collect()
    }

    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    pub fn record_count(&self) -> usize {
        self.boards.values().map(Vec::len).sum()
    }
}

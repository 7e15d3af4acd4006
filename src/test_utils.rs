use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Bracket, PlayerRecord, Season, SeasonId};
use crate::store::DataStore;

/// Scratch data directory under the system temp dir, removed on drop
pub struct TempDataDir {
    path: PathBuf,
}

impl TempDataDir {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("classic_arena_ladder_{}", name));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.path.join(name), content).unwrap();
    }
}

impl Drop for TempDataDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Blizzard-style individual leaderboard JSON from (rank, name, rating) rows
pub fn individual_snapshot(rows: &[(u32, &str, i32)]) -> String {
    let entries: Vec<serde_json::Value> = rows
        .iter()
        .map(|(rank, name, rating)| {
            serde_json::json!({
                "character": {"name": name, "realm": {"slug": "maraudon"}},
                "faction": {"type": "ALLIANCE"},
                "rank": rank,
                "rating": rating,
                "season_match_statistics": {"played": 20, "won": 12, "lost": 8}
            })
        })
        .collect();

    serde_json::json!({ "entries": entries }).to_string()
}

pub fn record(season: u32, bracket: Bracket, rank: u32, name: &str, rating: i32) -> PlayerRecord {
    PlayerRecord {
        season: SeasonId(season),
        bracket,
        rank,
        rating,
        name: name.to_string(),
        team: None,
        realm: None,
        faction: None,
        class: None,
        race: None,
        wins: 0,
        losses: 0,
        members: Vec::new(),
    }
}

/// Build a store from records that are already in rank order per board
pub fn store_from(records: Vec<PlayerRecord>) -> DataStore {
    let mut boards: HashMap<_, Vec<PlayerRecord>> = HashMap::new();
    let mut seasons = BTreeMap::new();

    for record in records {
        seasons
            .entry(record.season)
            .or_insert_with(|| Season::new(record.season));
        boards
            .entry((record.season, record.bracket))
            .or_default()
            .push(record);
    }

    DataStore::new(seasons, boards)
}

/// Two seasons of sample data used across module tests
pub fn sample_store() -> DataStore {
    let mut records = vec![
        record(1, Bracket::ThreeVsThree, 1, "Alice", 2100),
        record(1, Bracket::ThreeVsThree, 2, "Bob", 2000),
        record(1, Bracket::ThreeVsThree, 3, "Carol", 1950),
        record(1, Bracket::TwoVsTwo, 1, "Bob", 1900),
        record(2, Bracket::ThreeVsThree, 1, "Dave", 2200),
        record(2, Bracket::FiveVsFive, 1, "Erin", 1800),
    ];

    records[0].wins = 30;
    records[0].losses = 10;
    records[1].wins = 50;
    records[1].losses = 30;
    records[2].wins = 50;
    records[2].losses = 5;
    records[2].team = Some("ABC Gaming".to_string());

    store_from(records)
}

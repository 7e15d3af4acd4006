use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use super::models::{Bracket, PlayerRecord, SeasonId};

pub type BoardKey = (SeasonId, Bracket);

/// Records of one (season, bracket) pair read from a single data file
#[derive(Debug, Clone)]
pub struct LoadedBoard {
    pub season: SeasonId,
    pub bracket: Bracket,
    pub revision: u32,
    pub source: PathBuf,
    pub records: Vec<PlayerRecord>,
}

impl LoadedBoard {
    pub fn key(&self) -> BoardKey {
        (self.season, self.bracket)
    }
}

/// Outcome of adding a board to the collection
#[derive(Debug, PartialEq)]
pub enum Admission {
    Added,
    /// The incoming board replaced an older revision read from this file
    Replaced(PathBuf),
    /// A newer revision is already present; the incoming file was ignored
    Ignored(PathBuf),
    /// Another file carries the same revision; fatal unless a newer revision arrives
    Conflict(PathBuf),
}

/// Two files holding the same, newest revision of one board
#[derive(Debug, Clone, PartialEq)]
pub struct RevisionTie {
    pub first: PathBuf,
    pub second: PathBuf,
}

/// Leaderboards indexed by (season, bracket), keeping the newest revision.
/// The outcome does not depend on the order boards are added in.
pub struct LeaderboardCollection {
    boards: HashMap<BoardKey, LoadedBoard>,
    ties: BTreeMap<BoardKey, RevisionTie>,
}

impl LeaderboardCollection {
    pub fn new() -> Self {
        Self {
            boards: HashMap::new(),
            ties: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, board: LoadedBoard) -> Admission {
        let key = board.key();

        let Some(existing) = self.boards.get(&key) else {
            self.boards.insert(key, board);
            return Admission::Added;
        };

        if board.revision > existing.revision {
            let replaced = existing.source.clone();
            self.ties.remove(&key);
            self.boards.insert(key, board);
            Admission::Replaced(replaced)
        } else if board.revision < existing.revision {
            Admission::Ignored(board.source)
        } else {
            let kept = existing.source.clone();
            self.ties.entry(key).or_insert_with(|| RevisionTie {
                first: kept.clone(),
                second: board.source,
            });
            Admission::Conflict(kept)
        }
    }

    /// Boards whose newest revision is held by more than one file, lowest key first
    pub fn ties(&self) -> impl Iterator<Item = (&BoardKey, &RevisionTie)> {
        self.ties.iter()
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn get(&self, season: SeasonId, bracket: Bracket) -> Option<&LoadedBoard> {
        self.boards.get(&(season, bracket))
    }

    pub fn into_vec(self) -> Vec<LoadedBoard> {
        self.boards.into_values().collect()
    }
}

impl Default for LeaderboardCollection {
    fn default() -> Self {
        Self::new()
    }
}

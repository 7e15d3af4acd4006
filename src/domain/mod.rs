mod collection;
pub mod models;
pub mod snapshot;

pub use collection::{Admission, BoardKey, LeaderboardCollection, LoadedBoard, RevisionTie};
pub use models::*;
pub use snapshot::{CsvRow, EntryError, LeaderboardEntry, LeaderboardSnapshot};

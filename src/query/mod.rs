pub mod engine;
pub mod types;

pub use engine::{matches_search, run_query};
pub use types::{LeaderboardQuery, SortKey};

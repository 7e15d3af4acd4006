use std::cmp::Reverse;

use super::types::{LeaderboardQuery, SortKey};
use crate::domain::PlayerRecord;
use crate::store::DataStore;

/// Run a query against the store. Recomputed from scratch on every call;
/// an unknown season/bracket pair simply yields no records.
pub fn run_query<'a>(store: &'a DataStore, query: &LeaderboardQuery) -> Vec<&'a PlayerRecord> {
    let needle = query.search_needle();

    let mut results: Vec<&PlayerRecord> = store
        .board(query.season, query.bracket)
        .iter()
        .filter(|r| r.season == query.season && r.bracket == query.bracket)
        .filter(|r| needle.as_deref().is_none_or(|n| matches_search(r, n)))
        .collect();

    sort_records(&mut results, query.sort);
    results
}

/// Case-insensitive substring match on player, team and member names.
/// `needle` must already be lowercased.
pub fn matches_search(record: &PlayerRecord, needle: &str) -> bool {
    contains_ignore_case(&record.name, needle)
        || record
            .team
            .as_deref()
            .is_some_and(|team| contains_ignore_case(team, needle))
        || record
            .members
            .iter()
            .any(|m| contains_ignore_case(&m.name, needle))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Rank order first, then a stable sort on the secondary key
pub fn sort_records(records: &mut [&PlayerRecord], key: SortKey) {
    records.sort_by_key(|r| r.rank);

    match key {
        SortKey::Rank => {}
        SortKey::Rating => records.sort_by_key(|r| Reverse(r.rating)),
        SortKey::Wins => records.sort_by_key(|r| Reverse(r.wins)),
        SortKey::Losses => records.sort_by_key(|r| r.losses),
        SortKey::Name => records.sort_by_cached_key(|r| r.name.to_lowercase()),
        SortKey::WinRate => records.sort_by(|a, b| win_rate_key(b).total_cmp(&win_rate_key(a))),
    }
}

/// Records without games sort after everyone who played
fn win_rate_key(record: &PlayerRecord) -> f64 {
    record.win_rate().unwrap_or(-1.0)
}

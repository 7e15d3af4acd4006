use std::str::FromStr;

use crate::domain::{Bracket, SeasonId};

/// Result ordering; every key other than `Rank` is a stable sort over rank order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Rank,
    Rating,
    Wins,
    Losses,
    Name,
    WinRate,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Rank,
        SortKey::Rating,
        SortKey::Wins,
        SortKey::Losses,
        SortKey::Name,
        SortKey::WinRate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rank => "rank",
            SortKey::Rating => "rating",
            SortKey::Wins => "wins",
            SortKey::Losses => "losses",
            SortKey::Name => "name",
            SortKey::WinRate => "winrate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Rank => "Rank",
            SortKey::Rating => "Rating (high to low)",
            SortKey::Wins => "Wins (most first)",
            SortKey::Losses => "Losses (fewest first)",
            SortKey::Name => "Name (A to Z)",
            SortKey::WinRate => "Win rate (best first)",
        }
    }

    /// Unknown or missing keys fall back to rank order
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| format!("unknown sort key {:?}", s))
    }
}

/// Parameters of one leaderboard lookup
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardQuery {
    pub season: SeasonId,
    pub bracket: Bracket,
    pub search: Option<String>,
    pub sort: SortKey,
}

impl LeaderboardQuery {
    pub fn new(season: SeasonId, bracket: Bracket) -> Self {
        Self {
            season,
            bracket,
            search: None,
            sort: SortKey::Rank,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Lowercased, trimmed search text; `None` when there is nothing to match
    pub fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

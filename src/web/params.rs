use serde::Deserialize;

use crate::config::PresentationSettings;
use crate::domain::{Bracket, SeasonId};
use crate::presentation::{default_bracket, default_controls, Controls};
use crate::query::SortKey;
use crate::store::DataStore;

/// Raw control values from the query string. Kept as strings so that
/// garbage falls back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardParams {
    pub season: Option<String>,
    pub bracket: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
}

impl LeaderboardParams {
    pub fn resolve(&self, store: &DataStore, settings: &PresentationSettings) -> Controls {
        let defaults = default_controls(store, settings);

        let season = parse_season(self.season.as_deref()).or(defaults.season);
        let bracket = parse_bracket(self.bracket.as_deref())
            .unwrap_or_else(|| default_bracket(store, season, settings.default_bracket));

        Controls {
            season,
            bracket,
            search: self.q.clone().unwrap_or_default(),
            sort: SortKey::parse_or_default(self.sort.as_deref()),
            page: parse_page(self.page.as_deref()),
        }
    }
}

fn parse_season(value: Option<&str>) -> Option<SeasonId> {
    value?.parse().ok()
}

fn parse_bracket(value: Option<&str>) -> Option<Bracket> {
    value?.parse().ok()
}

fn parse_page(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .max(1)
}

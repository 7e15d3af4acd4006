use anyhow::{Context, Result};
use std::sync::Arc;

use super::loading::load_store;
use crate::config::AppConfig;
use crate::domain::{Bracket, SeasonId};
use crate::presentation::table::render_table;
use crate::presentation::{default_bracket, Control, ViewState};
use crate::query::SortKey;
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq)]
pub struct QueryOptions {
    pub season: Option<SeasonId>,
    pub bracket: Option<Bracket>,
    pub search: String,
    pub sort: SortKey,
    pub page: usize,
}

/// One-shot leaderboard lookup printed as a terminal table
pub struct QueryService {
    config: AppConfig,
}

impl QueryService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, options: &QueryOptions) -> Result<()> {
        let output = self.render(options)?;
        print!("{}", output);
        Ok(())
    }

    /// Start from the default view and feed each option in as a control change
    pub fn render(&self, options: &QueryOptions) -> Result<String> {
        let (store, _) = load_store(&self.config).context("Failed to load leaderboard data")?;
        let settings = &self.config.presentation;
        let store = Arc::new(store);

        let mut state = ViewState::new(store.clone(), settings);
        for control in controls_for(options, &store, settings.default_bracket) {
            state.apply(control);
        }

        Ok(render_table(state.view()))
    }
}

fn controls_for(options: &QueryOptions, store: &DataStore, preferred: Bracket) -> Vec<Control> {
    let mut controls = Vec::new();

    if let Some(season) = options.season {
        controls.push(Control::SelectSeason(season));
        let bracket = options
            .bracket
            .unwrap_or_else(|| default_bracket(store, Some(season), preferred));
        controls.push(Control::SelectBracket(bracket));
    } else if let Some(bracket) = options.bracket {
        controls.push(Control::SelectBracket(bracket));
    }

    if !options.search.is_empty() {
        controls.push(Control::Search(options.search.clone()));
    }
    if options.sort != SortKey::Rank {
        controls.push(Control::Sort(options.sort));
    }
    if options.page > 1 {
        controls.push(Control::GoToPage(options.page));
    }

    controls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{individual_snapshot, TempDataDir};

    fn service_for(dir: &TempDataDir) -> QueryService {
        let mut config = AppConfig::new();
        config.data.data_dir = dir.path().to_path_buf();
        QueryService::new(config)
    }

    fn options(search: &str) -> QueryOptions {
        QueryOptions {
            season: Some(SeasonId(1)),
            bracket: Some(Bracket::ThreeVsThree),
            search: search.to_string(),
            sort: SortKey::Rank,
            page: 1,
        }
    }

    #[test]
    fn test_query_renders_matching_rows() {
        colored::control::set_override(false);
        let dir = TempDataDir::new("query_service");
        dir.write(
            "season_1_3v3_tw_arena.json",
            &individual_snapshot(&[(1, "Alice", 2100), (2, "Bob", 2000)]),
        );
        let service = service_for(&dir);

        let all = service.render(&options("")).unwrap();
        assert!(all.contains("Alice") && all.contains("Bob"));

        let alice = service.render(&options("alice")).unwrap();
        assert!(alice.contains("Alice"));
        assert!(!alice.contains("Bob"));
    }

    #[test]
    fn test_options_become_control_changes() {
        let store = crate::test_utils::sample_store();
        let options = QueryOptions {
            season: Some(SeasonId(1)),
            bracket: None,
            search: "o".to_string(),
            sort: SortKey::Wins,
            page: 2,
        };

        let controls = controls_for(&options, &store, Bracket::ThreeVsThree);

        assert_eq!(
            controls,
            vec![
                Control::SelectSeason(SeasonId(1)),
                Control::SelectBracket(Bracket::ThreeVsThree),
                Control::Search("o".to_string()),
                Control::Sort(SortKey::Wins),
                Control::GoToPage(2),
            ]
        );
    }

    #[test]
    fn test_query_pages_through_results() {
        colored::control::set_override(false);
        let dir = TempDataDir::new("query_service_pages");
        dir.write(
            "season_1_3v3_tw_arena.json",
            &individual_snapshot(&[(1, "Alice", 2100), (2, "Bob", 2000), (3, "Carol", 1900)]),
        );
        let mut config = AppConfig::new();
        config.data.data_dir = dir.path().to_path_buf();
        config.presentation.pagination = config.presentation.pagination.with_page_size(2);
        let service = QueryService::new(config);

        let second = service
            .render(&QueryOptions {
                page: 2,
                ..options("")
            })
            .unwrap();

        assert!(second.contains("Carol"));
        assert!(!second.contains("Alice"));
        assert!(second.contains("Page 2 of 2 (3 records)"));
    }

    #[test]
    fn test_query_fails_when_data_is_missing() {
        let dir = TempDataDir::new("query_service_missing");

        assert!(service_for(&dir).render(&options("")).is_err());
    }
}

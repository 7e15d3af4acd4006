use std::sync::Arc;

use crate::config::PresentationSettings;
use crate::domain::{Bracket, PlayerRecord, Season, SeasonId};
use crate::pagination::{paginate, Page, PaginationConfig};
use crate::query::{run_query, LeaderboardQuery, SortKey};
use crate::store::DataStore;

/// What the presentation layer has to show: data, or the reason there is none
#[derive(Debug, Clone)]
pub enum LoadState {
    Ready(Arc<DataStore>),
    Failed(String),
}

impl LoadState {
    pub fn store(&self) -> Option<&Arc<DataStore>> {
        match self {
            LoadState::Ready(store) => Some(store),
            LoadState::Failed(_) => None,
        }
    }
}

/// Current values of the user-facing controls
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub season: Option<SeasonId>,
    pub bracket: Bracket,
    pub search: String,
    pub sort: SortKey,
    pub page: usize,
}

impl Controls {
    /// Query-string form, page excluded
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(season) = self.season {
            params.push(("season", season.to_string()));
        }
        params.push(("bracket", self.bracket.to_string()));
        params.push(("q", self.search.clone()));
        if self.sort != SortKey::Rank {
            params.push(("sort", self.sort.as_str().to_string()));
        }
        params
    }
}

/// A user-driven change to one control
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    SelectSeason(SeasonId),
    SelectBracket(Bracket),
    Search(String),
    Sort(SortKey),
    GoToPage(usize),
}

/// Derived, render-ready state
#[derive(Debug, Clone)]
pub struct LeaderboardView {
    pub controls: Controls,
    pub season: Option<Season>,
    pub seasons: Vec<Season>,
    /// Brackets loaded for the selected season
    pub brackets: Vec<Bracket>,
    pub page: Page<PlayerRecord>,
}

impl LeaderboardView {
    pub fn is_empty(&self) -> bool {
        self.page.total == 0
    }
}

/// Holds the controls and recomputes the view synchronously on every change
pub struct ViewState {
    store: Arc<DataStore>,
    pagination: PaginationConfig,
    view: LeaderboardView,
}

impl ViewState {
    /// Start on the latest season with the preferred bracket
    pub fn new(store: Arc<DataStore>, settings: &PresentationSettings) -> Self {
        let controls = default_controls(&store, settings);
        Self::with_controls(store, settings, controls)
    }

    pub fn with_controls(store: Arc<DataStore>, settings: &PresentationSettings, controls: Controls) -> Self {
        let pagination = settings.pagination.clone();
        let view = build_view(&store, &pagination, controls);
        Self {
            store,
            pagination,
            view,
        }
    }

    pub fn view(&self) -> &LeaderboardView {
        &self.view
    }

    pub fn controls(&self) -> &Controls {
        &self.view.controls
    }

    /// Apply a control change and re-run the query
    pub fn apply(&mut self, control: Control) -> &LeaderboardView {
        let mut controls = self.view.controls.clone();
        let resets_page = !matches!(control, Control::GoToPage(_));

        match control {
            Control::SelectSeason(season) => controls.season = Some(season),
            Control::SelectBracket(bracket) => controls.bracket = bracket,
            Control::Search(text) => controls.search = text,
            Control::Sort(sort) => controls.sort = sort,
            Control::GoToPage(page) => controls.page = page,
        }

        if resets_page {
            controls.page = 1;
        }

        self.view = build_view(&self.store, &self.pagination, controls);
        &self.view
    }
}

/// Latest season; preferred bracket if loaded there, else the first loaded one
pub fn default_controls(store: &DataStore, settings: &PresentationSettings) -> Controls {
    let season = store.latest_season().map(|s| s.id);
    Controls {
        season,
        bracket: default_bracket(store, season, settings.default_bracket),
        search: String::new(),
        sort: SortKey::Rank,
        page: 1,
    }
}

pub fn default_bracket(store: &DataStore, season: Option<SeasonId>, preferred: Bracket) -> Bracket {
    let loaded = season.map(|s| store.brackets_for(s)).unwrap_or_default();
    if loaded.contains(&preferred) {
        preferred
    } else {
        loaded.first().copied().unwrap_or(preferred)
    }
}

fn build_view(store: &DataStore, pagination: &PaginationConfig, mut controls: Controls) -> LeaderboardView {
    let results: Vec<PlayerRecord> = match controls.season {
        Some(season) => {
            let query = LeaderboardQuery::new(season, controls.bracket)
                .with_search(controls.search.clone())
                .with_sort(controls.sort);
            run_query(store, &query).into_iter().cloned().collect()
        }
        None => Vec::new(),
    };

    let page = paginate(results, controls.page, pagination.page_size);
    controls.page = page.page;

    LeaderboardView {
        season: controls.season.and_then(|id| store.season(id).cloned()),
        seasons: store.seasons().cloned().collect(),
        brackets: controls.season.map(|s| store.brackets_for(s)).unwrap_or_default(),
        controls,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{record, sample_store, store_from};

    fn settings_with_page_size(size: usize) -> PresentationSettings {
        PresentationSettings {
            pagination: PaginationConfig::new().with_page_size(size),
            ..PresentationSettings::default()
        }
    }

    fn names(view: &LeaderboardView) -> Vec<&str> {
        view.page.items.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_defaults_to_latest_season_and_loaded_bracket() {
        let state = ViewState::new(Arc::new(sample_store()), &PresentationSettings::default());

        assert_eq!(state.controls().season, Some(SeasonId(2)));
        assert_eq!(state.controls().bracket, Bracket::ThreeVsThree);
        assert_eq!(names(state.view()), vec!["Dave"]);
        assert_eq!(state.view().brackets, vec![Bracket::ThreeVsThree, Bracket::FiveVsFive]);
    }

    #[test]
    fn test_falls_back_to_first_loaded_bracket() {
        let store = store_from(vec![record(7, Bracket::FiveVsFive, 1, "Erin", 1800)]);

        let state = ViewState::new(Arc::new(store), &PresentationSettings::default());

        assert_eq!(state.controls().bracket, Bracket::FiveVsFive);
    }

    #[test]
    fn test_each_control_change_requeries() {
        let mut state = ViewState::new(Arc::new(sample_store()), &PresentationSettings::default());

        state.apply(Control::SelectSeason(SeasonId(1)));
        assert_eq!(names(state.view()), vec!["Alice", "Bob", "Carol"]);

        state.apply(Control::Search("BOB".to_string()));
        assert_eq!(names(state.view()), vec!["Bob"]);

        state.apply(Control::SelectBracket(Bracket::TwoVsTwo));
        assert_eq!(names(state.view()), vec!["Bob"]);
        assert_eq!(state.view().page.items[0].rating, 1900);

        state.apply(Control::Search(String::new()));
        state.apply(Control::SelectBracket(Bracket::ThreeVsThree));
        state.apply(Control::Sort(SortKey::Wins));
        assert_eq!(names(state.view()), vec!["Bob", "Carol", "Alice"]);
    }

    #[test]
    fn test_missing_bracket_shows_empty_view() {
        let mut state = ViewState::new(Arc::new(sample_store()), &PresentationSettings::default());

        let view = state.apply(Control::SelectBracket(Bracket::TwoVsTwo));

        assert!(view.is_empty());
        assert_eq!(view.controls.bracket, Bracket::TwoVsTwo);
    }

    #[test]
    fn test_paging_and_reset_on_change() {
        let store = Arc::new(sample_store());
        let mut state = ViewState::new(store, &settings_with_page_size(2));
        state.apply(Control::SelectSeason(SeasonId(1)));

        let view = state.apply(Control::GoToPage(2));
        assert_eq!(view.page.page, 2);
        assert_eq!(view.page.items.len(), 1);

        let view = state.apply(Control::GoToPage(40));
        assert_eq!(view.controls.page, 2);

        let view = state.apply(Control::Sort(SortKey::Rating));
        assert_eq!(view.controls.page, 1);
    }

    #[test]
    fn test_params_skip_default_sort() {
        let state = ViewState::new(Arc::new(sample_store()), &PresentationSettings::default());

        let params = state.controls().to_params();

        assert!(params.contains(&("season", "2".to_string())));
        assert!(params.contains(&("bracket", "3v3".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "sort"));
    }
}

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use super::params::LeaderboardParams;
use crate::config::AppConfig;
use crate::presentation::html::{render_load_error, render_page};
use crate::presentation::{LoadState, ViewState};

pub struct AppState {
    pub load: LoadState,
    pub config: AppConfig,
}

pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardParams>,
) -> impl IntoResponse {
    let settings = &state.config.presentation;

    let store = match &state.load {
        LoadState::Ready(store) => store.clone(),
        LoadState::Failed(message) => {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Html(render_load_error(message, settings.site_title)),
            )
                .into_response();
        }
    };

    let controls = params.resolve(&store, settings);
    let view_state = ViewState::with_controls(store, settings, controls);

    Html(render_page(view_state.view(), settings.site_title)).into_response()
}

pub async fn get_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match &state.load {
        LoadState::Ready(_) => (StatusCode::OK, "ok"),
        LoadState::Failed(_) => (StatusCode::SERVICE_UNAVAILABLE, "data not loaded"),
    }
}

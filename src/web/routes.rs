use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;

use super::handlers::{get_health, get_leaderboard, AppState};

/// Leaderboard pages plus the raw snapshot files under `/data`
pub fn create_router(state: Arc<AppState>) -> Router {
    let data_files = ServeDir::new(&state.config.data.data_dir);

    Router::new()
        .route("/", get(get_leaderboard))
        .route("/health", get(get_health))
        .nest_service("/data", data_files)
        .with_state(state)
}

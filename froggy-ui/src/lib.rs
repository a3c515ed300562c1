//! froggy-ui library - web server for the frog explorer
//!
//! Serves the species explorer, call browser, mock identifier, and fun
//! facts over a JSON API, plus an embedded single-page UI.

use axum::Router;
use sqlx::SqlitePool;
use std::path::PathBuf;
use tower_http::services::ServeDir;

pub mod api;
pub mod pagination;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Directory holding locally downloaded call recordings
    pub audio_dir: PathBuf,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, audio_dir: PathBuf) -> Self {
        Self { db, audio_dir }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let audio_dir = state.audio_dir.clone();

    Router::new()
        .route("/api/species", get(api::list_species))
        .route("/api/species/:id", get(api::get_species))
        .route("/api/species/:id/calls", get(api::calls_for_species))
        .route("/api/calls", get(api::list_calls))
        .route("/api/calls/search", get(api::search_calls))
        .route("/api/identify", post(api::identify))
        .route("/api/quiz", get(api::quiz_question))
        .route("/api/facts/random", get(api::random_fact))
        .route("/api/facts/sounds", get(api::sound_facts))
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .merge(api::health_routes())
        .nest_service("/audio", ServeDir::new(audio_dir))
        .with_state(state)
}

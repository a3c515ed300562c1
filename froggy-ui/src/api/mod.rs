//! HTTP API handlers

mod calls;
mod facts;
mod health;
mod identify;
mod quiz;
mod species;
mod ui;

pub use calls::{calls_for_species, list_calls, search_calls};
pub use facts::{random_fact, sound_facts};
pub use health::{health_check, health_routes};
pub use identify::identify;
pub use quiz::quiz_question;
pub use species::{get_species, list_species};
pub use ui::{serve_app_js, serve_index};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// API-level errors, rendered as JSON `{"error": ...}` bodies
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Database(String),
}

impl From<froggy_common::Error> for ApiError {
    fn from(err: froggy_common::Error) -> Self {
        match err {
            froggy_common::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Database(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Database(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

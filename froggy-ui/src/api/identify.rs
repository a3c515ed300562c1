//! Mock identifier endpoint
//!
//! Returns randomized ranked results; the submitted image is acknowledged
//! but never inspected. See froggy_common::identify for the sampling and
//! confidence allocation.

use axum::extract::State;
use axum::Json;
use froggy_common::db;
use froggy_common::identify::{self, Identification};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::AppState;

/// Request body; the file name is echoed back for the UI, nothing more
#[derive(Debug, Default, Deserialize)]
pub struct IdentifyRequest {
    pub file_name: Option<String>,
}

/// Identification response
#[derive(Debug, Serialize)]
pub struct IdentifyResponse {
    pub message: String,
    pub file_name: Option<String>,
    pub results: Vec<Identification>,
}

/// POST /api/identify
pub async fn identify(
    State(state): State<AppState>,
    body: Option<Json<IdentifyRequest>>,
) -> Result<Json<IdentifyResponse>, ApiError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let species = db::list_species(&state.db).await?;
    let results = identify::identify(&species, &mut rand::thread_rng());

    let message = if results.is_empty() {
        "No species data loaded - run froggy-import first.".to_string()
    } else {
        "Identification complete. Here are the most likely matches.".to_string()
    };

    Ok(Json(IdentifyResponse {
        message,
        file_name: request.file_name,
        results,
    }))
}

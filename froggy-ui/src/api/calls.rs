//! Call browser API: listing and search

use axum::extract::{Path, Query, State};
use axum::Json;
use froggy_common::db::{self, CallRow};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::AppState;

/// Call listing response
#[derive(Debug, Serialize)]
pub struct CallListResponse {
    pub total: usize,
    pub calls: Vec<CallRow>,
}

/// GET /api/calls
pub async fn list_calls(State(state): State<AppState>) -> Result<Json<CallListResponse>, ApiError> {
    let calls = db::list_calls(&state.db).await?;
    Ok(Json(CallListResponse {
        total: calls.len(),
        calls,
    }))
}

/// GET /api/species/:id/calls
pub async fn calls_for_species(
    State(state): State<AppState>,
    Path(species_id): Path<i64>,
) -> Result<Json<CallListResponse>, ApiError> {
    if db::get_species(&state.db, species_id).await?.is_none() {
        return Err(ApiError::NotFound(format!("No species with id {}", species_id)));
    }

    let calls = db::calls_for_species(&state.db, species_id).await?;
    Ok(Json(CallListResponse {
        total: calls.len(),
        calls,
    }))
}

/// Query parameters for call search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-text term matched against species name, scientific name, and
    /// call description
    pub q: Option<String>,
    /// Exact region filter
    pub region: Option<String>,
}

/// Call search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: Option<String>,
    pub region: Option<String>,
    pub total: usize,
    pub calls: Vec<CallRow>,
}

/// GET /api/calls/search
///
/// Requires at least one criterion; an empty search would just duplicate
/// GET /api/calls.
pub async fn search_calls(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = query.q.as_deref().filter(|q| !q.trim().is_empty());
    let region = query.region.as_deref().filter(|r| !r.is_empty());

    if term.is_none() && region.is_none() {
        return Err(ApiError::BadRequest(
            "Empty search: provide a search term or a region filter".to_string(),
        ));
    }

    let calls = db::search_calls(&state.db, term, region).await?;

    Ok(Json(SearchResponse {
        query: term.map(str::to_string),
        region: region.map(str::to_string),
        total: calls.len(),
        calls,
    }))
}

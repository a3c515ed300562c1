//! Species explorer API: filtered listing and detail views

use axum::extract::{Path, Query, State};
use axum::Json;
use froggy_common::db::{self, SpeciesRow};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::ApiError;
use crate::pagination::{calculate_pagination, PAGE_SIZE};
use crate::AppState;

/// Query parameters for the species listing
#[derive(Debug, Deserialize)]
pub struct SpeciesQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Exact-match filters (values come from the filter dropdowns)
    pub habitat: Option<String>,
    pub region: Option<String>,
    pub status: Option<String>,
}

fn default_page() -> i64 {
    1
}

/// Distinct column values for the UI filter dropdowns
#[derive(Debug, Serialize)]
pub struct FilterValues {
    pub habitats: Vec<String>,
    pub regions: Vec<String>,
    pub statuses: Vec<String>,
}

/// Species listing response
#[derive(Debug, Serialize)]
pub struct SpeciesListResponse {
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub filters: FilterValues,
    pub species: Vec<SpeciesRow>,
}

/// GET /api/species
///
/// Filtered, paginated species list plus the distinct filter values.
pub async fn list_species(
    State(state): State<AppState>,
    Query(query): Query<SpeciesQuery>,
) -> Result<Json<SpeciesListResponse>, ApiError> {
    let total = count_filtered(&state.db, &query).await?;
    let pagination = calculate_pagination(total, query.page);

    let species = sqlx::query_as::<_, SpeciesRow>(
        r#"
        SELECT species_id, name, scientific_name, habitat, region,
               conservation_status, size_cm, lifespan_years, diet, color,
               image_url, description
        FROM frog_species
        WHERE (?1 IS NULL OR habitat = ?1)
          AND (?2 IS NULL OR region = ?2)
          AND (?3 IS NULL OR conservation_status = ?3)
        ORDER BY species_id
        LIMIT ?4 OFFSET ?5
        "#,
    )
    .bind(&query.habitat)
    .bind(&query.region)
    .bind(&query.status)
    .bind(PAGE_SIZE)
    .bind(pagination.offset)
    .fetch_all(&state.db)
    .await
    .map_err(|e| ApiError::Database(e.to_string()))?;

    let filters = FilterValues {
        habitats: db::distinct_species_values(&state.db, "habitat").await?,
        regions: db::distinct_species_values(&state.db, "region").await?,
        statuses: db::distinct_species_values(&state.db, "conservation_status").await?,
    };

    Ok(Json(SpeciesListResponse {
        total,
        page: pagination.page,
        page_size: PAGE_SIZE,
        total_pages: pagination.total_pages,
        filters,
        species,
    }))
}

async fn count_filtered(pool: &SqlitePool, query: &SpeciesQuery) -> Result<i64, ApiError> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM frog_species
        WHERE (?1 IS NULL OR habitat = ?1)
          AND (?2 IS NULL OR region = ?2)
          AND (?3 IS NULL OR conservation_status = ?3)
        "#,
    )
    .bind(&query.habitat)
    .bind(&query.region)
    .bind(&query.status)
    .fetch_one(pool)
    .await
    .map_err(|e| ApiError::Database(e.to_string()))
}

/// GET /api/species/:id
pub async fn get_species(
    State(state): State<AppState>,
    Path(species_id): Path<i64>,
) -> Result<Json<SpeciesRow>, ApiError> {
    db::get_species(&state.db, species_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No species with id {}", species_id)))
}

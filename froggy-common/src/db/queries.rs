//! Typed queries shared by the UI server and the import tool

use crate::matcher::SpeciesRef;
use crate::Result;
use serde::Serialize;
use sqlx::SqlitePool;

/// One row of the frog_species table
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SpeciesRow {
    pub species_id: i64,
    pub name: String,
    pub scientific_name: String,
    pub habitat: Option<String>,
    pub region: Option<String>,
    pub conservation_status: Option<String>,
    pub size_cm: Option<f64>,
    pub lifespan_years: Option<i64>,
    pub diet: Option<String>,
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// New species to insert (import tool)
#[derive(Debug, Clone)]
pub struct NewSpecies {
    pub name: String,
    pub scientific_name: String,
    pub habitat: Option<String>,
    pub region: Option<String>,
    pub conservation_status: Option<String>,
    pub size_cm: Option<f64>,
    pub lifespan_years: Option<i64>,
    pub diet: Option<String>,
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// One frog call joined with its species names
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CallRow {
    pub call_id: i64,
    pub species_id: i64,
    pub audio_url: String,
    pub description: Option<String>,
    pub local_file: bool,
    pub species_name: String,
    pub scientific_name: String,
}

const SPECIES_COLUMNS: &str = "species_id, name, scientific_name, habitat, region, \
     conservation_status, size_cm, lifespan_years, diet, color, image_url, description";

/// All species in insertion order.
///
/// The order matters: it is the tie-break order for the matcher's loose
/// tiers, so everything reads by species_id ascending.
pub async fn list_species(pool: &SqlitePool) -> Result<Vec<SpeciesRow>> {
    let rows = sqlx::query_as::<_, SpeciesRow>(&format!(
        "SELECT {SPECIES_COLUMNS} FROM frog_species ORDER BY species_id"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Species reference set for the matcher, in insertion order
pub async fn species_reference(pool: &SqlitePool) -> Result<Vec<SpeciesRef>> {
    let rows = sqlx::query_as::<_, (i64, String, String)>(
        "SELECT species_id, name, scientific_name FROM frog_species ORDER BY species_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, scientific_name)| SpeciesRef {
            id,
            name,
            scientific_name,
        })
        .collect())
}

/// Fetch a single species by id
pub async fn get_species(pool: &SqlitePool, species_id: i64) -> Result<Option<SpeciesRow>> {
    let row = sqlx::query_as::<_, SpeciesRow>(&format!(
        "SELECT {SPECIES_COLUMNS} FROM frog_species WHERE species_id = ?"
    ))
    .bind(species_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn count_species(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM frog_species")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Insert a species row, returning its new id
pub async fn insert_species(pool: &SqlitePool, species: &NewSpecies) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO frog_species (
            name, scientific_name, habitat, region, conservation_status,
            size_cm, lifespan_years, diet, color, image_url, description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&species.name)
    .bind(&species.scientific_name)
    .bind(&species.habitat)
    .bind(&species.region)
    .bind(&species.conservation_status)
    .bind(species.size_cm)
    .bind(species.lifespan_years)
    .bind(&species.diet)
    .bind(&species.color)
    .bind(&species.image_url)
    .bind(&species.description)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// All calls joined with species names, in insertion order
pub async fn list_calls(pool: &SqlitePool) -> Result<Vec<CallRow>> {
    let rows = sqlx::query_as::<_, CallRow>(
        r#"
        SELECT fc.call_id, fc.species_id, fc.audio_url, fc.description, fc.local_file,
               fs.name AS species_name, fs.scientific_name
        FROM frog_calls fc
        JOIN frog_species fs ON fc.species_id = fs.species_id
        ORDER BY fc.call_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Calls for a single species
pub async fn calls_for_species(pool: &SqlitePool, species_id: i64) -> Result<Vec<CallRow>> {
    let rows = sqlx::query_as::<_, CallRow>(
        r#"
        SELECT fc.call_id, fc.species_id, fc.audio_url, fc.description, fc.local_file,
               fs.name AS species_name, fs.scientific_name
        FROM frog_calls fc
        JOIN frog_species fs ON fc.species_id = fs.species_id
        WHERE fc.species_id = ?
        ORDER BY fc.call_id
        "#,
    )
    .bind(species_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Case-insensitive search over species names, scientific names, and call
/// descriptions, with an optional region filter
pub async fn search_calls(
    pool: &SqlitePool,
    query: Option<&str>,
    region: Option<&str>,
) -> Result<Vec<CallRow>> {
    let pattern = query.map(|q| format!("%{}%", q));

    let rows = sqlx::query_as::<_, CallRow>(
        r#"
        SELECT fc.call_id, fc.species_id, fc.audio_url, fc.description, fc.local_file,
               fs.name AS species_name, fs.scientific_name
        FROM frog_calls fc
        JOIN frog_species fs ON fc.species_id = fs.species_id
        WHERE (?1 IS NULL
               OR fs.name LIKE ?1
               OR fs.scientific_name LIKE ?1
               OR fc.description LIKE ?1)
          AND (?2 IS NULL OR fs.region = ?2)
        ORDER BY fc.call_id
        "#,
    )
    .bind(pattern)
    .bind(region)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn count_calls(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM frog_calls")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Whether a call with this audio URL is already recorded (dedup on import)
pub async fn call_exists(pool: &SqlitePool, audio_url: &str) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM frog_calls WHERE audio_url = ?")
        .bind(audio_url)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Insert a call entry, returning its new id
pub async fn insert_call(
    pool: &SqlitePool,
    species_id: i64,
    audio_url: &str,
    description: Option<&str>,
    local_file: bool,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO frog_calls (species_id, audio_url, description, local_file)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(species_id)
    .bind(audio_url)
    .bind(description)
    .bind(local_file)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Remote (non-local) audio URLs, for the verify subcommand
pub async fn remote_call_urls(pool: &SqlitePool) -> Result<Vec<String>> {
    let urls = sqlx::query_scalar("SELECT audio_url FROM frog_calls WHERE local_file = 0")
        .fetch_all(pool)
        .await?;
    Ok(urls)
}

/// Distinct non-null values of one species column, for UI filter dropdowns.
///
/// Only the filterable columns are accepted; anything else is rejected
/// before it reaches the interpolated query.
pub async fn distinct_species_values(pool: &SqlitePool, column: &str) -> Result<Vec<String>> {
    if !matches!(column, "habitat" | "region" | "conservation_status") {
        return Err(crate::Error::InvalidInput(format!(
            "Not a filterable species column: {column}"
        )));
    }

    let values = sqlx::query_scalar(&format!(
        "SELECT DISTINCT {column} FROM frog_species WHERE {column} IS NOT NULL ORDER BY {column}"
    ))
    .fetch_all(pool)
    .await?;
    Ok(values)
}

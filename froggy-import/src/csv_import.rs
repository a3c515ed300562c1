//! Species dataset import from CSV

use anyhow::{Context, Result};
use froggy_common::db::{self, NewSpecies};
use serde::Deserialize;
use sqlx::SqlitePool;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// One row of the species CSV (column names match the dataset header)
#[derive(Debug, Deserialize)]
pub struct CsvSpecies {
    pub name: String,
    pub scientific_name: String,
    pub habitat: String,
    pub region: String,
    pub conservation_status: String,
    pub size_cm: f64,
    pub lifespan_years: i64,
    pub diet: String,
    pub color: String,
    pub image_url: Option<String>,
}

/// Parse species rows from any CSV reader
pub fn parse_species_csv<R: Read>(reader: R) -> Result<Vec<CsvSpecies>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.deserialize() {
        rows.push(record.context("Malformed species CSV row")?);
    }
    Ok(rows)
}

/// Build the long-form description shown on species cards.
///
/// The dataset ships without one, so it is synthesized from the row's
/// structured fields.
pub fn describe(row: &CsvSpecies) -> String {
    format!(
        "{} ({}) is a {} frog found in {} habitats of {}. \
         It grows to approximately {} cm and can live up to {} years. \
         Its diet consists primarily of {}. \
         The conservation status is currently listed as {}.",
        row.name,
        row.scientific_name,
        row.color.to_lowercase(),
        row.habitat.to_lowercase(),
        row.region,
        row.size_cm,
        row.lifespan_years,
        row.diet.to_lowercase(),
        row.conservation_status
    )
}

/// Import the species CSV into the database.
///
/// Skips entirely when the table already has rows ("insert if not
/// present" is the only durability promise here). Returns the number of
/// rows inserted.
pub async fn import_species(pool: &SqlitePool, csv_path: &Path) -> Result<usize> {
    let existing = db::count_species(pool).await?;
    if existing > 0 {
        info!(
            "frog_species already contains {} records - skipping import",
            existing
        );
        return Ok(0);
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Cannot open species CSV: {}", csv_path.display()))?;
    let rows = parse_species_csv(file)?;

    let mut inserted = 0;
    for row in &rows {
        let species = NewSpecies {
            name: row.name.clone(),
            scientific_name: row.scientific_name.clone(),
            habitat: Some(row.habitat.clone()),
            region: Some(row.region.clone()),
            conservation_status: Some(row.conservation_status.clone()),
            size_cm: Some(row.size_cm),
            lifespan_years: Some(row.lifespan_years),
            diet: Some(row.diet.clone()),
            color: Some(row.color.clone()),
            image_url: row.image_url.clone(),
            description: Some(describe(row)),
        };
        db::insert_species(pool, &species).await?;
        inserted += 1;
    }

    info!("Imported {} species from {}", inserted, csv_path.display());
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE_CSV: &str = "\
name,scientific_name,habitat,region,conservation_status,size_cm,lifespan_years,diet,color,image_url
Red-Eyed Tree Frog,Agalychnis callidryas,Rainforest,Central America,Least Concern,7.1,5,Insects,Green,https://example.org/red_eyed.jpg
American Bullfrog,Lithobates catesbeianus,Wetlands,North America,Least Concern,15.0,9,Insects and small vertebrates,Green-brown,
";

    #[test]
    fn test_parse_species_csv() {
        let rows = parse_species_csv(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Red-Eyed Tree Frog");
        assert_eq!(rows[1].size_cm, 15.0);
        assert!(rows[1].image_url.as_deref().unwrap_or("").is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_rows() {
        let bad = "name,scientific_name,habitat,region,conservation_status,size_cm,lifespan_years,diet,color,image_url\n\
                   Oops,Rana exempli,Swamp,Europe,Least Concern,not-a-number,4,Insects,Brown,\n";
        assert!(parse_species_csv(bad.as_bytes()).is_err());
    }

    #[test]
    fn test_describe_mentions_key_fields() {
        let rows = parse_species_csv(SAMPLE_CSV.as_bytes()).unwrap();
        let text = describe(&rows[0]);
        assert!(text.contains("Red-Eyed Tree Frog"));
        assert!(text.contains("Agalychnis callidryas"));
        assert!(text.contains("7.1 cm"));
        assert!(text.contains("Least Concern"));
    }

    #[tokio::test]
    async fn test_import_is_insert_if_absent() {
        let dir = TempDir::new().unwrap();
        let pool = froggy_common::db::init_database(&dir.path().join("froggy.db"))
            .await
            .unwrap();

        let csv_path = dir.path().join("frog_species.csv");
        std::fs::write(&csv_path, SAMPLE_CSV).unwrap();

        let inserted = import_species(&pool, &csv_path).await.unwrap();
        assert_eq!(inserted, 2);

        // Second run is a no-op
        let inserted = import_species(&pool, &csv_path).await.unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(froggy_common::db::count_species(&pool).await.unwrap(), 2);
    }
}

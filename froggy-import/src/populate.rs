//! Curated call population
//!
//! Resolves each curated call entry to a canonical species id through the
//! tiered matcher and inserts it, skipping duplicates by audio URL. Loose
//! matches are logged so the mapping can be audited afterwards.

use anyhow::Result;
use froggy_common::db;
use froggy_common::matcher::{match_species, CallCandidate};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::seed::{SeedCall, CURATED_CALLS};

/// Outcome counts for a population run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PopulateStats {
    pub added: usize,
    pub duplicates: usize,
    pub low_confidence: usize,
}

/// Insert the bundled curated call list
pub async fn populate_curated_calls(pool: &SqlitePool) -> Result<PopulateStats> {
    populate_calls(pool, CURATED_CALLS).await
}

/// Insert the given call entries, resolving species names as we go
pub async fn populate_calls(pool: &SqlitePool, calls: &[SeedCall]) -> Result<PopulateStats> {
    let reference = db::species_reference(pool).await?;
    if reference.is_empty() {
        warn!("Species table is empty - load the species dataset first; no calls inserted");
        return Ok(PopulateStats::default());
    }

    let mut stats = PopulateStats::default();

    for call in calls {
        if db::call_exists(pool, call.audio_url).await? {
            info!("Skipping duplicate URL: {}", call.audio_url);
            stats.duplicates += 1;
            continue;
        }

        let candidate = CallCandidate {
            name: call.species_name.to_string(),
            scientific_name: Some(call.scientific_name.to_string()),
        };

        // Reference set is non-empty, so the matcher always resolves
        let Some(resolved) = match_species(&candidate, &reference) else {
            continue;
        };

        if resolved.tier.is_low_confidence() {
            warn!(
                "Loose match ({:?}) for '{}' -> species {}",
                resolved.tier, call.species_name, resolved.species_id
            );
            stats.low_confidence += 1;
        }

        db::insert_call(
            pool,
            resolved.species_id,
            call.audio_url,
            Some(call.description),
            false,
        )
        .await?;

        info!("Added call for {}", call.species_name);
        stats.added += 1;
    }

    info!(
        "Added {} calls ({} duplicates skipped, {} loose matches)",
        stats.added, stats.duplicates, stats.low_confidence
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use froggy_common::db::NewSpecies;
    use tempfile::TempDir;

    fn species(name: &str, scientific_name: &str) -> NewSpecies {
        NewSpecies {
            name: name.to_string(),
            scientific_name: scientific_name.to_string(),
            habitat: None,
            region: None,
            conservation_status: None,
            size_cm: None,
            lifespan_years: None,
            diet: None,
            color: None,
            image_url: None,
            description: None,
        }
    }

    async fn setup() -> (TempDir, SqlitePool) {
        let dir = TempDir::new().unwrap();
        let pool = froggy_common::db::init_database(&dir.path().join("froggy.db"))
            .await
            .unwrap();
        (dir, pool)
    }

    #[tokio::test]
    async fn test_empty_species_table_inserts_nothing() {
        let (_dir, pool) = setup().await;

        let stats = populate_curated_calls(&pool).await.unwrap();
        assert_eq!(stats, PopulateStats::default());
        assert_eq!(db::count_calls(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_exact_and_loose_resolution() {
        let (_dir, pool) = setup().await;

        let bullfrog = db::insert_species(&pool, &species("American Bullfrog", "Lithobates catesbeianus"))
            .await
            .unwrap();
        db::insert_species(&pool, &species("Gray Tree Frog", "Hyla versicolor"))
            .await
            .unwrap();

        let calls = [
            // Exact name match
            SeedCall {
                species_name: "American Bullfrog",
                scientific_name: "Lithobates catesbeianus",
                audio_url: "https://example.org/bullfrog.mp3",
                description: "Jug-o-rum",
            },
            // Genus-only match: Hyla gratiosa is not in the dataset
            SeedCall {
                species_name: "Barking Treefrog",
                scientific_name: "Hyla gratiosa",
                audio_url: "https://example.org/barking.mp3",
                description: "Dog-like barks",
            },
        ];

        let stats = populate_calls(&pool, &calls).await.unwrap();
        assert_eq!(stats.added, 2);
        assert_eq!(stats.low_confidence, 1);

        let bullfrog_calls = db::calls_for_species(&pool, bullfrog).await.unwrap();
        assert_eq!(bullfrog_calls.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_urls_are_skipped() {
        let (_dir, pool) = setup().await;

        db::insert_species(&pool, &species("Wood Frog", "Lithobates sylvaticus"))
            .await
            .unwrap();

        let call = SeedCall {
            species_name: "Wood Frog",
            scientific_name: "Lithobates sylvaticus",
            audio_url: "https://example.org/wood.mp3",
            description: "Quacking",
        };

        let stats = populate_calls(&pool, &[call]).await.unwrap();
        assert_eq!(stats.added, 1);

        let stats = populate_calls(&pool, &[call]).await.unwrap();
        assert_eq!(stats.added, 0);
        assert_eq!(stats.duplicates, 1);
        assert_eq!(db::count_calls(&pool).await.unwrap(), 1);
    }
}

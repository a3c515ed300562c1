//! Mock species identification
//!
//! This is a demonstration feature: it does not inspect the submitted image
//! at all. It samples up to three species from the dataset and dresses them
//! up with confidence scores that sum to 100, which is enough to exercise a
//! realistic ranked-result UI.

use crate::confidence::allocate_scores;
use crate::db::SpeciesRow;
use rand::seq::index::sample;
use rand::Rng;
use serde::Serialize;

/// Number of ranked results to return when the dataset is large enough
pub const RESULT_COUNT: usize = 3;

/// One ranked identification result
#[derive(Debug, Clone, Serialize)]
pub struct Identification {
    #[serde(flatten)]
    pub species: SpeciesRow,
    pub confidence: f64,
}

/// Produce a ranked mock identification from the species dataset.
///
/// Samples `min(3, len)` distinct species uniformly and pairs them with a
/// descending confidence set. Empty dataset produces an empty result; the
/// caller decides how to present that.
pub fn identify<R: Rng + ?Sized>(species: &[SpeciesRow], rng: &mut R) -> Vec<Identification> {
    let count = species.len().min(RESULT_COUNT);
    if count == 0 {
        return Vec::new();
    }

    let picks = sample(rng, species.len(), count);
    let scores = allocate_scores(count, rng);

    picks
        .into_iter()
        .zip(scores)
        .map(|(idx, confidence)| Identification {
            species: species[idx].clone(),
            confidence,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dataset(n: usize) -> Vec<SpeciesRow> {
        (1..=n as i64)
            .map(|id| SpeciesRow {
                species_id: id,
                name: format!("Frog {id}"),
                scientific_name: format!("Rana exempli{id}"),
                habitat: None,
                region: None,
                conservation_status: None,
                size_cm: None,
                lifespan_years: None,
                diet: None,
                color: None,
                image_url: None,
                description: None,
            })
            .collect()
    }

    #[test]
    fn test_empty_dataset() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(identify(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_small_dataset_uses_all_species() {
        let mut rng = StdRng::seed_from_u64(1);
        let results = identify(&dataset(2), &mut rng);
        assert_eq!(results.len(), 2);

        let mut ids: Vec<i64> = results.iter().map(|r| r.species.species_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_three_distinct_results_sum_to_100() {
        let mut rng = StdRng::seed_from_u64(42);
        let results = identify(&dataset(10), &mut rng);
        assert_eq!(results.len(), RESULT_COUNT);

        let mut ids: Vec<i64> = results.iter().map(|r| r.species.species_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), RESULT_COUNT, "sampled species must be distinct");

        let sum: f64 = results.iter().map(|r| r.confidence).sum();
        assert!((sum - 100.0).abs() < 1e-6);

        for pair in results.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }
}

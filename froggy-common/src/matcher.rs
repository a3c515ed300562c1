//! Species matching
//!
//! Resolves noisy free-text species metadata (as found in call recording
//! sources) to a canonical species id. Matching never errors: it degrades
//! through progressively looser tiers and only comes back empty when the
//! reference set itself is empty. The winning tier is surfaced so callers
//! can treat loose matches as low-confidence.

/// One row of the canonical species reference set.
///
/// The reference set is an explicitly ordered slice; iteration order is the
/// tie-break for the loose tiers, so callers must supply a stable order
/// (insertion order from the database).
#[derive(Debug, Clone)]
pub struct SpeciesRef {
    pub id: i64,
    pub name: String,
    pub scientific_name: String,
}

/// Noisy external species metadata to be resolved
#[derive(Debug, Clone)]
pub struct CallCandidate {
    pub name: String,
    pub scientific_name: Option<String>,
}

/// Which matching tier produced the result, from strongest to weakest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Case-insensitive equality on common name
    ExactName,
    /// Case-insensitive equality on scientific name
    ExactScientific,
    /// Scientific name shares a genus prefix
    Genus,
    /// Common name substring containment (either direction)
    Substring,
    /// No textual match; fell back to a tree frog or the first record
    Fallback,
}

impl MatchTier {
    /// Tiers below exact equality should be audited by callers
    pub fn is_low_confidence(self) -> bool {
        !matches!(self, MatchTier::ExactName | MatchTier::ExactScientific)
    }
}

/// A resolved species id plus the tier that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesMatch {
    pub species_id: i64,
    pub tier: MatchTier,
}

/// Resolve a candidate against the reference set.
///
/// Tier order (first hit wins):
/// 1. exact common-name equality
/// 2. exact scientific-name equality
/// 3. genus prefix of the candidate's scientific name
/// 4. common-name substring containment, either direction
/// 5. first record named "Tree Frog" (the dataset's most common family),
///    else the first record outright
///
/// Returns `None` only when `reference` is empty.
pub fn match_species(candidate: &CallCandidate, reference: &[SpeciesRef]) -> Option<SpeciesMatch> {
    if reference.is_empty() {
        return None;
    }

    let name = candidate.name.to_lowercase();
    let scientific = candidate.scientific_name.as_deref().map(str::to_lowercase);

    // Tier 1: exact common name
    if let Some(species) = reference.iter().find(|s| s.name.to_lowercase() == name) {
        return Some(SpeciesMatch {
            species_id: species.id,
            tier: MatchTier::ExactName,
        });
    }

    // Tier 2: exact scientific name
    if let Some(scientific) = &scientific {
        if let Some(species) = reference
            .iter()
            .find(|s| s.scientific_name.to_lowercase() == *scientific)
        {
            return Some(SpeciesMatch {
                species_id: species.id,
                tier: MatchTier::ExactScientific,
            });
        }
    }

    // Tier 3: genus prefix (first whitespace-delimited token)
    if let Some(genus) = scientific
        .as_deref()
        .and_then(|s| s.split_whitespace().next())
    {
        if let Some(species) = reference
            .iter()
            .find(|s| s.scientific_name.to_lowercase().starts_with(genus))
        {
            return Some(SpeciesMatch {
                species_id: species.id,
                tier: MatchTier::Genus,
            });
        }
    }

    // Tier 4: common-name substring containment, either direction
    if let Some(species) = reference.iter().find(|s| {
        let reference_name = s.name.to_lowercase();
        reference_name.contains(&name) || name.contains(&reference_name)
    }) {
        return Some(SpeciesMatch {
            species_id: species.id,
            tier: MatchTier::Substring,
        });
    }

    // Tier 5: a tree frog if the dataset has one, else the first record
    let fallback = reference
        .iter()
        .find(|s| s.name.to_lowercase().contains("tree frog"))
        .unwrap_or(&reference[0]);

    Some(SpeciesMatch {
        species_id: fallback.id,
        tier: MatchTier::Fallback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn species(id: i64, name: &str, scientific_name: &str) -> SpeciesRef {
        SpeciesRef {
            id,
            name: name.to_string(),
            scientific_name: scientific_name.to_string(),
        }
    }

    fn candidate(name: &str, scientific: Option<&str>) -> CallCandidate {
        CallCandidate {
            name: name.to_string(),
            scientific_name: scientific.map(str::to_string),
        }
    }

    fn reference() -> Vec<SpeciesRef> {
        vec![
            species(1, "Red-Eyed Tree Frog", "Agalychnis callidryas"),
            species(2, "American Bullfrog", "Lithobates catesbeianus"),
        ]
    }

    #[test]
    fn test_exact_name_match() {
        let m = match_species(&candidate("American Bullfrog", None), &reference()).unwrap();
        assert_eq!(m.species_id, 2);
        assert_eq!(m.tier, MatchTier::ExactName);
    }

    #[test]
    fn test_exact_name_is_case_insensitive() {
        let m = match_species(&candidate("american BULLFROG", None), &reference()).unwrap();
        assert_eq!(m.species_id, 2);
        assert_eq!(m.tier, MatchTier::ExactName);
    }

    #[test]
    fn test_exact_scientific_match() {
        let m = match_species(
            &candidate("bullfrog, american", Some("Lithobates catesbeianus")),
            &reference(),
        )
        .unwrap();
        assert_eq!(m.species_id, 2);
        assert_eq!(m.tier, MatchTier::ExactScientific);
    }

    #[test]
    fn test_genus_match() {
        let m = match_species(
            &candidate("Unknown Frog", Some("Agalychnis moreletii")),
            &reference(),
        )
        .unwrap();
        assert_eq!(m.species_id, 1);
        assert_eq!(m.tier, MatchTier::Genus);
    }

    #[test]
    fn test_substring_match() {
        let m = match_species(&candidate("Red-Eyed", None), &reference()).unwrap();
        assert_eq!(m.species_id, 1);
        assert_eq!(m.tier, MatchTier::Substring);
    }

    #[test]
    fn test_tree_frog_fallback() {
        let m = match_species(&candidate("Totally Unrelated Animal", None), &reference()).unwrap();
        assert_eq!(m.species_id, 1);
        assert_eq!(m.tier, MatchTier::Fallback);
    }

    #[test]
    fn test_first_record_fallback_without_tree_frog() {
        // No "Tree Frog" name present, so the first record wins
        let reference = vec![
            species(2, "American Bullfrog", "Lithobates catesbeianus"),
            species(3, "Spring Peeper", "Pseudacris crucifer"),
        ];
        let m = match_species(&candidate("Totally Unrelated Animal", None), &reference).unwrap();
        assert_eq!(m.species_id, 2);
        assert_eq!(m.tier, MatchTier::Fallback);
    }

    #[test]
    fn test_empty_reference_set() {
        assert!(match_species(&candidate("Wood Frog", None), &[]).is_none());
    }

    #[test]
    fn test_tier_confidence_split() {
        assert!(!MatchTier::ExactName.is_low_confidence());
        assert!(!MatchTier::ExactScientific.is_low_confidence());
        assert!(MatchTier::Genus.is_low_confidence());
        assert!(MatchTier::Substring.is_low_confidence());
        assert!(MatchTier::Fallback.is_low_confidence());
    }
}

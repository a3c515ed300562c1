//! Fun frog facts

use axum::Json;
use rand::seq::SliceRandom;
use serde::Serialize;

const FROG_FACTS: &[&str] = &[
    "Some frogs can jump over 20 times their body length in a single leap!",
    "The goliath frog is the largest frog species, measuring up to 32 cm in length and weighing up to 3.3 kg.",
    "The smallest frog is Paedophryne amauensis, which is only about 7.7 mm long!",
    "A group of frogs is called an 'army'.",
    "Frogs don't drink water - they absorb it through their skin.",
    "Some frogs can freeze during winter and thaw in spring without harmful effects.",
    "Frogs have been on Earth for more than 200 million years, outliving dinosaurs.",
    "There are over 7,000 species of frogs worldwide.",
    "The glass frog has transparent skin, allowing you to see its internal organs.",
    "Some poison dart frogs have enough toxin to kill 10 adult humans!",
    "Frogs typically lay eggs in water, but some species carry eggs on their backs or even in their stomachs!",
    "Some frogs can change color depending on temperature, light, and moisture.",
    "Frogs completely close their eyes when they swallow food.",
    "The Titicaca water frog never develops lungs and breathes entirely through its skin.",
    "The wood frog can survive being frozen solid during winter and thaws back to life in spring.",
    "The Vietnamese mossy frog looks exactly like moss as a form of camouflage.",
    "Darwin's frog keeps its tadpoles in its vocal sac until they develop into froglets.",
    "The hairy frog breaks its own toe bones to create claws when threatened!",
];

const SOUND_FACTS: &[&str] = &[
    "Some frogs can make calls underwater by pushing air back and forth between their lungs and mouth.",
    "The Coqui frog from Puerto Rico has a call so loud (90-100 decibels) it can be heard from far away.",
    "Each frog species has a unique call, which helps females identify males of their own species.",
    "Some female frogs also make sounds, although usually quieter than males.",
    "Frogs don't use vocal cords to make sounds - they use vocal sacs which amplify sounds like a balloon.",
    "The Pacific Tree Frog's 'ribbit' sound is what you typically hear in movies, even for scenes set where this frog doesn't live!",
    "The largest frog, the Goliath Frog, ironically makes very little sound compared to smaller species.",
    "Scientists can use frog call recordings to monitor population health and biodiversity in an area.",
    "Some frogs change their calling patterns based on their environment.",
    "Frog choruses often follow patterns where individuals take turns or synchronize their calls.",
];

/// Number of sound facts returned per request
const SOUND_FACT_COUNT: usize = 3;

#[derive(Debug, Serialize)]
pub struct FactResponse {
    pub fact: String,
}

#[derive(Debug, Serialize)]
pub struct FactsResponse {
    pub facts: Vec<String>,
}

/// GET /api/facts/random
pub async fn random_fact() -> Json<FactResponse> {
    let fact = FROG_FACTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default();

    Json(FactResponse {
        fact: fact.to_string(),
    })
}

/// GET /api/facts/sounds
///
/// Three distinct facts about frog calls.
pub async fn sound_facts() -> Json<FactsResponse> {
    let facts = SOUND_FACTS
        .choose_multiple(&mut rand::thread_rng(), SOUND_FACT_COUNT)
        .map(|f| f.to_string())
        .collect();

    Json(FactsResponse { facts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_random_fact_is_from_the_list() {
        let Json(response) = random_fact().await;
        assert!(FROG_FACTS.contains(&response.fact.as_str()));
    }

    #[tokio::test]
    async fn test_sound_facts_are_distinct() {
        let Json(response) = sound_facts().await;
        assert_eq!(response.facts.len(), SOUND_FACT_COUNT);

        let mut unique = response.facts.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), SOUND_FACT_COUNT);
    }
}

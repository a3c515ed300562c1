//! Frog call quiz endpoint
//!
//! Builds a "which frog makes this sound?" question from a random call
//! recording: one audio clip, up to four shuffled species choices, and the
//! answer plus the call description as the explanation. Grading and score
//! keeping happen client-side.

use axum::extract::State;
use axum::Json;
use froggy_common::db;
use rand::seq::SliceRandom;
use serde::Serialize;

use super::ApiError;
use crate::AppState;

/// Answer choices per question when the dataset is large enough
const CHOICE_COUNT: usize = 4;

/// One answer choice
#[derive(Debug, Serialize)]
pub struct QuizChoice {
    pub species_id: i64,
    pub name: String,
}

/// A single quiz question over one call recording
#[derive(Debug, Serialize)]
pub struct QuizQuestion {
    pub call_id: i64,
    pub audio_url: String,
    pub local_file: bool,
    pub choices: Vec<QuizChoice>,
    pub correct_species_id: i64,
    /// Shown after answering; the call description doubles as the
    /// explanation ("deep 'jug-o-rum' calls...")
    pub explanation: Option<String>,
}

/// GET /api/quiz
pub async fn quiz_question(
    State(state): State<AppState>,
) -> Result<Json<QuizQuestion>, ApiError> {
    let calls = db::list_calls(&state.db).await?;
    let species = db::list_species(&state.db).await?;

    let mut rng = rand::thread_rng();
    let Some(call) = calls.choose(&mut rng) else {
        return Err(ApiError::NotFound(
            "No call recordings loaded - run `froggy-import calls` first".to_string(),
        ));
    };

    let mut choices = vec![QuizChoice {
        species_id: call.species_id,
        name: call.species_name.clone(),
    }];

    let distractors: Vec<&db::SpeciesRow> = species
        .iter()
        .filter(|s| s.species_id != call.species_id)
        .collect();
    choices.extend(
        distractors
            .choose_multiple(&mut rng, CHOICE_COUNT - 1)
            .map(|s| QuizChoice {
                species_id: s.species_id,
                name: s.name.clone(),
            }),
    );
    choices.shuffle(&mut rng);

    Ok(Json(QuizQuestion {
        call_id: call.call_id,
        audio_url: call.audio_url.clone(),
        local_file: call.local_file,
        choices,
        correct_species_id: call.species_id,
        explanation: call.description.clone(),
    }))
}

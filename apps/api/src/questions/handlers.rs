//! Axum route handlers for the Questions API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::i18n::Language;
use crate::models::profile::{present, Profile};
use crate::questions::generator::{fallback_set, resolve_questions, QuestionSet};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateQuestionsRequest {
    #[serde(alias = "userInfo")]
    pub profile: Option<Profile>,
    pub language: Language,
}

/// GET /api/v1/questions
///
/// Returns the fixed question bank.
pub async fn handle_get_questions(Query(query): Query<LanguageQuery>) -> Json<QuestionSet> {
    Json(fallback_set(query.language))
}

/// POST /api/v1/questions/generate
///
/// Returns a personalized question set, or the bank when generation is
/// unavailable. Never fails on generator errors.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Json<QuestionSet> {
    let profile = request.profile.unwrap_or_default();
    info!(
        "Generating questions (named: {}, age: {}, occupation: {}, language: {})",
        present(&profile.name).is_some(),
        Profile::display(&profile.age),
        Profile::display(&profile.occupation),
        request.language.code()
    );

    let set = resolve_questions(
        state.question_generator.as_deref(),
        &profile,
        request.language,
    )
    .await;

    info!("Question set ready: {}", set.context);
    Json(set)
}

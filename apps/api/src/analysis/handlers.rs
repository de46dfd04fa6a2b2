//! Axum route handlers for narrative analysis.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::narrative::{narrate, NarrativeRequest};
use crate::analysis::report::{AssessmentReport, NarrativeAnalysis};
use crate::assessment::validation::validate_submission;
use crate::errors::AppError;
use crate::i18n::Language;
use crate::models::profile::Profile;
use crate::models::question::Question;
use crate::questions::bank::question_bank;
use crate::scoring::calculate;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeRequest {
    #[serde(alias = "userInfo")]
    pub profile: Option<Profile>,
    pub questions: Option<Vec<Question>>,
    pub answers: Option<Vec<Option<i64>>>,
    pub language: Language,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub ai_powered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<NarrativeAnalysis>,
    pub result: AssessmentReport,
}

/// POST /api/v1/assessments/analyze
///
/// Scores the answers and asks the narrative generator to enrich the result.
/// Generator failures fall back to the deterministic report; only invalid
/// input is an error.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let answers = validate_submission(request.answers.as_deref(), request.questions.as_deref())?;
    let profile = request.profile.unwrap_or_default();
    let baseline = calculate(&answers, Some(&profile));

    // Without the client's questions, the bank labels the answers when it lines up.
    let bank = question_bank(request.language);
    let questions: &[Question] = match request.questions.as_deref() {
        Some(questions) => questions,
        None if bank.len() == answers.len() => bank,
        None => &[],
    };

    let outcome = narrate(
        state.narrative_generator.as_deref(),
        NarrativeRequest {
            profile: &profile,
            questions,
            answers: &answers,
            baseline: &baseline,
            language: request.language,
        },
    )
    .await;

    let ai_powered = outcome.is_generated();
    let (analysis, result) = outcome.into_parts();
    Ok(Json(AnalyzeResponse {
        ai_powered,
        analysis,
        result,
    }))
}

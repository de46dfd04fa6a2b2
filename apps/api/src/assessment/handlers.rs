//! Axum route handlers for the Assessments API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::report::{AssessmentReport, NarrativeAnalysis};
use crate::assessment::stats::{load_stats, AssessmentStats};
use crate::assessment::store::NewAssessment;
use crate::assessment::validation::validate_submission;
use crate::errors::AppError;
use crate::i18n::Language;
use crate::models::assessment::SavedAssessmentRow;
use crate::models::profile::Profile;
use crate::models::question::Question;
use crate::scoring::calculate;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitAssessmentRequest {
    pub answers: Option<Vec<Option<i64>>>,
    #[serde(alias = "userInfo")]
    pub profile: Option<Profile>,
    pub questions: Option<Vec<Question>>,
    pub language: Language,
    /// Narrative the client already obtained from the analyze endpoint.
    #[serde(alias = "aiAnalysis")]
    pub analysis: Option<NarrativeAnalysis>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentResponse {
    pub result: AssessmentReport,
    pub record: Option<SavedAssessmentRow>,
}

/// POST /api/v1/assessments
///
/// Validates and scores a completed answer set, then persists it when a store
/// is configured. A failed save is logged and reported as `record: null`.
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    Json(request): Json<SubmitAssessmentRequest>,
) -> Result<Json<SubmitAssessmentResponse>, AppError> {
    let answers = validate_submission(request.answers.as_deref(), request.questions.as_deref())?;
    let profile = request.profile.unwrap_or_default();

    let result = calculate(&answers, Some(&profile));
    info!(
        "Assessment scored: {} answers, score {}, level {}",
        answers.len(),
        result.score,
        result.level.as_str()
    );

    let baseline = AssessmentReport::baseline(result);
    let report = match request.analysis {
        Some(analysis) if !analysis.is_empty() => baseline.overlay(analysis),
        _ => baseline,
    };

    let record = match state.store.as_deref() {
        Some(store) => {
            let new = NewAssessment {
                profile,
                answers,
                report: report.clone(),
                language: request.language,
            };
            match store.save(&new).await {
                Ok(row) => Some(row),
                Err(e) => {
                    warn!("Failed to save assessment, continuing without record: {e}");
                    None
                }
            }
        }
        None => None,
    };

    Ok(Json(SubmitAssessmentResponse {
        result: report,
        record,
    }))
}

/// GET /api/v1/stats
pub async fn handle_get_stats(
    State(state): State<AppState>,
) -> Result<Json<AssessmentStats>, AppError> {
    let stats = load_stats(state.store.as_deref()).await?;
    Ok(Json(stats))
}

//! Narrative Generator: pluggable, trait-based source of model-written feedback.
//!
//! `AppState` holds an `Option<Arc<dyn NarrativeGenerator>>`. The deterministic
//! result is always computed first; the generator can only enrich it.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::analysis::report::{AssessmentReport, NarrativeAnalysis};
use crate::i18n::{translate_with, Language};
use crate::llm_client::prompts::CARE_INSTRUCTION;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::profile::Profile;
use crate::models::question::Question;
use crate::scoring::AssessmentResult;

/// Everything a generator may look at.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeRequest<'a> {
    pub profile: &'a Profile,
    pub questions: &'a [Question],
    pub answers: &'a [u8],
    pub baseline: &'a AssessmentResult,
    pub language: Language,
}

/// What the caller presents: the enriched report, or the deterministic one.
#[derive(Debug, Clone)]
pub enum NarrativeOutcome {
    Generated {
        analysis: NarrativeAnalysis,
        report: AssessmentReport,
    },
    Fallback(AssessmentReport),
}

impl NarrativeOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, NarrativeOutcome::Generated { .. })
    }

    /// The model's raw analysis, if any, and the report to present.
    pub fn into_parts(self) -> (Option<NarrativeAnalysis>, AssessmentReport) {
        match self {
            NarrativeOutcome::Generated { analysis, report } => (Some(analysis), report),
            NarrativeOutcome::Fallback(report) => (None, report),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn analyze(&self, request: &NarrativeRequest<'_>)
        -> Result<NarrativeAnalysis, LlmError>;
}

pub struct LlmNarrativeGenerator(pub LlmClient);

#[async_trait]
impl NarrativeGenerator for LlmNarrativeGenerator {
    async fn analyze(
        &self,
        request: &NarrativeRequest<'_>,
    ) -> Result<NarrativeAnalysis, LlmError> {
        let prompt = build_prompt(request);
        self.0.call_json(&prompt, ANALYSIS_SYSTEM).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestration
// ────────────────────────────────────────────────────────────────────────────

/// Runs the generator if one is configured and overlays its output on the baseline.
pub async fn narrate(
    generator: Option<&dyn NarrativeGenerator>,
    request: NarrativeRequest<'_>,
) -> NarrativeOutcome {
    let baseline = AssessmentReport::baseline(request.baseline.clone());

    let Some(generator) = generator else {
        info!("Narrative generator not configured, using deterministic result");
        return NarrativeOutcome::Fallback(baseline);
    };

    match generator.analyze(&request).await {
        Ok(analysis) if analysis.is_empty() => {
            warn!("Narrative generator returned no usable content");
            NarrativeOutcome::Fallback(baseline)
        }
        Ok(analysis) => {
            info!(
                "Narrative analysis completed (level {}, {})",
                request.baseline.level.as_str(),
                request.language.code()
            );
            let report = baseline.overlay(analysis.clone());
            NarrativeOutcome::Generated { analysis, report }
        }
        Err(e) => {
            warn!("Narrative analysis failed: {e}");
            NarrativeOutcome::Fallback(baseline)
        }
    }
}

fn build_prompt(request: &NarrativeRequest<'_>) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{care_instruction}", CARE_INSTRUCTION)
        .replace("{profile}", &render_profile(request.profile))
        .replace("{score}", &request.baseline.score.to_string())
        .replace("{level}", request.baseline.level.as_str())
        .replace(
            "{answers}",
            &render_answers(request.questions, request.answers, request.language),
        )
        .replace("{language}", request.language.english_name())
}

fn render_profile(profile: &Profile) -> String {
    [
        ("Name", &profile.name),
        ("Age", &profile.age),
        ("Gender", &profile.gender),
        ("Occupation", &profile.occupation),
        ("Location", &profile.location),
        ("Previous therapy", &profile.previous_therapy),
        ("Current medication", &profile.current_medication),
        ("Support system", &profile.support_system),
        ("Stress level", &profile.stress_level),
    ]
    .iter()
    .map(|(label, value)| format!("- {label}: {}", Profile::display(value)))
    .collect::<Vec<_>>()
    .join("\n")
}

/// One numbered line per answer. Question text is used only when the
/// question list lines up with the answers; otherwise the progress label stands in.
fn render_answers(questions: &[Question], answers: &[u8], language: Language) -> String {
    let aligned = questions.len() == answers.len();
    let total = answers.len().to_string();
    answers
        .iter()
        .enumerate()
        .map(|(i, &value)| match questions.get(i).filter(|_| aligned) {
            Some(q) => format!(
                "{}. {}\n   Answer: {} ({}/{})",
                i + 1,
                q.text,
                q.option_text(value).unwrap_or("unknown option"),
                value,
                q.max_value()
            ),
            None => {
                let current = (i + 1).to_string();
                let label = translate_with(
                    language,
                    "questions.progressLabel",
                    &[("current", current.as_str()), ("total", total.as_str())],
                );
                format!("{}. {label}\n   Answer value: {value}", i + 1)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

//! Question Generator: pluggable source of personalized questions.
//!
//! `AppState` holds an `Option<Arc<dyn QuestionGenerator>>`. When it is absent,
//! errors, or returns an unusable set, callers receive the fixed bank instead.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::i18n::Language;
use crate::llm_client::prompts::CARE_INSTRUCTION;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::profile::Profile;
use crate::models::question::Question;
use crate::questions::bank::{question_bank, DEFAULT_CONTEXT};
use crate::questions::prompts::{QUESTION_PROMPT_TEMPLATE, QUESTION_SYSTEM};

/// Number of questions requested from the model.
pub const GENERATED_QUESTION_COUNT: usize = 15;
/// Upper bound on what we accept back.
const MAX_GENERATED_QUESTIONS: usize = 30;
/// Option values must stay within the 0–4 answer range.
const MIN_OPTIONS: usize = 2;
const MAX_OPTIONS: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSource {
    Generated,
    Fallback,
}

/// The question set handed to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSet {
    pub questions: Vec<Question>,
    pub context: String,
    pub source: QuestionSource,
    pub language: Language,
}

/// Raw model output, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedQuestions {
    #[serde(default)]
    pub context: String,
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedQuestion {
    pub text: String,
    pub options: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(
        &self,
        profile: &Profile,
        language: Language,
    ) -> Result<GeneratedQuestions, LlmError>;
}

pub struct LlmQuestionGenerator(pub LlmClient);

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn generate(
        &self,
        profile: &Profile,
        language: Language,
    ) -> Result<GeneratedQuestions, LlmError> {
        let prompt = build_prompt(profile, language);
        self.0.call_json(&prompt, QUESTION_SYSTEM).await
    }
}

fn build_prompt(profile: &Profile, language: Language) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{care_instruction}", CARE_INSTRUCTION)
        .replace("{name}", Profile::display(&profile.name))
        .replace("{age}", Profile::display(&profile.age))
        .replace("{gender}", Profile::display(&profile.gender))
        .replace("{occupation}", Profile::display(&profile.occupation))
        .replace("{location}", Profile::display(&profile.location))
        .replace("{question_count}", &GENERATED_QUESTION_COUNT.to_string())
        .replace("{language}", language.english_name())
}

// ────────────────────────────────────────────────────────────────────────────
// Resolution with fallback
// ────────────────────────────────────────────────────────────────────────────

/// The fixed bank in the requested language, labelled as a fallback.
pub fn fallback_set(language: Language) -> QuestionSet {
    QuestionSet {
        questions: question_bank(language).to_vec(),
        context: DEFAULT_CONTEXT.to_string(),
        source: QuestionSource::Fallback,
        language,
    }
}

/// Produces a question set, preferring the generator and falling back to the bank.
pub async fn resolve_questions(
    generator: Option<&dyn QuestionGenerator>,
    profile: &Profile,
    language: Language,
) -> QuestionSet {
    let Some(generator) = generator else {
        info!("Question generator not configured, using default questions");
        return fallback_set(language);
    };

    match generator.generate(profile, language).await {
        Ok(raw) => match into_question_set(raw, language) {
            Ok(set) => {
                info!(
                    "Generated {} personalized questions ({})",
                    set.questions.len(),
                    language.code()
                );
                set
            }
            Err(reason) => {
                warn!("Discarding generated questions: {reason}");
                fallback_set(language)
            }
        },
        Err(e) => {
            warn!("Failed to generate personalized questions: {e}");
            fallback_set(language)
        }
    }
}

/// Validates model output and numbers the questions from 1.
fn into_question_set(raw: GeneratedQuestions, language: Language) -> Result<QuestionSet, String> {
    if raw.questions.is_empty() {
        return Err("no questions returned".to_string());
    }
    if raw.questions.len() > MAX_GENERATED_QUESTIONS {
        return Err(format!("{} questions returned", raw.questions.len()));
    }

    let mut questions = Vec::with_capacity(raw.questions.len());
    for (i, q) in raw.questions.into_iter().enumerate() {
        let text = q.text.trim().to_string();
        if text.is_empty() {
            return Err(format!("question {} has no text", i + 1));
        }
        let labels: Vec<String> = q
            .options
            .into_iter()
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&labels.len()) {
            return Err(format!(
                "question {} has {} options",
                i + 1,
                labels.len()
            ));
        }
        questions.push(Question::from_labels(i as u32 + 1, text, labels));
    }

    Ok(QuestionSet {
        questions,
        context: raw.context.trim().to_string(),
        source: QuestionSource::Generated,
        language,
    })
}

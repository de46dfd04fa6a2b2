//! Deterministic assessment scoring.
//!
//! Algorithm:
//! 1. score = round_half_up(Σ answers / (n × MAX_ANSWER_VALUE) × 100), clamped to 0–100
//! 2. band = first band whose inclusive upper bound ≥ score
//! 3. narrative lists start from the band's canned content, then each profile rule
//!    may add entries (see `personalization`). The score and level are fixed before
//!    any rule runs.

use serde::{Deserialize, Serialize};

use crate::models::profile::Profile;
use crate::scoring::bands::{band_for, SeverityLevel};
use crate::scoring::personalization::personalize;

/// Per-question maximum used as the normalization divisor.
///
/// Applied to every question, including the ones whose options only reach 3, so a
/// respondent who picks the top option everywhere on the bank scores below 100.
pub const MAX_ANSWER_VALUE: u8 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub score: u32, // 0 – 100
    pub level: SeverityLevel,
    pub description: String,
    pub recommendations: Vec<String>,
    pub personalized_insights: Vec<String>,
    pub risk_factors: Vec<String>,
    pub strengths: Vec<String>,
}

/// Scores a fully answered assessment.
///
/// Total over any slice; values above `MAX_ANSWER_VALUE` are a caller contract
/// violation and only affect the result through the final clamp.
pub fn calculate(answers: &[u8], profile: Option<&Profile>) -> AssessmentResult {
    let score = normalized_score(answers);
    let band = band_for(score);

    let mut result = AssessmentResult {
        score,
        level: band.level,
        description: band.description.to_string(),
        recommendations: to_owned_list(band.recommendations),
        personalized_insights: Vec::new(),
        risk_factors: Vec::new(),
        strengths: to_owned_list(band.strengths),
    };

    if let Some(profile) = profile {
        personalize(&mut result, profile);
    }

    result
}

/// Normalizes raw answers to a 0–100 integer, rounding halves up.
pub fn normalized_score(answers: &[u8]) -> u32 {
    if answers.is_empty() {
        return 0;
    }
    let total: u64 = answers.iter().map(|&a| u64::from(a)).sum();
    let max_total = answers.len() as u64 * u64::from(MAX_ANSWER_VALUE);
    let rounded = (total * 200 + max_total) / (max_total * 2);
    rounded.min(100) as u32
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

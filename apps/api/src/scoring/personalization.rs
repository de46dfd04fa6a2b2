//! Profile-conditioned narrative rules.
//!
//! Each rule looks at one profile field and may add entries to the narrative
//! lists. Rules are independent: any number can fire, and a rule that does not
//! match contributes nothing. No rule touches `score`, `level` or `description`.

use crate::models::profile::{
    AgeBracket, MedicationStatus, Profile, StressLevel, SupportSystem, TherapyHistory,
};
use crate::scoring::calculator::AssessmentResult;

type Rule = fn(&Profile, &mut AssessmentResult);

/// Evaluated in order. Order only matters for list positions.
const RULES: &[Rule] = &[
    age_rule,
    support_system_rule,
    stress_level_rule,
    therapy_rule,
    medication_rule,
    occupation_rule,
];

pub fn personalize(result: &mut AssessmentResult, profile: &Profile) {
    for rule in RULES {
        rule(profile, result);
    }
}

fn age_rule(profile: &Profile, result: &mut AssessmentResult) {
    match profile.age_bracket() {
        Some(AgeBracket::Age18To24) => {
            push(
                &mut result.personalized_insights,
                "Young adults often experience transition-related stress",
            );
            if result.score > 50 {
                push(
                    &mut result.recommendations,
                    "Consider campus counseling services if you're a student",
                );
            }
        }
        Some(AgeBracket::Age25To34) => push(
            &mut result.personalized_insights,
            "Career and relationship pressures are common in this age group",
        ),
        Some(AgeBracket::Age55Plus) => push(
            &mut result.personalized_insights,
            "Life transitions and health concerns may impact emotional wellbeing",
        ),
        Some(AgeBracket::Age35To44 | AgeBracket::Age45To54) | None => {}
    }
}

fn support_system_rule(profile: &Profile, result: &mut AssessmentResult) {
    match profile.support_system() {
        Some(SupportSystem::Strong) => {
            push(&mut result.strengths, "Strong support network");
            push(
                &mut result.personalized_insights,
                "Your strong support system is a valuable asset for recovery",
            );
        }
        Some(SupportSystem::Limited | SupportSystem::Missing) => {
            push(&mut result.risk_factors, "Limited social support");
            push(
                &mut result.recommendations,
                "Consider joining support groups or community activities",
            );
        }
        Some(SupportSystem::Moderate) | None => {}
    }
}

fn stress_level_rule(profile: &Profile, result: &mut AssessmentResult) {
    match profile.stress_level() {
        Some(StressLevel::Overwhelming) => {
            push(&mut result.risk_factors, "High baseline stress levels");
            // Urgent items go first.
            result
                .recommendations
                .insert(0, "Address overwhelming stress as a priority".to_string());
        }
        Some(StressLevel::Low) => push(&mut result.strengths, "Good stress management"),
        Some(StressLevel::Moderate | StressLevel::High) | None => {}
    }
}

fn therapy_rule(profile: &Profile, result: &mut AssessmentResult) {
    match profile.therapy_history() {
        Some(TherapyHistory::Current) => {
            push(&mut result.strengths, "Already engaged in mental health care");
            push(
                &mut result.personalized_insights,
                "Continue working with your current therapist",
            );
        }
        Some(TherapyHistory::Past) => push(
            &mut result.personalized_insights,
            "Your previous therapy experience may be helpful",
        ),
        Some(TherapyHistory::Never) | None => {}
    }
}

fn medication_rule(profile: &Profile, result: &mut AssessmentResult) {
    if profile.medication_status() == Some(MedicationStatus::Taking) {
        push(
            &mut result.personalized_insights,
            "Continue following your medication regimen as prescribed",
        );
    }
}

fn occupation_rule(profile: &Profile, result: &mut AssessmentResult) {
    let Some(occupation) = profile.occupation_lower() else {
        return;
    };
    if occupation.contains("student") {
        push(
            &mut result.personalized_insights,
            "Academic stress management techniques may be beneficial",
        );
    } else if occupation.contains("healthcare") || occupation.contains("teacher") {
        push(
            &mut result.personalized_insights,
            "Consider job-related stress and burnout prevention",
        );
    }
}

fn push(list: &mut Vec<String>, entry: &str) {
    list.push(entry.to_string());
}

use serde::{Deserialize, Serialize};

/// Severity level derived from the normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityLevel {
    Low,
    Moderate,
    High,
    Severe,
}

impl SeverityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "Low",
            SeverityLevel::Moderate => "Moderate",
            SeverityLevel::High => "High",
            SeverityLevel::Severe => "Severe",
        }
    }
}

/// A fixed score range with its canned narrative.
#[derive(Debug)]
pub struct Band {
    pub level: SeverityLevel,
    /// Inclusive upper bound of the range.
    pub upper: u32,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
    pub strengths: &'static [&'static str],
}

pub const CRISIS_LINE_RECOMMENDATION: &str = "Contact a mental health crisis line if needed";

/// Ascending, contiguous, non-overlapping: [0,25], (25,50], (50,75], (75,100].
pub static BANDS: [Band; 4] = [
    Band {
        level: SeverityLevel::Low,
        upper: 25,
        description: "Your responses suggest minimal emotional distress. You appear to be managing well emotionally.",
        recommendations: &[
            "Continue maintaining healthy habits",
            "Practice regular self-care",
            "Stay connected with supportive relationships",
        ],
        strengths: &["Good emotional regulation", "Effective coping strategies"],
    },
    Band {
        level: SeverityLevel::Moderate,
        upper: 50,
        description: "Your responses indicate some areas of emotional concern that may benefit from attention.",
        recommendations: &[
            "Consider speaking with a counselor or therapist",
            "Practice stress management techniques",
            "Engage in regular physical activity",
            "Maintain a consistent sleep schedule",
        ],
        strengths: &[],
    },
    Band {
        level: SeverityLevel::High,
        upper: 75,
        description: "Your responses suggest significant emotional distress that would benefit from professional support.",
        recommendations: &[
            "Strongly consider professional counseling",
            "Reach out to trusted friends or family",
            "Practice mindfulness and relaxation techniques",
            "Consider medication evaluation if appropriate",
        ],
        strengths: &[],
    },
    Band {
        level: SeverityLevel::Severe,
        upper: 100,
        description: "Your responses indicate severe emotional distress. Professional help is strongly recommended.",
        // Order matters: the crisis line stays near the top.
        recommendations: &[
            "Seek immediate professional help",
            CRISIS_LINE_RECOMMENDATION,
            "Don't hesitate to reach out to emergency services if you're in crisis",
            "Connect with a mental health professional as soon as possible",
        ],
        strengths: &[],
    },
];

/// Returns the band containing `score`. Scores above 100 land in the last band.
pub fn band_for(score: u32) -> &'static Band {
    BANDS
        .iter()
        .find(|band| score <= band.upper)
        .unwrap_or(&BANDS[BANDS.len() - 1])
}

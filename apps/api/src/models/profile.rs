//! Self-reported visitor profile.
//!
//! Every field is optional and free-form on the wire. The typed accessors below
//! interpret the enumerated fields leniently: unknown, blank or missing values
//! simply yield `None` so no profile content can ever fail an assessment.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: Option<String>,
    /// Age bracket such as `"25-34"`. A bare number is accepted and kept as text.
    #[serde(deserialize_with = "deserialize_text_or_number")]
    pub age: Option<String>,
    pub gender: Option<String>,
    pub occupation: Option<String>,
    pub location: Option<String>,
    pub previous_therapy: Option<String>,
    pub current_medication: Option<String>,
    pub support_system: Option<String>,
    pub stress_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBracket {
    Age18To24,
    Age25To34,
    Age35To44,
    Age45To54,
    Age55Plus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportSystem {
    Strong,
    Moderate,
    Limited,
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
    Overwhelming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TherapyHistory {
    Never,
    Past,
    Current,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedicationStatus {
    NotTaking,
    Taking,
}

impl AgeBracket {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "18-24" => Some(Self::Age18To24),
            "25-34" => Some(Self::Age25To34),
            "35-44" => Some(Self::Age35To44),
            "45-54" => Some(Self::Age45To54),
            "55+" | "55-64" | "65+" => Some(Self::Age55Plus),
            _ => None,
        }
    }
}

impl SupportSystem {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "strong" => Some(Self::Strong),
            "moderate" => Some(Self::Moderate),
            "limited" => Some(Self::Limited),
            "none" => Some(Self::Missing),
            _ => None,
        }
    }
}

impl StressLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            "overwhelming" => Some(Self::Overwhelming),
            _ => None,
        }
    }
}

impl TherapyHistory {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "never" => Some(Self::Never),
            "past" => Some(Self::Past),
            "current" => Some(Self::Current),
            _ => None,
        }
    }
}

impl MedicationStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "none" => Some(Self::NotTaking),
            "yes" => Some(Self::Taking),
            _ => None,
        }
    }
}

impl Profile {
    pub fn age_bracket(&self) -> Option<AgeBracket> {
        present(&self.age).and_then(AgeBracket::parse)
    }

    pub fn support_system(&self) -> Option<SupportSystem> {
        present(&self.support_system).and_then(SupportSystem::parse)
    }

    pub fn stress_level(&self) -> Option<StressLevel> {
        present(&self.stress_level).and_then(StressLevel::parse)
    }

    pub fn therapy_history(&self) -> Option<TherapyHistory> {
        present(&self.previous_therapy).and_then(TherapyHistory::parse)
    }

    pub fn medication_status(&self) -> Option<MedicationStatus> {
        present(&self.current_medication).and_then(MedicationStatus::parse)
    }

    /// Lowercased occupation, for keyword matching.
    pub fn occupation_lower(&self) -> Option<String> {
        present(&self.occupation).map(str::to_lowercase)
    }

    /// Display value for prompts: the trimmed field or "Not provided".
    pub fn display(field: &Option<String>) -> &str {
        present(field).unwrap_or("Not provided")
    }
}

/// Trimmed field content, `None` when missing or blank.
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn deserialize_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    let raw = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(raw.map(|value| match value {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_to_default() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_camel_case_fields() {
        let profile: Profile = serde_json::from_str(
            r#"{"supportSystem": "none", "stressLevel": "Overwhelming", "previousTherapy": "past"}"#,
        )
        .unwrap();
        assert_eq!(profile.support_system(), Some(SupportSystem::Missing));
        assert_eq!(profile.stress_level(), Some(StressLevel::Overwhelming));
        assert_eq!(profile.therapy_history(), Some(TherapyHistory::Past));
    }

    #[test]
    fn test_numeric_age_kept_as_text() {
        let profile: Profile = serde_json::from_str(r#"{"age": 29}"#).unwrap();
        assert_eq!(profile.age.as_deref(), Some("29"));
        assert_eq!(profile.age_bracket(), None);
    }

    #[test]
    fn test_null_fields_are_none() {
        let profile: Profile =
            serde_json::from_str(r#"{"age": null, "occupation": null}"#).unwrap();
        assert!(profile.age.is_none());
        assert!(profile.occupation_lower().is_none());
    }

    #[test]
    fn test_senior_brackets_collapse() {
        for raw in ["55+", "55-64", "65+", " 65+ "] {
            assert_eq!(AgeBracket::parse(raw), Some(AgeBracket::Age55Plus), "{raw}");
        }
    }

    #[test]
    fn test_blank_and_unknown_values_ignored() {
        let profile = Profile {
            support_system: Some("   ".to_string()),
            stress_level: Some("extreme".to_string()),
            current_medication: Some("prefer-not-to-say".to_string()),
            ..Profile::default()
        };
        assert!(profile.support_system().is_none());
        assert!(profile.stress_level().is_none());
        assert!(profile.medication_status().is_none());
    }

    #[test]
    fn test_display_defaults() {
        assert_eq!(Profile::display(&None), "Not provided");
        assert_eq!(Profile::display(&Some(" Amina ".to_string())), "Amina");
    }
}

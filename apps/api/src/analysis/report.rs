//! The presented assessment report.
//!
//! `AssessmentReport` flattens the calculator's `AssessmentResult` and adds the
//! fields only a narrative generator can fill, so the deterministic result is a
//! structural subset of every report and clients read one shape.

use serde::{Deserialize, Serialize};

use crate::scoring::AssessmentResult;

/// Model-written narrative. Every field is optional; the model may omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NarrativeAnalysis {
    pub description: Option<String>,
    pub personalized_feedback: Option<String>,
    pub recommendations: Option<Vec<String>>,
    #[serde(alias = "personalizedInsights")]
    pub insights: Option<Vec<String>>,
    pub strengths: Option<Vec<String>>,
    pub risk_factors: Option<Vec<String>>,
    pub areas_for_improvement: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    #[serde(flatten)]
    pub result: AssessmentResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalized_feedback: Option<String>,
    #[serde(default)]
    pub areas_for_improvement: Vec<String>,
    #[serde(default)]
    pub ai_powered: bool,
}

impl NarrativeAnalysis {
    /// True when the analysis carries no usable content at all.
    pub fn is_empty(&self) -> bool {
        non_blank(&self.description).is_none()
            && non_blank(&self.personalized_feedback).is_none()
            && [
                &self.recommendations,
                &self.insights,
                &self.strengths,
                &self.risk_factors,
                &self.areas_for_improvement,
            ]
            .into_iter()
            .all(|list| cleaned(list).is_none())
    }
}

impl AssessmentReport {
    pub fn baseline(result: AssessmentResult) -> Self {
        Self {
            result,
            personalized_feedback: None,
            areas_for_improvement: Vec::new(),
            ai_powered: false,
        }
    }

    /// Replaces narrative fields with whatever the analysis supplies.
    ///
    /// Blank strings and empty lists keep the baseline value. `score` and
    /// `level` are never touched.
    pub fn overlay(mut self, analysis: NarrativeAnalysis) -> Self {
        if let Some(description) = non_blank(&analysis.description) {
            self.result.description = description;
        }
        if let Some(feedback) = non_blank(&analysis.personalized_feedback) {
            self.personalized_feedback = Some(feedback);
        }
        if let Some(list) = cleaned(&analysis.recommendations) {
            self.result.recommendations = list;
        }
        if let Some(list) = cleaned(&analysis.insights) {
            self.result.personalized_insights = list;
        }
        if let Some(list) = cleaned(&analysis.strengths) {
            self.result.strengths = list;
        }
        if let Some(list) = cleaned(&analysis.risk_factors) {
            self.result.risk_factors = list;
        }
        if let Some(list) = cleaned(&analysis.areas_for_improvement) {
            self.areas_for_improvement = list;
        }
        self.ai_powered = true;
        self
    }
}

fn non_blank(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn cleaned(list: &Option<Vec<String>>) -> Option<Vec<String>> {
    let items: Vec<String> = list
        .as_ref()?
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    (!items.is_empty()).then_some(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::bands::SeverityLevel;
    use crate::scoring::calculate;

    #[test]
    fn test_baseline_serializes_as_superset_of_result() {
        let result = calculate(&[2; 15], None);
        let result_json = serde_json::to_value(&result).unwrap();
        let report_json = serde_json::to_value(AssessmentReport::baseline(result)).unwrap();

        for (key, value) in result_json.as_object().unwrap() {
            assert_eq!(&report_json[key], value, "field {key}");
        }
        assert_eq!(report_json["aiPowered"], false);
        assert!(report_json.get("personalizedFeedback").is_none());
    }

    #[test]
    fn test_overlay_never_changes_score_or_level() {
        let baseline = AssessmentReport::baseline(calculate(&[4; 15], None));
        let analysis: NarrativeAnalysis = serde_json::from_str(
            r#"{"score": 12, "level": "Low", "description": "You seem okay overall."}"#,
        )
        .unwrap();
        let report = baseline.overlay(analysis);
        assert_eq!(report.result.score, 100);
        assert_eq!(report.result.level, SeverityLevel::Severe);
        assert_eq!(report.result.description, "You seem okay overall.");
        assert!(report.ai_powered);
    }

    #[test]
    fn test_overlay_keeps_baseline_for_blank_fields() {
        let baseline = AssessmentReport::baseline(calculate(&[0; 15], None));
        let expected_recommendations = baseline.result.recommendations.clone();
        let analysis = NarrativeAnalysis {
            recommendations: Some(vec!["  ".to_string()]),
            strengths: Some(vec![]),
            personalized_feedback: Some("You're doing well.".to_string()),
            areas_for_improvement: Some(vec!["Sleep routine".to_string()]),
            ..NarrativeAnalysis::default()
        };
        let report = baseline.overlay(analysis);
        assert_eq!(report.result.recommendations, expected_recommendations);
        assert_eq!(report.result.strengths.len(), 2);
        assert_eq!(
            report.personalized_feedback.as_deref(),
            Some("You're doing well.")
        );
        assert_eq!(report.areas_for_improvement, vec!["Sleep routine"]);
    }

    #[test]
    fn test_insights_accepts_both_names() {
        let a: NarrativeAnalysis =
            serde_json::from_str(r#"{"personalizedInsights": ["a"]}"#).unwrap();
        let b: NarrativeAnalysis = serde_json::from_str(r#"{"insights": ["a"]}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_empty() {
        assert!(NarrativeAnalysis::default().is_empty());
        let blank = NarrativeAnalysis {
            description: Some(" ".to_string()),
            insights: Some(vec!["".to_string()]),
            ..NarrativeAnalysis::default()
        };
        assert!(blank.is_empty());
        let filled = NarrativeAnalysis {
            risk_factors: Some(vec!["Isolation".to_string()]),
            ..NarrativeAnalysis::default()
        };
        assert!(!filled.is_empty());
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Anxiety,
    Depression,
    Trauma,
    Stress,
    Mood,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub value: u8,
}

/// A single Likert-style question. Option values are ordinal, starting at 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<AnswerOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<QuestionCategory>,
}

impl Question {
    /// Builds a question whose option values are the option indices.
    pub fn from_labels(id: u32, text: String, labels: Vec<String>) -> Self {
        let options = labels
            .into_iter()
            .enumerate()
            .map(|(i, text)| AnswerOption {
                text,
                value: i as u8,
            })
            .collect();
        Self {
            id,
            text,
            options,
            category: None,
        }
    }

    pub fn max_value(&self) -> u8 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }

    pub fn accepts(&self, value: u8) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Text of the option chosen for `value`, if any.
    pub fn option_text(&self, value: u8) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_labels_assigns_index_values() {
        let q = Question::from_labels(
            3,
            "How rested do you feel?".to_string(),
            vec!["Very".into(), "Somewhat".into(), "Barely".into(), "Not at all".into()],
        );
        assert_eq!(q.options[0].value, 0);
        assert_eq!(q.max_value(), 3);
        assert!(q.accepts(3));
        assert!(!q.accepts(4));
        assert_eq!(q.option_text(2), Some("Barely"));
    }
}

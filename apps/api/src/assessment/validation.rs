//! Boundary validation for submitted answer sets.
//!
//! Runs before scoring. Anything that reaches `calculate` is a complete answer
//! set with every value inside its question's range.

use crate::errors::AppError;
use crate::models::question::Question;
use crate::scoring::calculator::MAX_ANSWER_VALUE;

pub const MAX_ANSWERS: usize = 100;

/// Checks a submitted answer set and returns it as scorable values.
///
/// When `questions` is supplied, the answer count must match and each value must
/// be one of that question's option values.
pub fn validate_submission(
    answers: Option<&[Option<i64>]>,
    questions: Option<&[Question]>,
) -> Result<Vec<u8>, AppError> {
    let answers = answers
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::Validation("answers are required".to_string()))?;

    if answers.len() > MAX_ANSWERS {
        return Err(AppError::Validation(format!(
            "at most {MAX_ANSWERS} answers are accepted, got {}",
            answers.len()
        )));
    }

    if let Some(questions) = questions {
        if questions.len() != answers.len() {
            return Err(AppError::Validation(format!(
                "expected {} answers, got {}",
                questions.len(),
                answers.len()
            )));
        }
    }

    let mut values = Vec::with_capacity(answers.len());
    for (i, answer) in answers.iter().enumerate() {
        let position = i + 1;
        let raw = answer.ok_or_else(|| {
            AppError::Validation(format!("question {position} has not been answered"))
        })?;
        let value = u8::try_from(raw)
            .ok()
            .filter(|v| *v <= MAX_ANSWER_VALUE)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "answer {position} must be between 0 and {MAX_ANSWER_VALUE}, got {raw}"
                ))
            })?;
        if let Some(question) = questions.and_then(|q| q.get(i)) {
            if !question.accepts(value) {
                return Err(AppError::Validation(format!(
                    "answer {position} is not an option of question {}",
                    question.id
                )));
            }
        }
        values.push(value);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::questions::bank::question_bank;

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_answers_pass() {
        let answers = vec![Some(0), Some(4), Some(2)];
        assert_eq!(validate_submission(Some(&answers), None).unwrap(), vec![0, 4, 2]);
    }

    #[test]
    fn test_missing_or_empty_answers_rejected() {
        assert!(validate_submission(None, None).is_err());
        assert!(validate_submission(Some(&[]), None).is_err());
    }

    #[test]
    fn test_null_position_rejected() {
        let answers = vec![Some(1), None, Some(2)];
        let msg = message(validate_submission(Some(&answers), None).unwrap_err());
        assert!(msg.contains("question 2"));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(validate_submission(Some(&[Some(5)]), None).is_err());
        assert!(validate_submission(Some(&[Some(-1)]), None).is_err());
        assert!(validate_submission(Some(&[Some(i64::MAX)]), None).is_err());
    }

    #[test]
    fn test_too_many_answers_rejected() {
        let answers = vec![Some(1); MAX_ANSWERS + 1];
        assert!(validate_submission(Some(&answers), None).is_err());
    }

    #[test]
    fn test_count_must_match_questions() {
        let answers = vec![Some(1); 14];
        let msg = message(validate_submission(Some(&answers), Some(question_bank(Language::En))).unwrap_err());
        assert!(msg.contains("expected 15 answers, got 14"));
    }

    #[test]
    fn test_value_must_be_an_option_of_its_question() {
        // Item 1 only goes up to 3.
        let mut answers = vec![Some(0); 15];
        answers[0] = Some(4);
        assert!(validate_submission(Some(&answers), Some(question_bank(Language::En))).is_err());

        answers[0] = Some(3);
        answers[14] = Some(4);
        assert!(validate_submission(Some(&answers), Some(question_bank(Language::En))).is_ok());
    }
}

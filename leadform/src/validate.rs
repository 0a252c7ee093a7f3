//! Per-step answer validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::{AnswerValue, Answers, Step, StepKind, TextShape};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+\d{1,2}\s?)?1?-?\.?\s?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}$")
        .expect("phone pattern is valid")
});

/// Why a step's answer was rejected. The `Display` text is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("Please choose one option")]
    ChooseOne,

    #[error("Choose exactly {expected} ({actual} selected)")]
    WrongSelectionCount { expected: usize, actual: usize },
}

/// Check the answer to `step` held in `answers`.
///
/// Information steps always pass. Returns the first applicable error.
pub fn validate(step: &Step, answers: &Answers) -> Result<(), ValidationError> {
    let answer = step.id().and_then(|id| answers.get(id));

    match step.kind() {
        StepKind::Information => Ok(()),
        StepKind::SingleLineText(text) => {
            let value = required_text(answer)?;
            match text.shape {
                TextShape::Free => Ok(()),
                TextShape::Email if is_valid_email(value) => Ok(()),
                TextShape::Email => Err(ValidationError::InvalidEmail),
                TextShape::Phone if is_valid_phone(value) => Ok(()),
                TextShape::Phone => Err(ValidationError::InvalidPhone),
            }
        }
        StepKind::Combobox(_) => required_text(answer).map(|_| ()),
        StepKind::SingleSelect(_) => match selection_count(answer) {
            1 => Ok(()),
            _ => Err(ValidationError::ChooseOne),
        },
        StepKind::MultiSelect(multi) => {
            let actual = selection_count(answer);
            if actual == multi.max_selections {
                Ok(())
            } else {
                Err(ValidationError::WrongSelectionCount {
                    expected: multi.max_selections,
                    actual,
                })
            }
        }
    }
}

fn required_text(answer: Option<&AnswerValue>) -> Result<&str, ValidationError> {
    answer
        .and_then(AnswerValue::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(ValidationError::Required)
}

fn selection_count(answer: Option<&AnswerValue>) -> usize {
    match answer {
        None => 0,
        Some(AnswerValue::Text(value)) if value.is_empty() => 0,
        Some(AnswerValue::Text(_)) => 1,
        Some(AnswerValue::List(values)) => values.len(),
    }
}

/// `local@domain.tld`, without whitespace.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

/// Ten significant digits, with an optional country code, a parenthesized
/// area code, and space, dot or dash separators.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE.is_match(value.trim())
}

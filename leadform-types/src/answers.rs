use std::collections::BTreeMap;

use serde::Serialize;

use crate::{AnswerValue, StepId};

/// Error type for answer access operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for step: {0}")]
    Missing(StepId),

    #[error("Type mismatch at step '{id}': expected {expected}, got {actual}")]
    TypeMismatch {
        id: StepId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// The answers collected so far, keyed by step id.
///
/// Serializes as a flat JSON object mapping each answered step id to a string
/// or a list of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Answers {
    values: BTreeMap<StepId, AnswerValue>,
}

impl Answers {
    /// Create a new empty answer set.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Insert an answer for the given step, replacing any previous one.
    pub fn insert(&mut self, id: impl Into<StepId>, value: impl Into<AnswerValue>) {
        self.values.insert(id.into(), value.into());
    }

    /// Get the answer for the given step.
    pub fn get(&self, id: &StepId) -> Option<&AnswerValue> {
        self.values.get(id)
    }

    /// Look up an answer by its raw id, as written inside a placeholder.
    pub fn lookup(&self, id: &str) -> Option<&AnswerValue> {
        self.values.get(&StepId::new(id))
    }

    /// Remove the answer for the given step.
    pub fn remove(&mut self, id: &StepId) -> Option<AnswerValue> {
        self.values.remove(id)
    }

    /// Get the answered step ids.
    pub fn ids(&self) -> impl Iterator<Item = &StepId> {
        self.values.keys()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been answered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get a scalar answer for the given step.
    pub fn get_text(&self, id: &StepId) -> Result<&str, AnswerError> {
        match self.get(id) {
            Some(AnswerValue::Text(s)) => Ok(s),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.clone(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    /// Get a list answer for the given step.
    pub fn get_list(&self, id: &StepId) -> Result<&[String], AnswerError> {
        match self.get(id) {
            Some(AnswerValue::List(items)) => Ok(items),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.clone(),
                expected: "List",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }
}

use std::collections::HashSet;

use crate::{CatalogError, Step, StepId, StepKind, placeholders};

/// The ordered, immutable list of steps making up a questionnaire.
///
/// Construction checks that ids are unique and that every `[placeholder]`
/// and choice condition only looks backwards, so substitution can never see
/// a step the user has not reached yet.
#[derive(Debug, Clone)]
pub struct StepCatalog {
    /// All steps, in the order they are shown.
    steps: Vec<Step>,

    /// Optional message shown after the questionnaire completes.
    epilogue: Option<String>,
}

impl StepCatalog {
    /// Create a catalog from the given steps.
    pub fn new(steps: Vec<Step>) -> Result<Self, CatalogError> {
        if steps.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for (index, step) in steps.iter().enumerate() {
            let texts = std::iter::once(step.label()).chain(step.content());
            for reference in texts.flat_map(placeholders) {
                if !seen.contains(reference) {
                    return Err(CatalogError::ForwardReference {
                        index,
                        reference: reference.to_string(),
                    });
                }
            }

            for choice in step.choices() {
                if let Some(condition) = &choice.visible_when
                    && !seen.contains(condition.field_id.as_str())
                {
                    return Err(CatalogError::ForwardReference {
                        index,
                        reference: condition.field_id.to_string(),
                    });
                }
            }

            if let Some(id) = step.id() {
                check_choices(id, step)?;
                if !seen.insert(id.as_str()) {
                    return Err(CatalogError::DuplicateId(id.clone()));
                }
            }
        }

        Ok(Self {
            steps,
            epilogue: None,
        })
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Get the epilogue message.
    pub fn epilogue(&self) -> Option<&str> {
        self.epilogue.as_deref()
    }

    /// Get the steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Get the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the final step.
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

fn check_choices(id: &StepId, step: &Step) -> Result<(), CatalogError> {
    let mut values = HashSet::new();
    for choice in step.choices() {
        if !values.insert(choice.value.as_str()) {
            return Err(CatalogError::DuplicateChoice {
                id: id.clone(),
                value: choice.value.clone(),
            });
        }
    }

    if let StepKind::MultiSelect(multi) = step.kind()
        && (multi.max_selections == 0 || multi.max_selections > multi.choices.len())
    {
        return Err(CatalogError::InvalidMaxSelections {
            id: id.clone(),
            max_selections: multi.max_selections,
            available: multi.choices.len(),
        });
    }

    Ok(())
}

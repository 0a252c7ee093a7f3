use crate::StepId;

/// Error type for catalog construction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A catalog needs at least one step.
    #[error("Catalog has no steps")]
    Empty,

    /// Two input steps share an id.
    #[error("Duplicate step id: {0}")]
    DuplicateId(StepId),

    /// A placeholder or condition names a step that is not strictly earlier.
    #[error("Step {index} references '{reference}', which is not an earlier step")]
    ForwardReference { index: usize, reference: String },

    /// `max_selections` is zero or larger than the number of choices.
    #[error("Step '{id}' requires {max_selections} selections but offers {available} choices")]
    InvalidMaxSelections {
        id: StepId,
        max_selections: usize,
        available: usize,
    },

    /// Two choices of one step share a value.
    #[error("Step '{id}' has duplicate choice value '{value}'")]
    DuplicateChoice { id: StepId, value: String },
}

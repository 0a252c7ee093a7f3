//! Core types for leadform.
//!
//! This crate provides the foundational types for defining questionnaires:
//! - `StepCatalog` - The ordered list of steps
//! - `Step` and `StepKind` - Individual pages and their input types
//! - `Answers` and `StepId` - Collected data keyed by step id
//! - `substitute` - `[placeholder]` expansion for step text
//! - `Submitter` - The seam for delivering completed answers

mod step_id;
pub use step_id::StepId;

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{AnswerError, Answers};

mod step;
pub use step::{
    Choice, ComboboxStep, MultiSelectStep, SelectStep, Step, StepKind, TextShape, TextStep,
    VisibleWhen, choices_from_labels, slugify,
};

mod template;
pub use template::{placeholders, substitute};

mod catalog;
pub use catalog::StepCatalog;

mod error;
pub use error::CatalogError;

mod traits;
pub use traits::Submitter;

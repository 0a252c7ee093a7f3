//! # leadform
//!
//! Multi-step lead-capture questionnaires. Frontend-agnostic.
//!
//! A questionnaire is a [`StepCatalog`]: an ordered list of informational,
//! text, combobox, single-select and multi-select steps. A
//! [`WizardController`] walks it one step at a time, validating each answer
//! before moving on and substituting earlier answers into later headings.
//! When the last step validates, the answers are handed to a [`Submitter`].
//!
//! ## Usage
//!
//! ```rust
//! use leadform::{Advance, RecordingSubmitter, Step, StepCatalog, WizardController};
//!
//! let catalog = StepCatalog::new(vec![
//!     Step::text("fname", "What's your first name?"),
//!     Step::email("email", "Which email should we use, [fname]?"),
//! ])?;
//!
//! let mut wizard = WizardController::new(catalog, RecordingSubmitter::new());
//! wizard.set_text("Ada");
//! assert_eq!(wizard.advance(), Advance::Moved);
//! assert_eq!(wizard.heading(), "Which email should we use, Ada?");
//!
//! wizard.set_text("not-an-email");
//! assert_eq!(wizard.advance(), Advance::Blocked);
//! assert!(wizard.error_message().is_some());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Frontends
//!
//! Frontends are separate crates that drive a `WizardController`:
//! - `leadform-ratatui-wizard` - full-screen terminal wizard
//!
//! ## Submitters
//!
//! - `leadform-http` - JSON POST to a fixed endpoint, fire-and-forget
//! - [`RecordingSubmitter`] - keeps submissions in memory for tests

// Re-export all types from leadform-types
pub use leadform_types::*;

mod validate;
pub use validate::{ValidationError, is_valid_email, is_valid_phone, validate};

mod wizard;
pub use wizard::{Advance, Phase, WizardController};

// Submitter for testing questionnaires without a network
mod recording_submitter;
pub use recording_submitter::RecordingSubmitter;

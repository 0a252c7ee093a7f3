//! Ratatui frontend for leadform.
//!
//! Presents a questionnaire one step at a time in a full-screen terminal UI
//! with a progress bar, numbered choices and inline validation errors.
//!
//! ```rust,no_run
//! use leadform::{RecordingSubmitter, Step, StepCatalog, WizardController};
//! use leadform_ratatui_wizard::RatatuiWizard;
//!
//! let catalog = StepCatalog::new(vec![Step::text("fname", "What's your first name?")])?;
//! let mut wizard = WizardController::new(catalog, RecordingSubmitter::new());
//!
//! RatatuiWizard::new().with_title("Signup").run(&mut wizard)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod app;
pub use app::{RatatuiError, RatatuiWizard};

pub mod keys;

mod theme;
pub use theme::Theme;

pub mod ui;

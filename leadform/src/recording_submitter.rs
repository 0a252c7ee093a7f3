//! Submitter for testing questionnaires without a network.
//!
//! `RecordingSubmitter` keeps every answer set it is handed. Clones share the
//! same record, so a test can keep one clone and give the other to the
//! controller.
//!
//! # Example
//!
//! ```rust
//! use leadform::{RecordingSubmitter, Step, StepCatalog, WizardController};
//!
//! let catalog = StepCatalog::new(vec![Step::text("fname", "First name?")]).unwrap();
//! let submitter = RecordingSubmitter::new();
//! let mut wizard = WizardController::new(catalog, submitter.clone());
//!
//! wizard.set_text("Ada");
//! wizard.advance();
//!
//! assert!(wizard.is_completed());
//! assert_eq!(submitter.submission_count(), 1);
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use tracing::warn;

use crate::{Answers, Submitter};

/// A submitter that records submissions instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSubmitter {
    submissions: Arc<Mutex<Vec<Answers>>>,
    reject: bool,
}

impl RecordingSubmitter {
    /// Create a submitter whose deliveries always succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a submitter that simulates a rejected delivery.
    ///
    /// The attempt is still recorded; the failure is only logged, the way a
    /// real transport error would be.
    pub fn rejecting() -> Self {
        Self {
            submissions: Arc::default(),
            reject: true,
        }
    }

    /// All answer sets handed over so far.
    pub fn submissions(&self) -> Vec<Answers> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The number of submissions so far.
    pub fn submission_count(&self) -> usize {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Submitter for RecordingSubmitter {
    fn submit(&self, answers: &Answers) {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(answers.clone());

        if self.reject {
            warn!("submission rejected by recording submitter");
        }
    }
}

use crate::Answers;

/// Delivers a completed answer set to wherever it needs to go.
///
/// Submission is fire-and-forget: implementations must not block the caller
/// on delivery and have no way to report failure back. Anything that goes
/// wrong is logged by the implementation.
pub trait Submitter {
    /// Hand off the final answers.
    fn submit(&self, answers: &Answers);
}

impl<S: Submitter + ?Sized> Submitter for &S {
    fn submit(&self, answers: &Answers) {
        (**self).submit(answers);
    }
}

impl<S: Submitter + ?Sized> Submitter for Box<S> {
    fn submit(&self, answers: &Answers) {
        (**self).submit(answers);
    }
}

//! The step-navigation state machine.
//!
//! `WizardController` owns the catalog, the answers committed so far, the live
//! input of the current step (the draft) and the current error message. A
//! frontend holds exactly one controller and calls into it for every key or
//! click, so every handler sees fresh state.

use tracing::{debug, info};

use crate::{
    AnswerValue, Answers, Choice, ComboboxStep, Step, StepCatalog, StepKind, Submitter, substitute,
    validate,
};

/// Where the wizard is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing the step at this index.
    Active(usize),
    /// The final step validated and the answers were handed to the submitter.
    Completed,
}

/// The result of [`WizardController::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The current step did not validate; the error message is set.
    Blocked,
    /// Moved to the next step.
    Moved,
    /// The last step validated; the wizard is now complete.
    Completed,
    /// The wizard was already complete.
    Ignored,
}

/// The uncommitted input of the current step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Draft {
    /// Text typed into a text or combobox step.
    text: String,
    /// Cursor position in `text`, in chars.
    cursor: usize,
    /// Selected choice values of a select step, in selection order.
    selected: Vec<String>,
    /// Highlighted row in the visible choices or combobox suggestions.
    highlight: usize,
}

impl Draft {
    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Drives a questionnaire from the first step to completion.
pub struct WizardController<S> {
    catalog: StepCatalog,
    answers: Answers,
    draft: Draft,
    index: usize,
    completed: bool,
    error_message: Option<String>,
    submitter: S,
}

impl<S: Submitter> WizardController<S> {
    /// Start at the first step with no answers and no error.
    pub fn new(catalog: StepCatalog, submitter: S) -> Self {
        let mut controller = Self {
            catalog,
            answers: Answers::new(),
            draft: Draft::default(),
            index: 0,
            completed: false,
            error_message: None,
            submitter,
        };
        controller.load_draft();
        controller
    }

    // === State ===

    /// Get the catalog being walked.
    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    /// Get the answers committed so far.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Get the submitter.
    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Get the current phase.
    pub fn phase(&self) -> Phase {
        if self.completed {
            Phase::Completed
        } else {
            Phase::Active(self.index)
        }
    }

    /// Check if the wizard reached its terminal state.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Index of the step being shown (the last step once completed).
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The step being shown.
    pub fn current_step(&self) -> &Step {
        &self.catalog.steps()[self.index]
    }

    /// Check if the current step is the final one.
    pub fn is_last_step(&self) -> bool {
        self.index == self.catalog.last_index()
    }

    /// Check if `retreat` would do anything.
    pub fn can_retreat(&self) -> bool {
        !self.completed && self.index > 0
    }

    /// Get the message of the last failed validation, if still shown.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Fraction of the questionnaire behind the user, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.completed {
            1.0
        } else {
            self.index as f64 / self.catalog.len() as f64
        }
    }

    // === Rendering helpers ===

    /// The current heading with placeholders substituted.
    pub fn heading(&self) -> String {
        substitute(self.current_step().label(), &self.answers)
    }

    /// The current body text with placeholders substituted.
    pub fn content(&self) -> Option<String> {
        self.current_step()
            .content()
            .map(|content| substitute(content, &self.answers))
    }

    /// The advance button text: the step's override, else "Submit" on the
    /// final step, else "Next".
    pub fn confirm_label(&self) -> &str {
        match self.current_step().confirm_label() {
            Some(label) => label,
            None if self.is_last_step() => "Submit",
            None => "Next",
        }
    }

    /// The current step's choices that are visible given the answers so far.
    pub fn visible_choices(&self) -> Vec<&Choice> {
        self.current_step().visible_choices(&self.answers)
    }

    /// Check if a choice value is selected in the current draft.
    pub fn is_selected(&self, value: &str) -> bool {
        self.draft.selected.iter().any(|selected| selected == value)
    }

    /// The selected choice values of the current draft.
    pub fn selected(&self) -> &[String] {
        &self.draft.selected
    }

    /// The text typed into the current step.
    pub fn text(&self) -> &str {
        &self.draft.text
    }

    /// Cursor position in [`text`](Self::text), in chars.
    pub fn cursor(&self) -> usize {
        self.draft.cursor
    }

    /// The highlighted row among the visible choices or suggestions.
    pub fn highlight(&self) -> usize {
        self.draft.highlight
    }

    /// Combobox options matching the typed text. Empty for other kinds.
    pub fn suggestions(&self) -> Vec<&Choice> {
        match self.current_step().kind() {
            StepKind::Combobox(combobox) => combobox.suggestions(&self.draft.text),
            _ => Vec::new(),
        }
    }

    // === Transitions ===

    /// Commit the current input, validate it, and move on.
    ///
    /// On the final step a successful validation completes the wizard and
    /// hands the answers to the submitter exactly once. The outcome of the
    /// submission is never observed here.
    pub fn advance(&mut self) -> Advance {
        if self.completed {
            return Advance::Ignored;
        }

        self.commit_draft();

        if let Err(err) = validate(self.current_step(), &self.answers) {
            debug!(step = self.index, error = %err, "step did not validate");
            self.error_message = Some(err.to_string());
            return Advance::Blocked;
        }

        self.error_message = None;

        if self.is_last_step() {
            self.completed = true;
            info!(answers = self.answers.len(), "questionnaire completed");
            self.submitter.submit(&self.answers);
            return Advance::Completed;
        }

        self.index += 1;
        debug!(step = self.index, "advanced");
        self.load_draft();
        Advance::Moved
    }

    /// Go back one step without validating.
    ///
    /// Whatever was entered on the step being left is kept. Returns `false`
    /// on the first step and once completed.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }

        self.commit_draft();
        self.index -= 1;
        self.error_message = None;
        debug!(step = self.index, "retreated");
        self.load_draft();
        true
    }

    // === Choice input ===

    /// Toggle the visible choice at `position` (1-indexed).
    ///
    /// Returns `false` if the step has no choices or the position is out of
    /// range. On a single-select step the choice becomes the only selection,
    /// or is cleared if it was already selected.
    pub fn toggle_choice(&mut self, position: usize) -> bool {
        if self.completed || position == 0 {
            return false;
        }

        let single = matches!(self.current_step().kind(), StepKind::SingleSelect(_));
        let Some(value) = self
            .visible_choices()
            .get(position - 1)
            .map(|choice| choice.value.clone())
        else {
            return false;
        };

        self.draft.highlight = position - 1;
        let selected = &mut self.draft.selected;
        if let Some(existing) = selected.iter().position(|v| *v == value) {
            selected.remove(existing);
        } else if single {
            selected.clear();
            selected.push(value);
        } else {
            selected.push(value);
        }
        true
    }

    /// Toggle the highlighted choice.
    pub fn toggle_highlighted(&mut self) -> bool {
        self.toggle_choice(self.draft.highlight + 1)
    }

    /// Move the highlight one row up.
    pub fn highlight_previous(&mut self) {
        if self.completed {
            return;
        }
        self.draft.highlight = self.draft.highlight.saturating_sub(1);
    }

    /// Move the highlight one row down, staying within the visible rows.
    pub fn highlight_next(&mut self) {
        if self.completed {
            return;
        }
        let rows = match self.current_step().kind() {
            StepKind::Combobox(_) => self.suggestions().len(),
            _ => self.visible_choices().len(),
        };
        if self.draft.highlight + 1 < rows {
            self.draft.highlight += 1;
        }
    }

    /// Replace the typed text with the highlighted combobox suggestion.
    pub fn accept_suggestion(&mut self) -> bool {
        if self.completed {
            return false;
        }
        let Some(label) = self
            .suggestions()
            .get(self.draft.highlight)
            .map(|choice| choice.label.clone())
        else {
            return false;
        };
        self.set_text(label);
        true
    }

    // === Text input ===

    /// Replace the typed text and put the cursor at its end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if self.completed || !self.current_step().kind().is_text() {
            return;
        }
        self.draft.text = text.into();
        self.draft.cursor = self.draft.char_len();
        self.draft.highlight = 0;
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        if self.completed || !self.current_step().kind().is_text() {
            return;
        }
        let at = self.draft.byte_index(self.draft.cursor);
        self.draft.text.insert(at, c);
        self.draft.cursor += 1;
        self.draft.highlight = 0;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.completed || self.draft.cursor == 0 {
            return;
        }
        self.draft.cursor -= 1;
        let at = self.draft.byte_index(self.draft.cursor);
        self.draft.text.remove(at);
        self.draft.highlight = 0;
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.completed || self.draft.cursor >= self.draft.char_len() {
            return;
        }
        let at = self.draft.byte_index(self.draft.cursor);
        self.draft.text.remove(at);
        self.draft.highlight = 0;
    }

    pub fn move_cursor_left(&mut self) {
        self.draft.cursor = self.draft.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.draft.cursor < self.draft.char_len() {
            self.draft.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.draft.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.draft.cursor = self.draft.char_len();
    }

    // === Draft bookkeeping ===

    /// Write the live input of the current step into the answer set.
    ///
    /// Blank input removes the step's entry. Selected choices are kept even if
    /// they are no longer visible.
    fn commit_draft(&mut self) {
        let step = &self.catalog.steps()[self.index];
        let Some(id) = step.id() else {
            return;
        };

        let value = match step.kind() {
            StepKind::Information => None,
            StepKind::SingleLineText(_) => non_blank(&self.draft.text),
            StepKind::Combobox(combobox) => {
                non_blank(&self.draft.text).map(|text| combobox_value(combobox, text))
            }
            StepKind::SingleSelect(_) => self.draft.selected.first().cloned(),
            StepKind::MultiSelect(_) if self.draft.selected.is_empty() => None,
            StepKind::MultiSelect(_) => {
                self.answers
                    .insert(id.clone(), AnswerValue::List(self.draft.selected.clone()));
                return;
            }
        };

        match value {
            Some(value) => self.answers.insert(id.clone(), value),
            None => {
                self.answers.remove(id);
            }
        }
    }

    /// Load the current step's draft from its committed answer.
    fn load_draft(&mut self) {
        let step = &self.catalog.steps()[self.index];
        let mut draft = Draft::default();

        if let Some(answer) = step.id().and_then(|id| self.answers.get(id)) {
            match step.kind() {
                StepKind::Information => {}
                StepKind::SingleLineText(_) => draft.text = answer.display(),
                StepKind::Combobox(combobox) => {
                    let stored = answer.display();
                    draft.text = combobox
                        .options
                        .iter()
                        .find(|option| option.value == stored)
                        .map(|option| option.label.clone())
                        .unwrap_or(stored);
                }
                StepKind::SingleSelect(_) | StepKind::MultiSelect(_) => {
                    draft.selected = answer.values().into_iter().map(str::to_string).collect();
                }
            }
        }

        draft.cursor = draft.char_len();
        self.draft = draft;
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn combobox_value(combobox: &ComboboxStep, text: String) -> String {
    combobox
        .matching_option(&text)
        .map(|option| option.value.clone())
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RecordingSubmitter, choices_from_labels};

    fn catalog() -> StepCatalog {
        StepCatalog::new(vec![
            Step::information("Welcome").with_confirm_label("I agree"),
            Step::text("fname", "What's your first name?"),
            Step::text("lname", "What's your last name, [fname]?"),
            Step::single_select(
                "role",
                "Your role?",
                choices_from_labels(&["Founder", "Engineer"]),
            ),
            Step::multi_select(
                "goals",
                "[fname], your goals?",
                vec![
                    Choice::from_label("Learn"),
                    Choice::from_label("Raise funding").visible_when("role", "founder"),
                    Choice::from_label("Get promoted"),
                ],
                2,
            ),
        ])
        .unwrap()
    }

    fn wizard() -> WizardController<RecordingSubmitter> {
        WizardController::new(catalog(), RecordingSubmitter::new())
    }

    fn type_text(wizard: &mut WizardController<RecordingSubmitter>, text: &str) {
        for c in text.chars() {
            wizard.insert_char(c);
        }
    }

    #[test]
    fn starts_at_first_step_without_error() {
        let wizard = wizard();
        assert_eq!(wizard.phase(), Phase::Active(0));
        assert_eq!(wizard.error_message(), None);
        assert_eq!(wizard.confirm_label(), "I agree");
        assert!(!wizard.can_retreat());
    }

    #[test]
    fn blank_required_text_blocks() {
        let mut wizard = wizard();
        assert_eq!(wizard.advance(), Advance::Moved);

        type_text(&mut wizard, "   ");
        assert_eq!(wizard.advance(), Advance::Blocked);
        assert_eq!(wizard.current_index(), 1);
        assert_eq!(wizard.error_message(), Some("This field is required"));
        assert!(wizard.answers().is_empty());
    }

    #[test]
    fn valid_advance_moves_by_one_and_clears_error() {
        let mut wizard = wizard();
        wizard.advance();
        wizard.advance();
        assert!(wizard.error_message().is_some());

        type_text(&mut wizard, "Ada");
        assert_eq!(wizard.advance(), Advance::Moved);
        assert_eq!(wizard.current_index(), 2);
        assert_eq!(wizard.error_message(), None);
        assert_eq!(wizard.heading(), "What's your last name, Ada?");
    }

    #[test]
    fn retreat_is_noop_on_first_step() {
        let mut wizard = wizard();
        assert!(!wizard.retreat());
        assert_eq!(wizard.current_index(), 0);
    }

    #[test]
    fn retreat_keeps_answers_and_clears_error() {
        let mut wizard = wizard();
        wizard.advance();
        type_text(&mut wizard, "Ada");
        wizard.advance();
        wizard.advance();
        assert!(wizard.error_message().is_some());

        type_text(&mut wizard, "Love");
        assert!(wizard.retreat());
        assert_eq!(wizard.current_index(), 1);
        assert_eq!(wizard.error_message(), None);
        assert_eq!(wizard.text(), "Ada");
        assert_eq!(wizard.answers().get_text(&"lname".into()).unwrap(), "Love");
    }

    #[test]
    fn digit_toggles_use_visible_positions() {
        let mut wizard = wizard();
        wizard.advance();
        type_text(&mut wizard, "Ada");
        wizard.advance();
        type_text(&mut wizard, "Lovelace");
        wizard.advance();

        assert!(wizard.toggle_choice(2));
        assert_eq!(wizard.advance(), Advance::Moved);

        let visible: Vec<_> = wizard
            .visible_choices()
            .iter()
            .map(|c| c.value.clone())
            .collect();
        assert_eq!(visible, vec!["learn", "get-promoted"]);
        assert!(!wizard.toggle_choice(3));
        assert!(!wizard.toggle_choice(0));

        assert!(wizard.toggle_choice(2));
        assert_eq!(wizard.selected(), ["get-promoted".to_string()]);
    }

    #[test]
    fn single_select_keeps_one_selection() {
        let mut wizard = wizard();
        wizard.advance();
        type_text(&mut wizard, "Ada");
        wizard.advance();
        type_text(&mut wizard, "Lovelace");
        wizard.advance();

        wizard.toggle_choice(1);
        wizard.toggle_choice(2);
        assert_eq!(wizard.selected(), ["engineer".to_string()]);

        wizard.toggle_choice(2);
        assert!(wizard.selected().is_empty());
        assert_eq!(wizard.advance(), Advance::Blocked);
        assert_eq!(wizard.error_message(), Some("Please choose one option"));
    }

    #[test]
    fn hidden_selections_are_not_pruned() {
        let mut wizard = wizard();
        wizard.advance();
        type_text(&mut wizard, "Ada");
        wizard.advance();
        type_text(&mut wizard, "Lovelace");
        wizard.advance();
        wizard.toggle_choice(1);
        wizard.advance();

        wizard.toggle_choice(2);
        assert!(wizard.is_selected("raise-funding"));

        wizard.retreat();
        wizard.toggle_choice(2);
        wizard.advance();

        assert!(wizard.is_selected("raise-funding"));
        assert!(
            !wizard
                .visible_choices()
                .iter()
                .any(|c| c.value == "raise-funding")
        );
    }

    #[test]
    fn last_step_completes_and_submits_once() {
        let mut wizard = wizard();
        wizard.advance();
        type_text(&mut wizard, "Ada");
        wizard.advance();
        type_text(&mut wizard, "Lovelace");
        wizard.advance();
        wizard.toggle_choice(2);
        wizard.advance();
        assert!(wizard.is_last_step());
        assert_eq!(wizard.confirm_label(), "Submit");

        wizard.toggle_choice(1);
        assert_eq!(wizard.advance(), Advance::Blocked);
        wizard.toggle_choice(2);
        assert_eq!(wizard.advance(), Advance::Completed);
        assert_eq!(wizard.phase(), Phase::Completed);
        assert_eq!(wizard.progress(), 1.0);

        assert_eq!(wizard.advance(), Advance::Ignored);
        assert!(!wizard.retreat());
        assert_eq!(wizard.submitter().submission_count(), 1);

        let submissions = wizard.submitter().submissions();
        let submitted = &submissions[0];
        assert_eq!(
            submitted.get_list(&"goals".into()).unwrap(),
            ["learn".to_string(), "get-promoted".to_string()]
        );
    }

    #[test]
    fn text_editing_handles_multibyte_chars() {
        let mut wizard = wizard();
        wizard.advance();
        type_text(&mut wizard, "Zoë");
        wizard.move_cursor_left();
        wizard.backspace();
        assert_eq!(wizard.text(), "Zë");
        wizard.move_cursor_home();
        wizard.delete();
        assert_eq!(wizard.text(), "ë");
        wizard.move_cursor_end();
        assert_eq!(wizard.cursor(), 1);
    }

    #[test]
    fn text_input_is_ignored_on_choice_steps() {
        let mut wizard = wizard();
        wizard.insert_char('x');
        assert_eq!(wizard.text(), "");
    }
}

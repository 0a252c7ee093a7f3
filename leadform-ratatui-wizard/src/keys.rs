//! Key bindings.
//!
//! `Enter` advances and `1`-`9` toggle the visible choice at that position.
//! Everything else either edits the text of the current step or moves the
//! highlight. The mapping reads the controller's current state on every key,
//! so there is nothing to rebind when the step changes.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use leadform::{StepKind, Submitter, WizardController};

/// What a key press asks the wizard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    Cancel,
    /// Toggle the visible choice at this 1-indexed position.
    ToggleChoice(usize),
    ToggleHighlighted,
    HighlightPrevious,
    HighlightNext,
    AcceptSuggestion,
    Insert(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}

/// Whether the event loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Cancel,
}

/// Map a key press to a command for the step currently shown.
pub fn command_for<S: Submitter>(wizard: &WizardController<S>, key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let kind = wizard.current_step().kind();
    let is_text = kind.is_text();
    let is_select = kind.is_select();
    let is_combobox = matches!(kind, StepKind::Combobox(_));

    match key.code {
        KeyCode::Esc => Some(Command::Cancel),
        KeyCode::Char('c') if ctrl => Some(Command::Cancel),
        KeyCode::Enter => Some(Command::Advance),
        KeyCode::Up if ctrl => Some(Command::Retreat),
        KeyCode::Char(c @ '1'..='9') if is_select => c
            .to_digit(10)
            .map(|digit| Command::ToggleChoice(digit as usize)),
        KeyCode::Char(' ') if is_select => Some(Command::ToggleHighlighted),
        KeyCode::Up if is_select || is_combobox => Some(Command::HighlightPrevious),
        KeyCode::Down if is_select || is_combobox => Some(Command::HighlightNext),
        KeyCode::Tab if is_combobox => Some(Command::AcceptSuggestion),
        KeyCode::Backspace if !is_text || wizard.text().is_empty() => Some(Command::Retreat),
        KeyCode::Backspace => Some(Command::Backspace),
        KeyCode::Char(c) if is_text && !ctrl => Some(Command::Insert(c)),
        KeyCode::Delete if is_text => Some(Command::Delete),
        KeyCode::Left if is_text => Some(Command::CursorLeft),
        KeyCode::Right if is_text => Some(Command::CursorRight),
        KeyCode::Home if is_text => Some(Command::CursorHome),
        KeyCode::End if is_text => Some(Command::CursorEnd),
        _ => None,
    }
}

/// Apply a command to the wizard.
pub fn dispatch<S: Submitter>(wizard: &mut WizardController<S>, command: Command) -> Flow {
    match command {
        Command::Cancel => return Flow::Cancel,
        Command::Advance => {
            wizard.advance();
        }
        Command::Retreat => {
            wizard.retreat();
        }
        Command::ToggleChoice(position) => {
            wizard.toggle_choice(position);
        }
        Command::ToggleHighlighted => {
            wizard.toggle_highlighted();
        }
        Command::HighlightPrevious => wizard.highlight_previous(),
        Command::HighlightNext => wizard.highlight_next(),
        Command::AcceptSuggestion => {
            wizard.accept_suggestion();
        }
        Command::Insert(c) => wizard.insert_char(c),
        Command::Backspace => wizard.backspace(),
        Command::Delete => wizard.delete(),
        Command::CursorLeft => wizard.move_cursor_left(),
        Command::CursorRight => wizard.move_cursor_right(),
        Command::CursorHome => wizard.move_cursor_home(),
        Command::CursorEnd => wizard.move_cursor_end(),
    }
    Flow::Continue
}

/// Map and apply a key press in one go.
pub fn handle_key<S: Submitter>(wizard: &mut WizardController<S>, key: KeyEvent) -> Flow {
    match command_for(wizard, key) {
        Some(command) => dispatch(wizard, command),
        None => Flow::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadform::{RecordingSubmitter, Step, StepCatalog, choices_from_labels};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn wizard() -> WizardController<RecordingSubmitter> {
        let catalog = StepCatalog::new(vec![
            Step::text("fname", "First name?"),
            Step::multi_select(
                "goals",
                "Goals, [fname]?",
                choices_from_labels(&["Learn", "Network", "Hire"]),
                2,
            ),
            Step::combobox(
                "industry",
                "Industry?",
                choices_from_labels(&["Fintech", "Edtech"]),
            ),
        ])
        .unwrap();
        WizardController::new(catalog, RecordingSubmitter::new())
    }

    fn type_text(wizard: &mut WizardController<RecordingSubmitter>, text: &str) {
        for c in text.chars() {
            handle_key(wizard, press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn enter_advances() {
        let mut wizard = wizard();
        type_text(&mut wizard, "Ada");
        assert_eq!(command_for(&wizard, press(KeyCode::Enter)), Some(Command::Advance));
        handle_key(&mut wizard, press(KeyCode::Enter));
        assert_eq!(wizard.current_index(), 1);
    }

    #[test]
    fn digits_are_typed_on_text_steps() {
        let mut wizard = wizard();
        type_text(&mut wizard, "R2D2");
        assert_eq!(wizard.text(), "R2D2");
    }

    #[test]
    fn digits_toggle_choices_on_select_steps() {
        let mut wizard = wizard();
        type_text(&mut wizard, "Ada");
        handle_key(&mut wizard, press(KeyCode::Enter));

        handle_key(&mut wizard, press(KeyCode::Char('3')));
        handle_key(&mut wizard, press(KeyCode::Char('1')));
        assert_eq!(wizard.selected(), ["hire".to_string(), "learn".to_string()]);

        handle_key(&mut wizard, press(KeyCode::Char('3')));
        assert_eq!(wizard.selected(), ["learn".to_string()]);

        handle_key(&mut wizard, press(KeyCode::Char('9')));
        assert_eq!(wizard.selected(), ["learn".to_string()]);
    }

    #[test]
    fn space_toggles_highlighted_choice() {
        let mut wizard = wizard();
        type_text(&mut wizard, "Ada");
        handle_key(&mut wizard, press(KeyCode::Enter));

        handle_key(&mut wizard, press(KeyCode::Down));
        handle_key(&mut wizard, press(KeyCode::Char(' ')));
        assert_eq!(wizard.selected(), ["network".to_string()]);
    }

    #[test]
    fn backspace_on_empty_input_goes_back() {
        let mut wizard = wizard();
        type_text(&mut wizard, "Ada");
        handle_key(&mut wizard, press(KeyCode::Enter));
        assert_eq!(
            command_for(&wizard, press(KeyCode::Backspace)),
            Some(Command::Retreat)
        );
        handle_key(&mut wizard, press(KeyCode::Backspace));
        assert_eq!(wizard.current_index(), 0);

        handle_key(&mut wizard, press(KeyCode::Backspace));
        assert_eq!(wizard.text(), "Ad");
        assert_eq!(wizard.current_index(), 0);
    }

    #[test]
    fn tab_accepts_suggestion() {
        let mut wizard = wizard();
        type_text(&mut wizard, "Ada");
        handle_key(&mut wizard, press(KeyCode::Enter));
        handle_key(&mut wizard, press(KeyCode::Char('1')));
        handle_key(&mut wizard, press(KeyCode::Char('2')));
        handle_key(&mut wizard, press(KeyCode::Enter));

        type_text(&mut wizard, "tech");
        handle_key(&mut wizard, press(KeyCode::Down));
        handle_key(&mut wizard, press(KeyCode::Tab));
        assert_eq!(wizard.text(), "Edtech");
    }

    #[test]
    fn escape_and_ctrl_c_cancel() {
        let mut wizard = wizard();
        assert_eq!(handle_key(&mut wizard, press(KeyCode::Esc)), Flow::Cancel);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut wizard, ctrl_c), Flow::Cancel);
        assert_eq!(wizard.text(), "");
    }

    #[test]
    fn key_releases_are_ignored() {
        let wizard = wizard();
        let mut release = press(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(command_for(&wizard, release), None);
    }
}

//! Terminal setup and the event loop.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use leadform::{StepCatalog, Submitter, WizardController};
use ratatui::{Terminal, prelude::CrosstermBackend};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    Theme,
    keys::{Flow, handle_key},
    ui::{draw_completion, draw_wizard},
};

const DEFAULT_COMPLETION: &str = "All done! Thanks for your time.";

/// Error type for the Ratatui frontend.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// User left the wizard before completing it (e.g., pressed Esc).
    #[error("Questionnaire cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup/restore error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Full-screen terminal wizard showing one step at a time.
#[derive(Debug, Clone)]
pub struct RatatuiWizard {
    /// Title shown at the top of every step.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
    /// Message shown once the answers are submitted.
    completion: String,
}

impl Default for RatatuiWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiWizard {
    /// Create a wizard frontend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Questionnaire".to_string(),
            theme: Theme::default(),
            completion: DEFAULT_COMPLETION.to_string(),
        }
    }

    /// Set the title shown at the top of the wizard.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the message shown on the completion view.
    pub fn with_completion_message(mut self, message: impl Into<String>) -> Self {
        self.completion = message.into();
        self
    }

    /// Walk the user through `wizard` until it completes or they cancel.
    ///
    /// The terminal is restored before returning, also on error.
    pub fn run<S: Submitter>(&self, wizard: &mut WizardController<S>) -> Result<(), RatatuiError> {
        let mut terminal = self.setup_terminal()?;
        let result = self.event_loop(&mut terminal, wizard);
        self.restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop<S: Submitter>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        wizard: &mut WizardController<S>,
    ) -> Result<(), RatatuiError> {
        let completion = self.completion_text(wizard.catalog());

        loop {
            terminal.draw(|frame| {
                if wizard.is_completed() {
                    draw_completion(frame, &self.theme, &completion);
                } else {
                    draw_wizard(frame, &*wizard, &self.theme, &self.title);
                }
            })?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if wizard.is_completed() {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    info!("leaving completion view");
                    return Ok(());
                }
                continue;
            }

            if handle_key(wizard, key) == Flow::Cancel {
                debug!(step = wizard.current_index(), "cancelled by user");
                return Err(RatatuiError::Cancelled);
            }
        }
    }

    /// The completion message followed by the catalog's epilogue, if any.
    fn completion_text(&self, catalog: &StepCatalog) -> String {
        match catalog.epilogue() {
            Some(epilogue) => format!("{}\n\n{}", self.completion, epilogue),
            None => self.completion.clone(),
        }
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(|err| RatatuiError::Terminal(err.to_string()))
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}

use std::time::Duration;

use anyhow::Context;
use growthx_apply::{catalog, logging};
use leadform::WizardController;
use leadform_http::HttpSubmitter;
use leadform_ratatui_wizard::{RatatuiError, RatatuiWizard, Theme};
use ratatui::style::Color;
use tracing::info;

/// How long pending submissions get to finish once the wizard exits.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

fn growthx_theme() -> Theme {
    Theme {
        primary: Color::Rgb(255, 255, 255),
        secondary: Color::Rgb(170, 170, 170),
        highlight: Color::Rgb(0, 119, 255),
        success: Color::Rgb(0, 200, 120),
        error: Color::Rgb(255, 80, 80),
        text: Color::Rgb(230, 230, 230),
        background: Color::Reset,
        border: Color::Rgb(90, 90, 90),
    }
}

fn main() -> anyhow::Result<()> {
    let _guard = logging::init_tracing()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let submitter = HttpSubmitter::new(runtime.handle().clone());
    let catalog = catalog::application()
        .context("invalid questionnaire")?
        .with_epilogue(format!("Response has been sent to {}.", submitter.endpoint()));

    let mut wizard = WizardController::new(catalog, submitter);
    let frontend = RatatuiWizard::new()
        .with_title("GrowthX")
        .with_theme(growthx_theme());

    let outcome = frontend.run(&mut wizard);

    runtime.shutdown_timeout(SHUTDOWN_GRACE);

    match outcome {
        Ok(()) => {
            info!(answers = wizard.answers().len(), "application finished");
            Ok(())
        }
        Err(RatatuiError::Cancelled) => {
            info!(step = wizard.current_index(), "application cancelled");
            Ok(())
        }
        Err(err) => Err(err).context("terminal wizard failed"),
    }
}

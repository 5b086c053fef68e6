//! Progress spinner for the parallel flows

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::OutputFormat;

const TICK_MILLIS: u64 = 100;

/// Spinner shown on stderr while a fan-out is in flight.
///
/// Only the human-facing table format gets one; CSV and JSON output must
/// stay machine-readable, so those formats yield `None` and every spinner
/// call becomes a no-op.
pub fn create_spinner(message: &str, format: OutputFormat) -> Option<ProgressBar> {
    if format != OutputFormat::Table {
        return None;
    }
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
        .ok()?;
    let spinner = ProgressBar::new_spinner()
        .with_style(style)
        .with_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(TICK_MILLIS));
    Some(spinner)
}

/// Stop the spinner, leaving `message` as the final line
pub fn finish_spinner(spinner: Option<ProgressBar>, message: &str) {
    if let Some(spinner) = spinner {
        spinner.finish_with_message(message.to_string());
    }
}

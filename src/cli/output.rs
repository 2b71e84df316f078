//! CLI output: terminal progress and error mapping.

use crate::progress::{ProgressEvent, ProgressListener};
use owo_colors::OwoColorize;

/// Prints progress lines to stderr so stdout stays parseable.
pub struct TerminalProgress;

impl ProgressListener for TerminalProgress {
    fn on_event(&self, event: &ProgressEvent) {
        eprintln!("{}", format_progress(event));
    }
}

pub fn format_progress(event: &ProgressEvent) -> String {
    match event {
        ProgressEvent::WaveStarted {
            index,
            total,
            weeks_completed,
            total_weeks,
        } => format!(
            "{} wave {}/{} ({}/{} weeks done)",
            "▶".cyan(),
            index,
            total,
            weeks_completed,
            total_weeks
        ),
        ProgressEvent::WeekCompleted { count, total } => {
            format!("{} {}/{} weeks generated", "✓".green(), count, total)
        }
        ProgressEvent::BatchFailed { start_week, reason } => format!(
            "{} batch starting at week {} failed: {}",
            "✗".red(),
            start_week,
            reason
        ),
        ProgressEvent::RegenerationStarted {
            index,
            total,
            week_number,
        } => format!(
            "{} regenerating week {} ({}/{})",
            "↻".yellow(),
            week_number,
            index,
            total
        ),
    }
}

/// Map errors to a string for CLI output, including the context chain.
pub fn map_error(e: &anyhow::Error) -> String {
    format!("{} {:#}", "error:".red().bold(), e)
}

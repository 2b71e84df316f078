//! Event schema for progress observability.

use serde::{Deserialize, Serialize};

/// Structured progress notification. Indices are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressEvent {
    /// Emitted before a wave's batches are launched.
    WaveStarted {
        index: usize,
        total: usize,
        weeks_completed: usize,
        total_weeks: usize,
    },
    /// Emitted after a wave's results have been merged.
    WeekCompleted { count: usize, total: usize },
    /// Emitted once, just before a failed run is abandoned.
    BatchFailed { start_week: u32, reason: String },
    /// Emitted before each regeneration target is generated.
    RegenerationStarted {
        index: usize,
        total: usize,
        week_number: u32,
    },
}

impl ProgressEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ProgressEvent::WaveStarted { .. } => "wave_started",
            ProgressEvent::WeekCompleted { .. } => "week_completed",
            ProgressEvent::BatchFailed { .. } => "batch_failed",
            ProgressEvent::RegenerationStarted { .. } => "regeneration_started",
        }
    }
}

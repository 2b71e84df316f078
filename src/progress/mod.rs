//! Progress observability primitives.
//!
//! Listeners are fire-and-forget sinks; nothing they do feeds back into the run.

pub mod bus;
pub mod event;

pub use bus::ProgressBus;
pub use event::ProgressEvent;

use tracing::{info, warn};

pub trait ProgressListener: Send + Sync {
    fn on_event(&self, event: &ProgressEvent);
}

impl<F> ProgressListener for F
where
    F: Fn(&ProgressEvent) + Send + Sync,
{
    fn on_event(&self, event: &ProgressEvent) {
        self(event)
    }
}

/// Discards every event.
pub struct NoopListener;

impl ProgressListener for NoopListener {
    fn on_event(&self, _event: &ProgressEvent) {}
}

/// Forwards events to the `tracing` subscriber.
pub struct TracingListener;

impl ProgressListener for TracingListener {
    fn on_event(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::WaveStarted {
                index,
                total,
                weeks_completed,
                total_weeks,
            } => info!(
                wave = index,
                total_waves = total,
                weeks_completed,
                total_weeks,
                "Wave started"
            ),
            ProgressEvent::WeekCompleted { count, total } => {
                info!(weeks_completed = count, total_weeks = total, "Weeks completed")
            }
            ProgressEvent::BatchFailed { start_week, reason } => {
                warn!(start_week, reason = %reason, "Batch failed")
            }
            ProgressEvent::RegenerationStarted {
                index,
                total,
                week_number,
            } => info!(index, total, week_number, "Regenerating week"),
        }
    }
}

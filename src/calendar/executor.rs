//! Wave executor: runs a wave plan against a batch generator.
//! Owns wave-by-wave execution, ordering and progress emission; prompt and
//! provider behavior stay in their domains.

use crate::calendar::batch::WeekBatchGenerator;
use crate::calendar::plan::WavePlan;
use crate::error::PlannerError;
use crate::progress::{ProgressEvent, ProgressListener};
use crate::types::WeeklyCalendar;
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{error, info};

/// Executes waves strictly in sequence; batches within a wave run concurrently.
pub struct WaveExecutor<'a> {
    listener: &'a dyn ProgressListener,
}

impl<'a> WaveExecutor<'a> {
    pub fn new(listener: &'a dyn ProgressListener) -> Self {
        Self { listener }
    }

    /// Run every wave of `plan`. Returns the weeks in ascending order, or the
    /// first batch failure; weeks from earlier waves are discarded on failure.
    pub async fn execute<G: WeekBatchGenerator>(
        &self,
        generator: &G,
        plan: &WavePlan,
    ) -> Result<Vec<WeeklyCalendar>, PlannerError> {
        plan.validate()?;
        let total_weeks = plan.total_weeks as usize;
        let total_waves = plan.total_waves();
        let mut completed: Vec<WeeklyCalendar> = Vec::with_capacity(total_weeks);

        for (wave_index, wave) in plan.waves.iter().enumerate() {
            self.listener.on_event(&ProgressEvent::WaveStarted {
                index: wave_index + 1,
                total: total_waves,
                weeks_completed: completed.len(),
                total_weeks,
            });
            info!(
                wave = wave_index + 1,
                total_waves,
                batches = wave.len(),
                weeks_completed = completed.len(),
                "Starting wave"
            );

            // Siblings share the snapshot of strictly earlier waves.
            let snapshot: &[WeeklyCalendar] = &completed;
            let mut futures = FuturesUnordered::new();
            for batch in wave {
                futures.push(async move {
                    let outcome = generator.generate_batch(batch, snapshot).await;
                    (batch, outcome)
                });
            }

            let mut wave_weeks = Vec::new();
            let mut failure = None;
            while let Some((batch, outcome)) = futures.next().await {
                match outcome {
                    Ok(weeks) => wave_weeks.extend(weeks),
                    Err(err) => {
                        failure = Some((*batch, err));
                        break;
                    }
                }
            }
            drop(futures);

            if let Some((batch, err)) = failure {
                let reason = err.to_string();
                error!(
                    start_week = batch.start_week,
                    count = batch.count,
                    error = %reason,
                    "Batch failed, aborting generation"
                );
                self.listener.on_event(&ProgressEvent::BatchFailed {
                    start_week: batch.start_week,
                    reason: reason.clone(),
                });
                return Err(PlannerError::BatchFailed {
                    start_week: batch.start_week,
                    count: batch.count,
                    reason,
                });
            }

            wave_weeks.sort_by_key(|week| week.week_number);
            completed.extend(wave_weeks);
            self.listener.on_event(&ProgressEvent::WeekCompleted {
                count: completed.len(),
                total: total_weeks,
            });
        }

        info!(weeks = completed.len(), total_weeks, "All waves completed");
        Ok(completed)
    }
}

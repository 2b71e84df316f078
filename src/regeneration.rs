//! Targeted week regeneration
//!
//! Replaces the content of selected weeks in an existing calendar. Targets are
//! generated one at a time against the calendar as it stood before the run, and
//! spliced in by week number only after every target succeeded, so a failure
//! leaves the calendar untouched. The set of week numbers never changes.

use crate::calendar::batch::{BatchGenerator, WeekBatchGenerator};
use crate::calendar::plan::BatchSpec;
use crate::error::PlannerError;
use crate::generation::StructuredGenerator;
use crate::progress::{ProgressEvent, ProgressListener};
use crate::types::{CalendarArtifact, SemesterInfo, WeeklyCalendar};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Outcome of a regeneration run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegenerationReport {
    /// Weeks whose content was replaced.
    pub regenerated: Vec<u32>,
    /// Targets generated but absent from the calendar, so never spliced in.
    pub missing: Vec<u32>,
}

/// Every week of `calendar` numbered strictly below `target`.
pub fn regeneration_context(calendar: &CalendarArtifact, target: u32) -> Vec<WeeklyCalendar> {
    calendar
        .weeks
        .iter()
        .filter(|week| week.week_number < target)
        .cloned()
        .collect()
}

/// Sorted, deduplicated copy of the requested targets.
pub fn normalize_targets(targets: &[u32]) -> Vec<u32> {
    let mut targets = targets.to_vec();
    targets.sort_unstable();
    targets.dedup();
    targets
}

/// Regenerate `targets` with the service-backed batch generator.
pub async fn regenerate_weeks(
    generator: &dyn StructuredGenerator,
    syllabus: &str,
    info: &SemesterInfo,
    targets: &[u32],
    calendar: &mut CalendarArtifact,
    listener: &dyn ProgressListener,
) -> Result<RegenerationReport, PlannerError> {
    let batches = BatchGenerator::new(generator, syllabus, info);
    RegenerationMerger::new(listener)
        .regenerate(&batches, targets, calendar)
        .await
}

pub struct RegenerationMerger<'a> {
    listener: &'a dyn ProgressListener,
}

impl<'a> RegenerationMerger<'a> {
    pub fn new(listener: &'a dyn ProgressListener) -> Self {
        Self { listener }
    }

    pub async fn regenerate<G: WeekBatchGenerator>(
        &self,
        generator: &G,
        targets: &[u32],
        calendar: &mut CalendarArtifact,
    ) -> Result<RegenerationReport, PlannerError> {
        let targets = normalize_targets(targets);
        if targets.is_empty() {
            return Ok(RegenerationReport::default());
        }

        let mut replacements = Vec::with_capacity(targets.len());
        for (index, &week_number) in targets.iter().enumerate() {
            self.listener.on_event(&ProgressEvent::RegenerationStarted {
                index: index + 1,
                total: targets.len(),
                week_number,
            });
            info!(week_number, index = index + 1, total = targets.len(), "Regenerating week");

            // Context comes from the calendar as it stood before this run.
            let context = regeneration_context(calendar, week_number);
            let batch = BatchSpec {
                start_week: week_number,
                count: 1,
            };
            let weeks = generator.generate_batch(&batch, &context).await?;
            replacements.extend(weeks);
        }

        Ok(splice(calendar, replacements))
    }
}

fn splice(calendar: &mut CalendarArtifact, replacements: Vec<WeeklyCalendar>) -> RegenerationReport {
    let mut report = RegenerationReport::default();
    for replacement in replacements {
        let week_number = replacement.week_number;
        match calendar
            .weeks
            .iter_mut()
            .find(|week| week.week_number == week_number)
        {
            Some(slot) => {
                *slot = replacement;
                report.regenerated.push(week_number);
            }
            None => {
                warn!(week_number, "Regeneration target not in calendar, dropping result");
                report.missing.push(week_number);
            }
        }
    }
    report
}

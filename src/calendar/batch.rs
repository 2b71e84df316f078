//! Batch generator: one generation call for a contiguous range of weeks.
//!
//! Week numbers and date labels in the answer are always replaced with the
//! locally computed [`WeekWindow`] values.

use crate::calendar::plan::BatchSpec;
use crate::calendar::window::WeekWindow;
use crate::error::PlannerError;
use crate::generation::{generate_typed, GenerationRequest, RequestKind, StructuredGenerator};
use crate::types::{SemesterInfo, WeekBatch, WeeklyCalendar};
use tracing::{debug, warn};

/// Prior weeks scanned for the continuity hint.
pub const CONTINUITY_WEEKS: usize = 3;
/// Topics passed downstream from the continuity hint.
pub const CONTINUITY_TOPICS: usize = 8;
/// Major topics listed in a batch prompt.
pub const PROMPT_TOPICS: usize = 8;

/// Produces the weeks of one batch given the weeks completed before it.
#[allow(async_fn_in_trait)]
pub trait WeekBatchGenerator: Send + Sync {
    async fn generate_batch(
        &self,
        batch: &BatchSpec,
        previous: &[WeeklyCalendar],
    ) -> Result<Vec<WeeklyCalendar>, PlannerError>;
}

/// [`WeekBatchGenerator`] backed by a [`StructuredGenerator`].
pub struct BatchGenerator<'a> {
    generator: &'a dyn StructuredGenerator,
    syllabus: &'a str,
    info: &'a SemesterInfo,
}

impl<'a> BatchGenerator<'a> {
    pub fn new(
        generator: &'a dyn StructuredGenerator,
        syllabus: &'a str,
        info: &'a SemesterInfo,
    ) -> Self {
        Self {
            generator,
            syllabus,
            info,
        }
    }

    pub fn windows(&self, batch: &BatchSpec) -> Vec<WeekWindow> {
        batch
            .week_numbers()
            .map(|week| WeekWindow::compute(self.info, week))
            .collect()
    }

    /// Build the request for `batch` without issuing it.
    pub fn request(&self, batch: &BatchSpec, previous: &[WeeklyCalendar]) -> GenerationRequest {
        let windows = self.windows(batch);
        let hint = continuity_hint(previous);
        let system = batch_prompt(self.info, batch, &windows, &hint);
        let payload = format!(
            "Generate weeks {}-{}\n\nCourse syllabus:\n{}",
            batch.start_week,
            batch.end_week(),
            self.syllabus
        );
        GenerationRequest::for_schema::<WeekBatch>(
            RequestKind::WeekBatch {
                start_week: batch.start_week,
                count: batch.count,
            },
            system,
            payload,
        )
    }
}

impl WeekBatchGenerator for BatchGenerator<'_> {
    async fn generate_batch(
        &self,
        batch: &BatchSpec,
        previous: &[WeeklyCalendar],
    ) -> Result<Vec<WeeklyCalendar>, PlannerError> {
        debug!(
            start_week = batch.start_week,
            count = batch.count,
            previous_weeks = previous.len(),
            "Generating week batch"
        );
        let request = self.request(batch, previous);
        let response: WeekBatch = generate_typed(self.generator, &request).await?;
        Ok(apply_windows(response.weeks, &self.windows(batch)))
    }
}

/// Topics from up to the last [`CONTINUITY_WEEKS`] weeks, first occurrence
/// order, trimmed to the most recent [`CONTINUITY_TOPICS`].
pub fn continuity_hint(previous: &[WeeklyCalendar]) -> Vec<String> {
    let recent = &previous[previous.len().saturating_sub(CONTINUITY_WEEKS)..];
    let mut topics: Vec<String> = Vec::new();
    for topic in recent.iter().flat_map(|week| week.topics()) {
        if !topics.iter().any(|seen| seen == topic) {
            topics.push(topic.to_string());
        }
    }
    let keep_from = topics.len().saturating_sub(CONTINUITY_TOPICS);
    topics.split_off(keep_from)
}

pub fn batch_prompt(
    info: &SemesterInfo,
    batch: &BatchSpec,
    windows: &[WeekWindow],
    hint: &[String],
) -> String {
    let topics = info
        .major_topics
        .iter()
        .take(PROMPT_TOPICS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let previous = if hint.is_empty() {
        "None".to_string()
    } else {
        hint.join(", ")
    };
    let details = windows
        .iter()
        .map(|w| {
            format!(
                "Week {} ({}): {}",
                w.week_number,
                w.label(),
                w.deadline_summary()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Generate {count} weekly SELF-STUDY calendars for weeks {start}-{end} of {total}.\n\n\
         Topics: {topics}\n\
         Previous: {previous}\n\n\
         Week Details:\n{details}\n\n\
         Rules:\n\
         - Self-study only (reading, projects, review)\n\
         - 8-10 hrs/week, Monday-Friday\n\
         - 1-2 hour blocks\n\
         - Prioritize deadlines\n\
         - Build progressively\n\n\
         Output {count} WeeklyCalendar objects.",
        count = batch.count,
        start = batch.start_week,
        end = batch.end_week(),
        total = info.total_weeks,
    )
}

/// Overwrite labels positionally; extra weeks are dropped, missing weeks stay missing.
pub fn apply_windows(mut weeks: Vec<WeeklyCalendar>, windows: &[WeekWindow]) -> Vec<WeeklyCalendar> {
    if weeks.len() > windows.len() {
        warn!(
            returned = weeks.len(),
            requested = windows.len(),
            "Service returned extra weeks, discarding"
        );
        weeks.truncate(windows.len());
    } else if weeks.len() < windows.len() {
        warn!(
            returned = weeks.len(),
            requested = windows.len(),
            "Service returned fewer weeks than requested"
        );
    }
    for (week, window) in weeks.iter_mut().zip(windows) {
        week.week_number = window.week_number;
        week.week_dates = window.label();
    }
    weeks
}

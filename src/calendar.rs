//! Calendar generation: week windows, batch calls, wave scheduling and assembly.

pub mod assemble;
pub mod batch;
pub mod executor;
pub mod plan;
pub mod window;

pub use assemble::{assemble, course_name_from_syllabus, semester_label_from_syllabus};
pub use batch::{BatchGenerator, WeekBatchGenerator};
pub use executor::WaveExecutor;
pub use plan::{BatchSpec, SchedulerConfig, WavePlan};
pub use window::WeekWindow;

use crate::error::PlannerError;
use crate::generation::StructuredGenerator;
use crate::progress::ProgressListener;
use crate::types::{SemesterInfo, WeeklyCalendar};

/// Generate every week of the semester, ordered by week number.
pub async fn generate_weeks(
    generator: &dyn StructuredGenerator,
    syllabus: &str,
    info: &SemesterInfo,
    config: SchedulerConfig,
    listener: &dyn ProgressListener,
) -> Result<Vec<WeeklyCalendar>, PlannerError> {
    let plan = WavePlan::build(info.total_weeks, config)?;
    let batches = BatchGenerator::new(generator, syllabus, info);
    WaveExecutor::new(listener).execute(&batches, &plan).await
}

//! Single planning entry point: extract, schedule, assemble, quiz.
//! The CLI and other callers drive a [`PlannerSession`]; stage order is fixed.

use crate::calendar::{
    assemble, course_name_from_syllabus, generate_weeks, semester_label_from_syllabus,
    SchedulerConfig,
};
use crate::error::PlannerError;
use crate::extract::{extract_semester_info, DateWarning};
use crate::generation::StructuredGenerator;
use crate::progress::ProgressListener;
use crate::quiz::generate_quiz;
use crate::regeneration::{regenerate_weeks, RegenerationReport};
use crate::types::{CalendarArtifact, Quiz, SemesterInfo};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ExtractInfo,
    GenerateCalendar,
    GenerateQuiz,
    Done,
}

impl Stage {
    pub fn next(self, options: &PipelineOptions) -> Stage {
        match self {
            Stage::ExtractInfo if options.generate_calendar => Stage::GenerateCalendar,
            Stage::ExtractInfo | Stage::GenerateCalendar if options.generate_quiz => {
                Stage::GenerateQuiz
            }
            _ => Stage::Done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub scheduler: SchedulerConfig,
    pub generate_calendar: bool,
    pub generate_quiz: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            scheduler: SchedulerConfig::default(),
            generate_calendar: true,
            generate_quiz: false,
        }
    }
}

/// Caller-owned planning state, threaded through every stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerSession {
    pub syllabus: String,
    pub semester_info: Option<SemesterInfo>,
    pub date_warnings: Vec<DateWarning>,
    pub calendar: Option<CalendarArtifact>,
    pub quiz: Option<Quiz>,
    pub generation_in_progress: bool,
    pub completed_stages: Vec<Stage>,
}

impl PlannerSession {
    pub fn new(syllabus: impl Into<String>) -> Self {
        Self {
            syllabus: syllabus.into(),
            ..Self::default()
        }
    }

    /// Resume from an existing calendar, e.g. one read back from an export.
    pub fn with_calendar(
        syllabus: impl Into<String>,
        info: SemesterInfo,
        calendar: CalendarArtifact,
    ) -> Self {
        Self {
            syllabus: syllabus.into(),
            semester_info: Some(info),
            calendar: Some(calendar),
            completed_stages: vec![Stage::ExtractInfo, Stage::GenerateCalendar],
            ..Self::default()
        }
    }

    pub fn has_calendar(&self) -> bool {
        self.calendar.is_some()
    }

    /// Run every stage from extraction to [`Stage::Done`].
    pub async fn run(
        &mut self,
        generator: &dyn StructuredGenerator,
        options: &PipelineOptions,
        listener: &dyn ProgressListener,
    ) -> Result<(), PlannerError> {
        let mut stage = Stage::ExtractInfo;
        while stage != Stage::Done {
            self.run_stage(stage, generator, options, listener).await?;
            stage = stage.next(options);
        }
        self.completed_stages.push(Stage::Done);
        Ok(())
    }

    pub async fn run_stage(
        &mut self,
        stage: Stage,
        generator: &dyn StructuredGenerator,
        options: &PipelineOptions,
        listener: &dyn ProgressListener,
    ) -> Result<(), PlannerError> {
        info!(stage = ?stage, "Running stage");
        match stage {
            Stage::ExtractInfo => {
                let extraction = extract_semester_info(generator, &self.syllabus).await?;
                self.semester_info = Some(extraction.info);
                self.date_warnings = extraction.warnings;
            }
            Stage::GenerateCalendar => {
                let info = self.require_info()?.clone();
                self.generation_in_progress = true;
                let outcome =
                    generate_weeks(generator, &self.syllabus, &info, options.scheduler, listener)
                        .await;
                self.generation_in_progress = false;
                let weeks = outcome?;
                self.calendar = Some(assemble(
                    course_name_from_syllabus(&self.syllabus),
                    semester_label_from_syllabus(&self.syllabus, &info),
                    weeks,
                ));
            }
            Stage::GenerateQuiz => {
                let quiz =
                    generate_quiz(generator, &self.syllabus, self.semester_info.as_ref()).await?;
                self.quiz = Some(quiz);
            }
            Stage::Done => {}
        }
        self.completed_stages.push(stage);
        Ok(())
    }

    /// Replace the content of `targets` in the session's calendar.
    pub async fn regenerate(
        &mut self,
        generator: &dyn StructuredGenerator,
        targets: &[u32],
        listener: &dyn ProgressListener,
    ) -> Result<RegenerationReport, PlannerError> {
        let info = self.require_info()?.clone();
        let Some(calendar) = self.calendar.as_mut() else {
            return Err(PlannerError::InvalidInput(
                "No calendar to regenerate; generate one first".to_string(),
            ));
        };
        self.generation_in_progress = true;
        let outcome =
            regenerate_weeks(generator, &self.syllabus, &info, targets, calendar, listener).await;
        self.generation_in_progress = false;
        outcome
    }

    fn require_info(&self) -> Result<&SemesterInfo, PlannerError> {
        self.semester_info.as_ref().ok_or_else(|| {
            PlannerError::InvalidInput("Semester info has not been extracted".to_string())
        })
    }
}

//! Core data model: semester facts, weekly calendars, the assembled artifact, quizzes.
//!
//! The `Raw*` shapes are what the generation service is asked to return; they carry
//! free-form date strings and are normalized by the extractor into [`SemesterInfo`].

use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A deadline as reported by the generation service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct RawDeadline {
    /// Deadline date, YYYY-MM-DD
    #[serde(default)]
    pub date: Option<String>,
    /// What is due, e.g. "Student Introductions due"
    #[serde(default)]
    pub description: Option<String>,
}

/// Key information about the semester, before date normalization.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RawSemesterInfo {
    /// Semester start date (YYYY-MM-DD)
    pub start_date: String,
    /// Semester end date (YYYY-MM-DD)
    pub end_date: String,
    /// Total number of weeks in the semester
    #[serde(default)]
    pub total_weeks: u32,
    /// Important deadlines with dates and descriptions
    #[serde(default)]
    pub key_deadlines: Vec<RawDeadline>,
    /// Main topics or modules covered in the course
    #[serde(default)]
    pub major_topics: Vec<String>,
}

/// A normalized deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadline {
    pub date: NaiveDate,
    pub description: String,
}

/// Normalized semester descriptor. Produced once by the extractor, then shared
/// read-only by every batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterInfo {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_weeks: u32,
    pub key_deadlines: Vec<Deadline>,
    pub major_topics: Vec<String>,
}

impl SemesterInfo {
    pub fn start_year(&self) -> i32 {
        self.start_date.year()
    }
}

/// A single study session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StudyBlock {
    /// Course name
    pub course: String,
    /// Topic to study
    pub topic: String,
    /// Time range, e.g. '6:00pm - 8:00pm'
    pub time_range: String,
    /// Additional notes or context
    #[serde(default)]
    pub notes: Option<String>,
}

/// Schedule for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DaySchedule {
    /// Day of the week, e.g. Monday
    pub day: String,
    #[serde(default)]
    pub blocks: Vec<StudyBlock>,
}

/// Complete weekly study calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WeeklyCalendar {
    /// Week number (1-based)
    pub week_number: u32,
    /// Date range for this week, e.g. 'Aug 29 - Sep 04'
    pub week_dates: String,
    #[serde(default)]
    pub schedule: Vec<DaySchedule>,
    /// Goals to accomplish this week
    #[serde(default)]
    pub weekly_goals: Vec<String>,
}

impl WeeklyCalendar {
    /// Topics in block order, duplicates included.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.schedule
            .iter()
            .flat_map(|day| day.blocks.iter())
            .map(|block| block.topic.as_str())
    }
}

/// Multiple weeks generated in one call
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WeekBatch {
    pub weeks: Vec<WeeklyCalendar>,
}

/// The assembled semester calendar. Week numbers are unique and ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarArtifact {
    pub course_name: String,
    pub semester: String,
    pub weeks: Vec<WeeklyCalendar>,
}

impl CalendarArtifact {
    pub fn week(&self, week_number: u32) -> Option<&WeeklyCalendar> {
        self.weeks.iter().find(|w| w.week_number == week_number)
    }

    pub fn week_numbers(&self) -> Vec<u32> {
        self.weeks.iter().map(|w| w.week_number).collect()
    }
}

/// Generated quiz data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Quiz {
    /// Main topic of the quiz
    pub topic: String,
    /// List of quiz questions
    pub questions: Vec<String>,
}

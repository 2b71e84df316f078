//! Export document for downstream consumers.
//!
//! Field names and nesting are fixed: `goals` (not `weekly_goals`) and `time`
//! (not `time_range`), with `notes` written as `null` when absent.

use crate::error::PlannerError;
use crate::extract::Extraction;
use crate::types::{CalendarArtifact, DaySchedule, StudyBlock, WeeklyCalendar};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub course_name: String,
    pub semester: String,
    pub weeks: Vec<ExportWeek>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportWeek {
    pub week_number: u32,
    pub week_dates: String,
    pub goals: Vec<String>,
    pub schedule: Vec<ExportDay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDay {
    pub day: String,
    pub blocks: Vec<ExportBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportBlock {
    pub topic: String,
    pub time: String,
    pub course: String,
    pub notes: Option<String>,
}

impl From<&CalendarArtifact> for ExportDocument {
    fn from(calendar: &CalendarArtifact) -> Self {
        Self {
            course_name: calendar.course_name.clone(),
            semester: calendar.semester.clone(),
            weeks: calendar.weeks.iter().map(ExportWeek::from).collect(),
        }
    }
}

impl From<&WeeklyCalendar> for ExportWeek {
    fn from(week: &WeeklyCalendar) -> Self {
        Self {
            week_number: week.week_number,
            week_dates: week.week_dates.clone(),
            goals: week.weekly_goals.clone(),
            schedule: week
                .schedule
                .iter()
                .map(|day| ExportDay {
                    day: day.day.clone(),
                    blocks: day
                        .blocks
                        .iter()
                        .map(|block| ExportBlock {
                            topic: block.topic.clone(),
                            time: block.time_range.clone(),
                            course: block.course.clone(),
                            notes: block.notes.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl From<ExportDocument> for CalendarArtifact {
    fn from(document: ExportDocument) -> Self {
        let mut weeks: Vec<WeeklyCalendar> = document
            .weeks
            .into_iter()
            .map(|week| WeeklyCalendar {
                week_number: week.week_number,
                week_dates: week.week_dates,
                weekly_goals: week.goals,
                schedule: week
                    .schedule
                    .into_iter()
                    .map(|day| DaySchedule {
                        day: day.day,
                        blocks: day
                            .blocks
                            .into_iter()
                            .map(|block| StudyBlock {
                                course: block.course,
                                topic: block.topic,
                                time_range: block.time,
                                notes: block.notes,
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        weeks.sort_by_key(|week| week.week_number);
        CalendarArtifact {
            course_name: document.course_name,
            semester: document.semester,
            weeks,
        }
    }
}

pub fn to_json(calendar: &CalendarArtifact) -> Result<String, PlannerError> {
    Ok(serde_json::to_string_pretty(&ExportDocument::from(calendar))?)
}

pub fn write_export(calendar: &CalendarArtifact, path: &Path) -> Result<(), PlannerError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_json(calendar)?)?;
    Ok(())
}

/// Read a previously exported calendar, e.g. to regenerate some of its weeks.
pub fn read_export(path: &Path) -> Result<CalendarArtifact, PlannerError> {
    let raw = fs::read_to_string(path)?;
    let document: ExportDocument = serde_json::from_str(&raw)?;
    let calendar = CalendarArtifact::from(document);
    let mut numbers = calendar.week_numbers();
    numbers.dedup();
    if numbers.len() != calendar.weeks.len() {
        return Err(PlannerError::InvalidInput(format!(
            "Exported calendar {} contains duplicate week numbers",
            path.display()
        )));
    }
    Ok(calendar)
}

/// Where the semester facts behind `calendar_path` are kept: `cal.json` -> `cal.info.json`.
pub fn info_sidecar_path(calendar_path: &Path) -> PathBuf {
    let stem = calendar_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "calendar".to_string());
    calendar_path.with_file_name(format!("{stem}.info.json"))
}

/// Persist the extraction a calendar was generated from. Same shape as
/// `extract --format json`.
pub fn write_semester_info(extraction: &Extraction, path: &Path) -> Result<(), PlannerError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(extraction)?)?;
    Ok(())
}

pub fn read_semester_info(path: &Path) -> Result<Extraction, PlannerError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

//! Calendar assembly and the course/semester labeling heuristics.

use crate::types::{CalendarArtifact, SemesterInfo, WeeklyCalendar};
use regex::Regex;
use std::sync::OnceLock;

/// Lines of the syllabus scanned for a course name.
const COURSE_NAME_LINES: usize = 10;

pub fn assemble(
    course_name: impl Into<String>,
    semester: impl Into<String>,
    weeks: Vec<WeeklyCalendar>,
) -> CalendarArtifact {
    CalendarArtifact {
        course_name: course_name.into(),
        semester: semester.into(),
        weeks,
    }
}

/// First of the leading lines mentioning `CS` or `Course`, else `"Course"`.
pub fn course_name_from_syllabus(syllabus: &str) -> String {
    syllabus
        .lines()
        .take(COURSE_NAME_LINES)
        .map(str::trim)
        .find(|line| line.contains("CS") || line.contains("Course"))
        .map(str::to_string)
        .unwrap_or_else(|| "Course".to_string())
}

fn term_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\b(Fall|Spring|Summer|Winter)\s+(\d{4})\b").expect("term regex compiles")
    })
}

/// First `<Term> <YYYY>` mention, else `"Semester <start year>"`.
pub fn semester_label_from_syllabus(syllabus: &str, info: &SemesterInfo) -> String {
    term_pattern()
        .captures(syllabus)
        .map(|caps| format!("{} {}", &caps[1], &caps[2]))
        .unwrap_or_else(|| format!("Semester {}", info.start_year()))
}

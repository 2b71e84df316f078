//! Semester info extraction: one generation call, then date normalization.
//!
//! Unparseable dates degrade to the sentinel and are reported as
//! [`DateWarning`]s; only a failure of the generation call itself is fatal.

use crate::dates::{parse_date, sentinel_date};
use crate::error::PlannerError;
use crate::generation::{generate_typed, GenerationRequest, RequestKind, StructuredGenerator};
use crate::types::{Deadline, RawSemesterInfo, SemesterInfo};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Upper bound on scheduled weeks; larger counts are clamped with a warning.
pub const MAX_TOTAL_WEEKS: u32 = 104;

pub const EXTRACTION_SYSTEM_PROMPT: &str = r#"You are analyzing a course syllabus to extract key information.

Extract the following:
1. Semester start and end dates
2. Total number of weeks (typically 15-16 for a semester)
3. All major deadlines (assignments, exams, presentations, projects)
4. Main topics or modules covered

CRITICAL DATE FORMAT RULES:
- ALL dates MUST be in YYYY-MM-DD format (e.g., "2025-08-29")
- For deadlines, the 'date' field MUST be YYYY-MM-DD format
- Convert any dates you find (like "Fri Aug 29, 2025") to YYYY-MM-DD format

Guidelines:
- Parse dates carefully from the syllabus
- For deadlines, extract both the date and what's due, e.g.
  {"date": "2025-08-29", "description": "Student Introductions due"}
- Identify the major topics/themes of the course"#;

/// A date field that could not be parsed and was replaced by the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWarning {
    pub field: String,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub info: SemesterInfo,
    pub warnings: Vec<DateWarning>,
}

/// Extract and normalize the semester descriptor from `syllabus`.
pub async fn extract_semester_info(
    generator: &dyn StructuredGenerator,
    syllabus: &str,
) -> Result<Extraction, PlannerError> {
    if syllabus.trim().is_empty() {
        return Err(PlannerError::InvalidInput(
            "Syllabus text cannot be empty".to_string(),
        ));
    }

    let request = GenerationRequest::for_schema::<RawSemesterInfo>(
        RequestKind::SemesterInfo,
        EXTRACTION_SYSTEM_PROMPT,
        syllabus,
    );
    let raw: RawSemesterInfo = generate_typed(generator, &request).await?;
    let extraction = normalize_semester_info(raw);

    info!(
        total_weeks = extraction.info.total_weeks,
        deadlines = extraction.info.key_deadlines.len(),
        date_warnings = extraction.warnings.len(),
        "Semester info extracted"
    );
    Ok(extraction)
}

/// Canonicalize every date-bearing field of a raw descriptor.
pub fn normalize_semester_info(raw: RawSemesterInfo) -> Extraction {
    let mut warnings = Vec::new();
    let mut parse = |field: String, value: Option<&str>| -> NaiveDate {
        let value = value.unwrap_or_default();
        parse_date(value).unwrap_or_else(|err| {
            warn!(field = %field, error = %err, "Could not parse date, using default");
            warnings.push(DateWarning {
                field,
                raw: value.to_string(),
            });
            sentinel_date()
        })
    };

    let start_date = parse("start_date".to_string(), Some(&raw.start_date));
    let mut end_date = parse("end_date".to_string(), Some(&raw.end_date));

    let key_deadlines: Vec<Deadline> = raw
        .key_deadlines
        .iter()
        .enumerate()
        .map(|(idx, deadline)| Deadline {
            date: parse(format!("key_deadlines[{idx}].date"), deadline.date.as_deref()),
            description: deadline
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
        })
        .collect();

    if end_date < start_date {
        warn!(
            start_date = %start_date,
            end_date = %end_date,
            "Semester end precedes start, clamping end to start"
        );
        end_date = start_date;
    }

    let total_weeks = if raw.total_weeks == 0 {
        let derived = weeks_spanned(start_date, end_date);
        warn!(derived, "Extracted total_weeks was 0, deriving from date span");
        derived
    } else {
        raw.total_weeks
    };
    let total_weeks = if total_weeks > MAX_TOTAL_WEEKS {
        warn!(
            total_weeks,
            max = MAX_TOTAL_WEEKS,
            "Extracted total_weeks is implausible, clamping"
        );
        MAX_TOTAL_WEEKS
    } else {
        total_weeks
    };

    Extraction {
        info: SemesterInfo {
            start_date,
            end_date,
            total_weeks,
            key_deadlines,
            major_topics: raw.major_topics,
        },
        warnings,
    }
}

/// Number of 7-day weeks needed to cover `[start, end]`, at least 1.
fn weeks_spanned(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days() + 1;
    u32::try_from((days + 6) / 7).unwrap_or(1).max(1)
}

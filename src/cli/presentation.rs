//! CLI presentation: text formatters for calendars, extraction results and quizzes.

use crate::dates::to_iso;
use crate::extract::Extraction;
use crate::regeneration::RegenerationReport;
use crate::types::{CalendarArtifact, Quiz, WeeklyCalendar};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// One row per week: dates, study days, blocks and the first goal.
pub fn format_calendar_summary(calendar: &CalendarArtifact) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("{} ({})", calendar.course_name, calendar.semester))
    ));
    if calendar.weeks.is_empty() {
        out.push_str("No weeks in calendar.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Week", "Dates", "Days", "Blocks", "First goal"]);
    for week in &calendar.weeks {
        let days = week.schedule.iter().filter(|d| !d.blocks.is_empty()).count();
        let blocks: usize = week.schedule.iter().map(|d| d.blocks.len()).sum();
        table.add_row(vec![
            week.week_number.to_string(),
            week.week_dates.clone(),
            days.to_string(),
            blocks.to_string(),
            week.weekly_goals.first().cloned().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

pub fn format_week_detail(week: &WeeklyCalendar) -> String {
    let mut out = format!(
        "{}\n\n",
        format_section_heading(&format!("Week {}: {}", week.week_number, week.week_dates))
    );
    if !week.weekly_goals.is_empty() {
        out.push_str("Goals:\n");
        for goal in &week.weekly_goals {
            out.push_str(&format!("  - {}\n", goal));
        }
        out.push('\n');
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Day", "Time", "Topic", "Notes"]);
    for day in &week.schedule {
        for block in &day.blocks {
            table.add_row(vec![
                day.day.clone(),
                block.time_range.clone(),
                block.topic.clone(),
                block.notes.clone().unwrap_or_default(),
            ]);
        }
    }
    out.push_str(&format!("{}\n", table));
    out
}

pub fn format_extraction_text(extraction: &Extraction) -> String {
    let info = &extraction.info;
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Semester")));
    out.push_str(&format!("  Start: {}\n", to_iso(info.start_date)));
    out.push_str(&format!("  End: {}\n", to_iso(info.end_date)));
    out.push_str(&format!("  Weeks: {}\n\n", info.total_weeks));

    out.push_str(&format!("{}\n\n", format_section_heading("Deadlines")));
    if info.key_deadlines.is_empty() {
        out.push_str("  None found\n");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Date", "Description"]);
        for deadline in &info.key_deadlines {
            table.add_row(vec![to_iso(deadline.date), deadline.description.clone()]);
        }
        out.push_str(&format!("{}\n", table));
    }

    out.push_str(&format!("\n{}\n\n", format_section_heading("Topics")));
    for topic in &info.major_topics {
        out.push_str(&format!("  - {}\n", topic));
    }

    if !extraction.warnings.is_empty() {
        out.push_str(&format!("\n{}\n", "Unparseable dates (defaulted):".yellow()));
        for warning in &extraction.warnings {
            out.push_str(&format!("  - {}: {:?}\n", warning.field, warning.raw));
        }
    }
    out
}

pub fn format_quiz_text(quiz: &Quiz) -> String {
    let mut out = format!("{}\n\n", format_section_heading(&format!("Quiz: {}", quiz.topic)));
    for (i, question) in quiz.questions.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, question));
    }
    out
}

pub fn format_regeneration_report(report: &RegenerationReport, path: &Path) -> String {
    let weeks = |numbers: &[u32]| {
        numbers
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let mut out = format!(
        "Regenerated weeks [{}] in {}",
        weeks(&report.regenerated),
        path.display()
    );
    if !report.missing.is_empty() {
        out.push_str(&format!(
            "\n{} weeks not in calendar, skipped: [{}]",
            "warning:".yellow(),
            weeks(&report.missing)
        ));
    }
    out
}

pub fn format_init_summary(path: &Path) -> String {
    format!("Wrote default configuration to {}", path.display())
}

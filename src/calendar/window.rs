//! Week windows: the locally computed week number, date span and deadlines.

use crate::types::{Deadline, SemesterInfo};
use chrono::{Duration, NaiveDate};

/// Display format for one end of a week label, e.g. `Aug 29`.
pub const LABEL_DAY_FORMAT: &str = "%b %d";

/// Authoritative facts about one week. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekWindow {
    pub week_number: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub deadlines: Vec<Deadline>,
}

impl WeekWindow {
    /// Window for 1-based `week_number`, counted in 7-day steps from the semester start.
    pub fn compute(info: &SemesterInfo, week_number: u32) -> Self {
        let offset = i64::from(week_number.saturating_sub(1)) * 7;
        // Saturates at the end of chrono's date range instead of panicking.
        let start = info
            .start_date
            .checked_add_signed(Duration::days(offset))
            .unwrap_or(NaiveDate::MAX);
        let end = start
            .checked_add_signed(Duration::days(6))
            .unwrap_or(NaiveDate::MAX);
        let deadlines = info
            .key_deadlines
            .iter()
            .filter(|deadline| contains(start, end, deadline.date))
            .cloned()
            .collect();
        Self {
            week_number,
            start,
            end,
            deadlines,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        contains(self.start, self.end, date)
    }

    /// `"Aug 29 - Sep 04"`
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format(LABEL_DAY_FORMAT),
            self.end.format(LABEL_DAY_FORMAT)
        )
    }

    /// Deadline lines for a batch prompt.
    pub fn deadline_summary(&self) -> String {
        if self.deadlines.is_empty() {
            return "No major deadlines this week".to_string();
        }
        self.deadlines
            .iter()
            .map(|d| format!("- {}: {}", d.description, d.date.format("%Y-%m-%d")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// Dates carry no time of day, so an inclusive day comparison covers
// [start 00:00, end 23:59:59].
fn contains(start: NaiveDate, end: NaiveDate, date: NaiveDate) -> bool {
    start <= date && date <= end
}

//! Date normalization.
//!
//! Dates coming back from the generation service are free-form. They are re-parsed
//! through an ordered list of formats and re-emitted as ISO `YYYY-MM-DD`. A string no
//! format accepts maps to [`sentinel_date`]; callers decide whether to record that.

use crate::error::DateError;
use chrono::{NaiveDate, Weekday};
use tracing::warn;

/// Accepted input formats, tried in order. Day-first slashes come last so that
/// `08/09/2025` reads as August 9.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%m/%d/%Y",
    "%d/%m/%Y",
];

/// Formats for the rest of a weekday-prefixed date such as `Fri Aug 29, 2025`.
/// The weekday is dropped unchecked; a wrong weekday does not reject the date.
pub const WEEKDAY_PREFIXED_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y"];

/// Canonical output format.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Substituted for any date that cannot be parsed: 2025-01-01.
pub fn sentinel_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Parse a date using the first matching format.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateError> {
    let trimmed = raw.trim();
    parse_with(trimmed, DATE_FORMATS)
        .or_else(|| {
            strip_weekday(trimmed).and_then(|rest| parse_with(rest, WEEKDAY_PREFIXED_FORMATS))
        })
        .ok_or_else(|| DateError::Unparseable(raw.to_string()))
}

fn parse_with(text: &str, formats: &[&str]) -> Option<NaiveDate> {
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// `"Mon, Aug 29, 2025"` -> `"Aug 29, 2025"`; `None` unless the first token names a weekday.
fn strip_weekday(text: &str) -> Option<&str> {
    let (first, rest) = text.split_once(char::is_whitespace)?;
    first.trim_end_matches(',').parse::<Weekday>().ok()?;
    Some(rest.trim_start())
}

/// Parse a date, falling back to [`sentinel_date`] with a warning.
pub fn parse_date_or_sentinel(raw: &str) -> NaiveDate {
    parse_date(raw).unwrap_or_else(|err| {
        warn!(raw = raw, error = %err, "Could not parse date, using default");
        sentinel_date()
    })
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Normalize any accepted representation to `YYYY-MM-DD`; never fails.
pub fn normalize_date(raw: &str) -> String {
    to_iso(parse_date_or_sentinel(raw))
}

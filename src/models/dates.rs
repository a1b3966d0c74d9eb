//! Lenient calendar-date parsing for the free-form date strings the dashboard stores.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DAY_FORMATS: [&str; 4] = ["%Y-%m-%d", "%B %d, %Y", "%m/%d/%Y", "%d %B %Y"];

// Month precision; parsed with a leading "1 " so they anchor to the first of the month.
const MONTH_FORMATS: [&str; 2] = ["%d %Y-%m", "%d %B %Y"];

/// Parse a date string into a calendar date.
///
/// Accepts RFC 3339 timestamps, `2024-06-01`, `March 12, 2025`, `Mar 12, 2025`,
/// `06/01/2024`, `12 March 2025`, `2024-06` and `February 2025`.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }

    DAY_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
        .or_else(|| {
            let anchored = format!("1 {}", s);
            MONTH_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(&anchored, f).ok())
        })
}

//! Date extraction for journal lines and entry names

use chrono::{Datelike, NaiveDate};

/// Canonical date layout used for entry names, annotation lines and output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_LEN: usize = 10;

/// ISO-8601 (year, week) pair a date belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

/// Parse a token strictly as `YYYY-MM-DD`.
///
/// The whole token must match: four-digit year, two-digit month and day, and a
/// real calendar date. Anything else yields `None`.
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    let bytes = token.as_bytes();
    if bytes.len() != DATE_LEN {
        return None;
    }

    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }

    NaiveDate::parse_from_str(token, DATE_FORMAT).ok()
}

/// Extract the date a line begins with.
///
/// Only the text before the first space is considered, so `"2025-01-17 - note"`
/// matches while `"2025-01-17: note"` does not.
pub fn extract_date(line: &str) -> Option<NaiveDate> {
    let token = line.split_once(' ').map_or(line, |(before, _)| before);
    parse_date(token)
}

/// Format a date in its canonical `YYYY-MM-DD` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// ISO week of a date. Early January may belong to the previous ISO year and
/// late December to the next one.
pub fn week_key(date: NaiveDate) -> WeekKey {
    let iso = date.iso_week();
    WeekKey {
        year: iso.year(),
        week: iso.week(),
    }
}

/// ISO week number (1-53) of the date a line begins with.
pub fn week_number(line: &str) -> Option<u32> {
    extract_date(line).map(|d| week_key(d).week)
}

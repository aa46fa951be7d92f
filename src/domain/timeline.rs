//! Chronological rendering and ISO week grouping

use crate::domain::date::{format_date, week_number};
use crate::domain::registry::{JournalRegistry, MESSAGE_SEPARATOR};

/// Render every registry entry as `date` or `date - message`, sorted ascending.
///
/// Dates are fixed-width and zero-padded, so string order is chronological order.
pub fn format_lines(registry: &JournalRegistry) -> Vec<String> {
    let mut lines: Vec<String> = registry
        .iter()
        .map(|(date, message)| {
            if message.is_empty() {
                format_date(date)
            } else {
                format!("{}{}{}", format_date(date), MESSAGE_SEPARATOR, message)
            }
        })
        .collect();
    lines.sort();
    lines
}

/// Insert a blank line before the first line of every ISO week group.
///
/// The first group is preceded by a blank line as well. Lines that do not begin
/// with a date are dropped and do not affect week tracking.
pub fn pad_by_week<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut padded = Vec::new();
    // 0 is never a valid ISO week, so the first dated line always opens a group
    let mut last = 0;

    for line in lines {
        let line = line.into();
        let Some(current) = week_number(&line) else {
            continue;
        };
        if current != last {
            padded.push(String::new());
        }
        padded.push(line);
        last = current;
    }

    padded
}

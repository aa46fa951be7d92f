//! Registry of journal dates and their optional messages

use crate::domain::date::{extract_date, format_date};
use crate::error::{Result, TimelineError};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io;

/// Separator between a date and its message in annotation and output lines.
pub const MESSAGE_SEPARATOR: &str = " - ";

/// Mapping from calendar date to a short message (empty when none was given).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalRegistry {
    entries: HashMap<NaiveDate, String>,
}

impl JournalRegistry {
    pub fn new() -> Self {
        JournalRegistry::default()
    }

    /// Seed the registry from entry dates, then overlay the annotation stream.
    ///
    /// Annotations are applied in stream order, so the last line for a date wins.
    /// A read error stops the merge and is returned as [`TimelineError::StreamRead`].
    pub fn build<D, L>(entry_dates: D, lines: L) -> Result<Self>
    where
        D: IntoIterator<Item = NaiveDate>,
        L: IntoIterator<Item = io::Result<String>>,
    {
        let mut registry = JournalRegistry::new();
        for date in entry_dates {
            registry.seed(date);
        }
        let seeded = registry.len();

        let mut annotated = 0usize;
        for line in lines {
            let line = line.map_err(TimelineError::StreamRead)?;
            if registry.annotate(&line) {
                annotated += 1;
            } else {
                tracing::trace!(line = %line, "ignoring undated annotation line");
            }
        }

        tracing::debug!(
            seeded,
            annotated,
            total = registry.len(),
            "built journal registry"
        );
        Ok(registry)
    }

    /// Insert a date with an empty message unless it is already present.
    pub fn seed(&mut self, date: NaiveDate) {
        self.entries.entry(date).or_default();
    }

    /// Apply one annotation line. Returns false when the line does not begin with a date.
    ///
    /// The message is whatever follows the date, minus one leading `" - "`.
    /// Dates without an entry file are inserted too.
    pub fn annotate(&mut self, line: &str) -> bool {
        let Some(date) = extract_date(line) else {
            return false;
        };

        let date_str = format_date(date);
        let rest = line.strip_prefix(date_str.as_str()).unwrap_or(line);
        let message = rest.strip_prefix(MESSAGE_SEPARATOR).unwrap_or(rest);

        self.entries.insert(date, message.to_string());
        true
    }

    /// Message stored for a date, if the date is known.
    pub fn message(&self, date: NaiveDate) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.entries.iter().map(|(d, m)| (*d, m.as_str()))
    }
}

//! Build timeline use case

use crate::domain::{format_lines, pad_by_week, JournalRegistry};
use crate::error::Result;
use crate::infrastructure::EntrySource;
use std::io::{self, BufRead};

/// Service merging entry dates and annotations into a week-grouped timeline
pub struct TimelineService<S: EntrySource> {
    source: S,
}

impl<S: EntrySource> TimelineService<S> {
    /// Create a new timeline service
    pub fn new(source: S) -> Self {
        TimelineService { source }
    }

    /// Produce the padded timeline.
    ///
    /// Pass `None` to skip annotations entirely.
    pub fn execute<R: BufRead>(&self, annotations: Option<R>) -> Result<Vec<String>> {
        self.execute_with(|| Ok(annotations))
    }

    /// Like [`TimelineService::execute`], opening the annotation stream only
    /// after the entry dates were enumerated successfully.
    pub fn execute_with<R, F>(&self, open_annotations: F) -> Result<Vec<String>>
    where
        R: BufRead,
        F: FnOnce() -> Result<Option<R>>,
    {
        // 1. Enumerate entries (fatal on failure, nothing read yet)
        let entry_dates = self.source.entry_dates()?;

        // 2. Merge annotations
        let registry = match open_annotations()? {
            Some(reader) => JournalRegistry::build(entry_dates, annotation_lines(reader))?,
            None => {
                JournalRegistry::build(entry_dates, std::iter::empty::<io::Result<String>>())?
            }
        };

        // 3. Sort, then 4. pad by ISO week
        Ok(pad_by_week(format_lines(&registry)))
    }
}

/// Split a stream into lines without requiring UTF-8.
///
/// A trailing `\r` is dropped and invalid bytes become U+FFFD, so only real read
/// failures surface as errors.
pub fn annotation_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').map(|line| {
        let mut bytes = line?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    })
}

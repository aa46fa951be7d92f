//! jtimeline - Week-grouped timeline of journal entries
//!
//! Collects the dates of `<YYYY-MM-DD>.md` journal entries, overlays short
//! messages from annotation lines, and prints them chronologically with a
//! blank line before each ISO week.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TimelineError;

//! Domain layer - Date parsing, registry merge and timeline shaping

pub mod date;
pub mod registry;
pub mod timeline;

pub use date::{extract_date, format_date, parse_date, week_key, week_number, WeekKey};
pub use registry::JournalRegistry;
pub use timeline::{format_lines, pad_by_week};

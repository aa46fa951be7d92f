//! Infrastructure layer - External I/O and configuration

pub mod config;
pub mod logging;
pub mod repository;

pub use config::{Config, ConfigOverrides, ResolvedConfig};
pub use repository::{EntrySource, FileSystemRepository};

//! Error types for jtimeline

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jtimeline
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("failed to list journal entries in {}: {source}", .path.display())]
    SourceEnumeration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading annotations: {0}")]
    StreamRead(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl TimelineError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TimelineError::SourceEnumeration { .. } => 2,
            TimelineError::StreamRead(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TimelineError::SourceEnumeration { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that {} exists and is a readable directory\n\
                    • Pass the journal directory explicitly: jtimeline <JOURNAL_DIR>\n\
                    • Set JTIMELINE_DIR environment variable to your journal path",
                    self,
                    path.display()
                )
            }
            TimelineError::StreamRead(_) => {
                format!(
                    "{}\n\n\
                    Annotation lines must be UTF-8 text, e.g.:\n\
                    2025-01-17 - shipped the release",
                    self
                )
            }
            TimelineError::Config(msg) if msg.contains("No journal directory") => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • jtimeline ~/journal\n\
                    • export JTIMELINE_DIR=~/journal\n\
                    • Add journal_dir = \"...\" to the file passed with --config",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TimelineError
pub type Result<T> = std::result::Result<T, TimelineError>;

//! Configuration management

use crate::error::{Result, TimelineError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the journal directory
pub const DIR_ENV: &str = "JTIMELINE_DIR";
/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "JTIMELINE_CONFIG";

pub const DEFAULT_EXTENSION: &str = "md";

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub journal_dir: Option<PathBuf>,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub recursive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_dir: None,
            extension: default_extension(),
            recursive: false,
        }
    }
}

/// Values given on the command line; they take precedence over everything else
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub journal_dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub recursive: bool,
    pub config_file: Option<PathBuf>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub journal_dir: PathBuf,
    pub extension: String,
    pub recursive: bool,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            TimelineError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Resolve settings from process environment, an optional config file and CLI values
    pub fn resolve(overrides: ConfigOverrides) -> Result<ResolvedConfig> {
        Self::resolve_with(overrides, |key| std::env::var_os(key))
    }

    /// Same as [`Config::resolve`] with an injectable environment lookup
    pub fn resolve_with<F>(overrides: ConfigOverrides, env: F) -> Result<ResolvedConfig>
    where
        F: Fn(&str) -> Option<std::ffi::OsString>,
    {
        let config_file = overrides
            .config_file
            .or_else(|| env(CONFIG_ENV).map(PathBuf::from));

        let file_config = match config_file {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                Self::load_from_file(&path)?
            }
            None => Config::default(),
        };

        let journal_dir = overrides
            .journal_dir
            .or_else(|| env(DIR_ENV).map(PathBuf::from))
            .or(file_config.journal_dir)
            .ok_or_else(|| {
                TimelineError::Config(format!(
                    "No journal directory configured (pass JOURNAL_DIR, set {} or use --config)",
                    DIR_ENV
                ))
            })?;

        let extension = overrides.extension.unwrap_or(file_config.extension);
        validate_extension(&extension)?;

        Ok(ResolvedConfig {
            journal_dir,
            extension,
            recursive: overrides.recursive || file_config.recursive,
        })
    }
}

fn validate_extension(extension: &str) -> Result<()> {
    if extension.is_empty() || extension.contains('.') || extension.contains('/') {
        return Err(TimelineError::Config(format!(
            "Invalid extension: '{}'. Use a bare extension such as 'md'",
            extension
        )));
    }
    Ok(())
}

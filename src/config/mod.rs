//! Configuration management for the jot application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. The resulting `Config` is built once at
//! startup and passed explicitly to every operation.
//!
//! # Environment Variables
//!
//! - `JOT_DIR`: Path to the directory of daily notes (defaults to ~/Documents/journal)
//! - `JOT_HEADER`: Header of the section entries are written under (defaults to "## Today")
//! - `HOME`: Used for expanding the default journal directory path

use crate::constants::{
    DEFAULT_JOURNAL_SUBDIR, DEFAULT_SECTION_HEADER, ENV_VAR_HOME, ENV_VAR_JOT_DIR,
    ENV_VAR_JOT_HEADER, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the jot application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use jot::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     journal_dir: PathBuf::from("/path/to/journal"),
///     header: "## Log".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
///
/// Loading configuration from environment variables:
/// ```no_run
/// use jot::Config;
///
/// let config = Config::load().expect("Failed to load configuration");
/// println!("Writing under {}", config.header);
/// ```
#[derive(Clone)]
pub struct Config {
    /// Directory holding one `YYYY-MM-DD.md` note per day.
    ///
    /// This is loaded from the JOT_DIR environment variable with a fallback
    /// to ~/Documents/journal if not specified.
    pub journal_dir: PathBuf,

    /// Header line of the section entries are written under, stored trimmed.
    pub header: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("journal_dir", &REDACTED_PLACEHOLDER)
            .field("header", &self.header)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_dir: PathBuf::from(""),
            header: DEFAULT_SECTION_HEADER.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The journal directory path is expanded with `shellexpand` to handle `~`
    /// and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The journal directory path expansion fails
    /// - The resulting configuration fails validation
    pub fn load() -> AppResult<Self> {
        let journal_dir_str = env::var(ENV_VAR_JOT_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_JOURNAL_SUBDIR)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&journal_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let header = env::var(ENV_VAR_JOT_HEADER)
            .map(|header| header.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_SECTION_HEADER.to_string());

        let config = Config {
            journal_dir: PathBuf::from(expanded_path.into_owned()),
            header,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Journal directory path is empty"
    /// - "Journal directory must be an absolute path"
    /// - "Section header is empty"
    /// - "Section header must be a single line"
    pub fn validate(&self) -> AppResult<()> {
        if self.journal_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Journal directory path is empty".to_string(),
            ));
        }

        if !self.journal_dir.is_absolute() {
            return Err(AppError::Config(
                "Journal directory must be an absolute path".to_string(),
            ));
        }

        if self.header.trim().is_empty() {
            return Err(AppError::Config("Section header is empty".to_string()));
        }

        if self.header.contains(&['\n', '\r'][..]) {
            return Err(AppError::Config(
                "Section header must be a single line".to_string(),
            ));
        }

        Ok(())
    }
}

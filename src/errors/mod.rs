//! Error handling utilities for the jot application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use crate::constants::{APP_NAME, ENV_VAR_JOT_DIR, ENV_VAR_JOT_HEADER};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents all possible errors that can occur in the jot application.
///
/// Every variant is terminal for an invocation: it is reported once at the
/// application boundary and the process exits with status 1.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
///
/// # Examples
///
/// Creating an argument error:
/// ```
/// use jot::errors::AppError;
///
/// let error = AppError::InvalidArguments("Message cannot be empty".to_string());
/// assert_eq!(format!("{}", error), "Invalid arguments: Message cannot be empty");
/// assert!(error.hint().is_some());
/// ```
///
/// Converting from an IO error:
/// ```
/// use jot::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The journal directory is missing, is not a directory, or cannot be written.
    #[error("Journal directory not found or not writable: {}", .path.display())]
    DirectoryNotFound {
        /// The configured journal directory
        path: PathBuf,
    },

    /// The note exists but does not contain the configured section header.
    #[error("Header '{header}' not found in {}", .path.display())]
    HeaderNotFound {
        /// The header that was searched for
        header: String,
        /// The note that was searched
        path: PathBuf,
    },

    /// Persisting a note failed.
    #[error("Failed to write {}: {source}", .path.display())]
    FileWrite {
        /// The note being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Malformed command-line invocation.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A time override that is not `H:mm` or `HH:mm` within range.
    #[error("Invalid time format: '{0}'. Expected HH:mm with hour 0-23 and minute 0-59")]
    InvalidTimeFormat(String),

    /// Undo was requested but there is nothing to remove.
    #[error("Nothing to undo: {0}")]
    NoEntriesToUndo(String),

    /// Input/output errors from reading notes or inspecting the filesystem.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Returns a remediation hint to print after the error message, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            AppError::HeaderNotFound { header, .. } => Some(format!(
                "Add a '{}' line to the note, or set {} to a header it already contains.",
                header, ENV_VAR_JOT_HEADER
            )),
            AppError::InvalidArguments(_) => {
                Some(format!("Run '{} --help' to see usage.", APP_NAME))
            }
            AppError::DirectoryNotFound { .. } => Some(format!(
                "Create the directory or point {} at an existing one.",
                ENV_VAR_JOT_DIR
            )),
            _ => None,
        }
    }
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use jot::errors::{AppResult, AppError};
///
/// fn might_fail(empty: bool) -> AppResult<String> {
///     if empty {
///         return Err(AppError::NoEntriesToUndo("no entries".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
///
/// assert!(might_fail(true).is_err());
/// ```
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_io_error() {
        // Create an IO error
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

        // Convert to AppError
        let app_error: AppError = io_error.into();

        // Verify conversion
        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let error = AppError::Config("Journal directory path is empty".to_string());
        assert_eq!(
            format!("{}", error),
            "Configuration error: Journal directory path is empty"
        );

        let error = AppError::DirectoryNotFound {
            path: PathBuf::from("/missing/journal"),
        };
        assert!(format!("{}", error).contains("/missing/journal"));
        assert!(format!("{}", error).contains("not found or not writable"));

        let error = AppError::HeaderNotFound {
            header: "## Today".to_string(),
            path: PathBuf::from("/journal/2024-01-01.md"),
        };
        assert_eq!(
            format!("{}", error),
            "Header '## Today' not found in /journal/2024-01-01.md"
        );

        let error = AppError::FileWrite {
            path: PathBuf::from("/journal/2024-01-01.md"),
            source: io::Error::other("no space left on device"),
        };
        assert!(format!("{}", error).contains("Failed to write /journal/2024-01-01.md"));
        assert!(format!("{}", error).contains("no space left on device"));

        let error = AppError::InvalidTimeFormat("25:30".to_string());
        assert!(format!("{}", error).contains("'25:30'"));

        let error = AppError::NoEntriesToUndo("no note for 2024-01-01".to_string());
        assert_eq!(
            format!("{}", error),
            "Nothing to undo: no note for 2024-01-01"
        );
    }

    #[test]
    fn test_hints_only_for_remediable_errors() {
        let error = AppError::HeaderNotFound {
            header: "## Log".to_string(),
            path: PathBuf::from("/journal/2024-01-01.md"),
        };
        let hint = error.hint().unwrap();
        assert!(hint.contains("## Log"));
        assert!(hint.contains(ENV_VAR_JOT_HEADER));

        let error = AppError::InvalidArguments("Unknown option: --frobnicate".to_string());
        assert!(error.hint().unwrap().contains("--help"));

        assert!(AppError::InvalidTimeFormat("abc".to_string())
            .hint()
            .is_none());
        assert!(AppError::NoEntriesToUndo("empty".to_string())
            .hint()
            .is_none());
        assert!(AppError::Io(io::Error::other("boom")).hint().is_none());
    }

    #[test]
    fn test_file_write_error_keeps_source() {
        use std::error::Error as _;

        let error = AppError::FileWrite {
            path: PathBuf::from("/journal/2024-01-01.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let source = error.source().unwrap();
        assert_eq!(source.to_string(), "permission denied");
    }

    #[test]
    fn test_error_display_consistency() {
        let errors = vec![
            AppError::Config("test".to_string()),
            AppError::InvalidArguments("test".to_string()),
            AppError::InvalidTimeFormat("test".to_string()),
            AppError::NoEntriesToUndo("test".to_string()),
            AppError::Io(io::Error::other("test")),
        ];

        for error in errors {
            let display = format!("{}", error);
            assert!(
                !display.ends_with('\n'),
                "Error display should not end with newline"
            );
            assert!(
                !display.starts_with(' '),
                "Error display should not start with whitespace"
            );
        }
    }
}

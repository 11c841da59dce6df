//! Constants used throughout the application.
//!
//! This module contains all constants used in jot, organized into logical
//! groups. Having constants centralized makes them easier to find, modify,
//! and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "jot";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Append timestamped entries to a section of today's markdown note";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the journal directory.
pub const ENV_VAR_JOT_DIR: &str = "JOT_DIR";
/// Environment variable for specifying the section header entries live under.
pub const ENV_VAR_JOT_HEADER: &str = "JOT_HEADER";
/// Environment variable selecting the log output format.
pub const ENV_VAR_JOT_LOG_FORMAT: &str = "JOT_LOG_FORMAT";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for daily notes within the user's home directory.
pub const DEFAULT_JOURNAL_SUBDIR: &str = "Documents/journal";
/// Default header of the section that holds entries.
pub const DEFAULT_SECTION_HEADER: &str = "## Today";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Logging
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used when `--verbose` is given.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "jot";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

// File System Parameters
/// File extension for daily notes.
pub const JOURNAL_FILE_EXTENSION: &str = "md";
/// Default POSIX permissions for newly created notes (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Document Format
/// Date format used for note filenames and titles (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Prefix marking a second-level header, which ends a section.
pub const SECTION_BOUNDARY_PREFIX: &str = "## ";

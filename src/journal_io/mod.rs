//! Journal I/O operations and file management.
//!
//! This module contains all the filesystem operations for daily notes:
//! resolving the note path for a date, checking that the journal directory is
//! usable, reading a note, and writing it back in one piece.

use crate::constants::{DATE_FORMAT_ISO, JOURNAL_FILE_EXTENSION};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::fs;
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Checks that the journal directory exists, is a directory, and is writable.
///
/// Unlike the note files inside it, the directory is never created here: a
/// missing directory usually means a mistyped `JOT_DIR`.
///
/// # Errors
///
/// Returns `AppError::DirectoryNotFound` if any of the checks fail.
pub fn ensure_journal_directory_writable(journal_dir: &Path) -> AppResult<()> {
    let not_found = || AppError::DirectoryNotFound {
        path: journal_dir.to_path_buf(),
    };

    let metadata = fs::metadata(journal_dir).map_err(|e| {
        debug!("Cannot stat journal directory: {}", e);
        not_found()
    })?;
    if !metadata.is_dir() {
        return Err(not_found());
    }

    // Probe with an anonymous file; it is unlinked when dropped.
    tempfile::tempfile_in(journal_dir).map_err(|e| {
        debug!("Journal directory is not writable: {}", e);
        not_found()
    })?;

    Ok(())
}

/// Generates the file path for the note on a specific date.
///
/// The filename format is `YYYY-MM-DD.md`.
///
/// # Examples
///
/// ```
/// use jot::journal_io::entry_path_for_date;
/// use chrono::NaiveDate;
/// use std::path::Path;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let path = entry_path_for_date(Path::new("/journal"), date);
/// assert_eq!(path, Path::new("/journal/2024-01-15.md"));
/// ```
pub fn entry_path_for_date(journal_dir: &Path, date: NaiveDate) -> PathBuf {
    let filename = format!(
        "{}.{}",
        date.format(DATE_FORMAT_ISO),
        JOURNAL_FILE_EXTENSION
    );
    journal_dir.join(filename)
}

/// Reads a note, returning `None` when there is no note yet.
///
/// A file that is missing or holds only whitespace both count as "no note".
///
/// # Errors
///
/// Returns `AppError::Io` if the file exists but cannot be read.
pub fn read_note(path: &Path) -> AppResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) if content.trim().is_empty() => {
            debug!("Note {:?} is blank", path);
            Ok(None)
        }
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Note {:?} does not exist", path);
            Ok(None)
        }
        Err(e) => Err(AppError::Io(e)),
    }
}

/// Replaces the note at `path` with `content`.
///
/// The content is written to a temporary file in the same directory and then
/// renamed over the note, so a failed write leaves the old note intact. An
/// existing note keeps its permissions; a new one is created owner-only.
///
/// When the note is a symlink, the file it points to is replaced and the link
/// itself is left alone.
///
/// # Errors
///
/// Returns `AppError::FileWrite` if any step of the write fails.
pub fn write_note(path: &Path, content: &str) -> AppResult<()> {
    let write_error = |source: io::Error| AppError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_write_target(path).map_err(write_error)?;
    let path = target.as_path();

    let dir = path.parent().ok_or_else(|| {
        write_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "note path has no parent directory",
        ))
    })?;

    let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
    temp.write_all(content.as_bytes()).map_err(write_error)?;
    temp.as_file().sync_all().map_err(write_error)?;

    match fs::metadata(path) {
        Ok(existing) => {
            fs::set_permissions(temp.path(), existing.permissions()).map_err(write_error)?;
        }
        Err(_) => {
            #[cfg(unix)]
            {
                use crate::constants::DEFAULT_FILE_PERMISSIONS;
                fs::set_permissions(
                    temp.path(),
                    fs::Permissions::from_mode(DEFAULT_FILE_PERMISSIONS),
                )
                .map_err(write_error)?;
            }
        }
    }

    temp.persist(path).map_err(|e| write_error(e.error))?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

fn resolve_write_target(path: &Path) -> io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            let target = fs::canonicalize(path)?;
            debug!("Note {:?} is a symlink to {:?}", path, target);
            Ok(target)
        }
        _ => Ok(path.to_path_buf()),
    }
}

//! Remove the most recent entry from a day's note.

use super::locate_section;
use crate::config::Config;
use crate::constants::DATE_FORMAT_ISO;
use crate::errors::{AppError, AppResult};
use crate::journal_core::{Document, Entry};
use crate::journal_io::{entry_path_for_date, read_note, write_note};
use chrono::NaiveDate;
use tracing::info;

/// Removes the chronologically last entry from the note for `date`.
///
/// Only that one line is deleted; the rest of the note is written back as it
/// was.
///
/// # Errors
///
/// Returns an error if:
/// - There is no note for the day, or its section has no entries
///   (`AppError::NoEntriesToUndo`, with a message for each case)
/// - The note lacks the header (`AppError::HeaderNotFound`)
/// - The note cannot be read or written
pub fn undo_last_entry(config: &Config, date: NaiveDate) -> AppResult<Entry> {
    let path = entry_path_for_date(&config.journal_dir, date);
    let content = read_note(&path)?.ok_or_else(|| {
        AppError::NoEntriesToUndo(format!(
            "no note found for {}",
            date.format(DATE_FORMAT_ISO)
        ))
    })?;

    let mut document = Document::parse(&content);
    let section = locate_section(&document, config, &path)?;
    let removed = document.remove_last_entry(section).ok_or_else(|| {
        AppError::NoEntriesToUndo(format!(
            "no entries under '{}' in {}",
            config.header,
            path.display()
        ))
    })?;

    write_note(&path, &document.to_text())?;
    info!("Removed entry at {} from {:?}", removed.time, path);
    Ok(removed)
}

//! List the entries of a day's note.

use super::locate_section;
use crate::config::Config;
use crate::errors::AppResult;
use crate::journal_core::{Document, Entry};
use crate::journal_io::{entry_path_for_date, read_note};
use chrono::NaiveDate;
use tracing::debug;

/// Returns the entries in the configured section of the note for `date`,
/// in chronological order. A day without a note has no entries.
///
/// # Errors
///
/// Returns `AppError::HeaderNotFound` if the note exists but lacks the header,
/// or `AppError::Io` if it cannot be read.
pub fn list_entries(config: &Config, date: NaiveDate) -> AppResult<Vec<Entry>> {
    let path = entry_path_for_date(&config.journal_dir, date);
    let Some(content) = read_note(&path)? else {
        debug!("No note for {}", date);
        return Ok(Vec::new());
    };

    let document = Document::parse(&content);
    let section = locate_section(&document, config, &path)?;
    let entries = document.entries(&section);
    debug!("Found {} entries in {:?}", entries.len(), path);
    Ok(entries)
}

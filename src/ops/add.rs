//! Add a timestamped entry to a day's note.

use super::locate_section;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::journal_core::{Document, Entry, EntryTime};
use crate::journal_io::{entry_path_for_date, read_note, write_note};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Adds an entry to the configured section of the note for `date`.
///
/// # Flow
///
/// 1. Read the note, or start from the daily template if there is none
/// 2. Locate the section header
/// 3. Insert the entry and regroup all entries chronologically
/// 4. Write the whole note back
///
/// # Arguments
///
/// * `config` - Application configuration (journal directory and header)
/// * `date` - Day whose note is edited
/// * `time` - Timestamp of the new entry
/// * `message` - Entry text
///
/// # Errors
///
/// Returns an error if:
/// - The message is empty
/// - The note exists but lacks the header (`AppError::HeaderNotFound`)
/// - The note cannot be read or written
pub fn add_entry(
    config: &Config,
    date: NaiveDate,
    time: EntryTime,
    message: &str,
) -> AppResult<Entry> {
    let message = message.trim();
    if message.is_empty() {
        return Err(AppError::InvalidArguments(
            "Message cannot be empty".to_string(),
        ));
    }

    let path = entry_path_for_date(&config.journal_dir, date);
    let mut document = match read_note(&path)? {
        Some(content) => Document::parse(&content),
        None => {
            debug!("Starting a new note for {}", date);
            Document::daily_template(date, &config.header)
        }
    };

    let section = locate_section(&document, config, &path)?;
    let entry = Entry::new(time, message);
    document.insert_entry(section, entry.clone());

    write_note(&path, &document.to_text())?;
    info!("Added entry at {} to {:?}", entry.time, path);
    Ok(entry)
}

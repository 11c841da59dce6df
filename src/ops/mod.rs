//! High-level operations on today's note.
//!
//! Each operation is one read, transform, write pass over a whole note. The
//! configuration is passed in explicitly; nothing here reads the environment.

pub mod add;
pub mod list;
pub mod undo;

// Re-export commonly used functions
pub use add::add_entry;
pub use list::list_entries;
pub use undo::undo_last_entry;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::journal_core::{Document, Section};
use std::path::Path;

fn locate_section(document: &Document, config: &Config, path: &Path) -> AppResult<Section> {
    document
        .locate_section(&config.header)
        .ok_or_else(|| AppError::HeaderNotFound {
            header: config.header.clone(),
            path: path.to_path_buf(),
        })
}

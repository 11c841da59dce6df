//! Core journal functionality without I/O operations.
//!
//! This module contains the pure section editor: it finds a header-delimited
//! section in a daily note, parses `- HH:mm <message>` bullets inside it, and
//! inserts or removes entries while keeping them in chronological order. It
//! never touches the filesystem or the environment; callers pass in the
//! document text and the header to work on.
//!
//! # Known quirks
//!
//! - Inserting regroups all entries directly under the header. Free text that
//!   sat between entries ends up below the entry block.
//! - Messages are not escaped. A message that spans lines, or whose next line
//!   looks like `- HH:mm ...`, is read back as more than one entry.
//!
//! # Examples
//!
//! ```
//! use jot::journal_core::{Document, Entry, EntryTime};
//!
//! let mut document = Document::parse("# 2024-01-01\n\n## Today\n- 14:00 Review\n");
//! let section = document.locate_section("## Today").unwrap();
//! document.insert_entry(section, Entry::new(EntryTime::new(9, 0).unwrap(), "Standup"));
//!
//! assert_eq!(
//!     document.to_text(),
//!     "# 2024-01-01\n\n## Today\n- 09:00 Standup\n- 14:00 Review\n"
//! );
//! ```

mod document;
mod entry;
mod time;

pub use document::{Document, Section};
pub use entry::Entry;
pub use time::EntryTime;

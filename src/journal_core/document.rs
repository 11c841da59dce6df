//! Line-oriented view of a daily note and the section editor built on it.

use super::entry::{sort_chronologically, Entry};
use crate::constants::{DATE_FORMAT_ISO, SECTION_BOUNDARY_PREFIX};
use chrono::NaiveDate;
use std::ops::Range;
use tracing::debug;

/// The full text of one daily note as an ordered list of lines.
///
/// The line ending and whether the text ended with one are remembered so
/// that `to_text` reproduces untouched documents byte for byte. A note that
/// uses CRLF anywhere is written back with CRLF throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    line_ending: &'static str,
    trailing_newline: bool,
}

/// The region of a document owned by one header.
///
/// A section is only valid for the document state it was located in. The
/// mutating operations on `Document` take it by value for that reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    header: usize,
    end: usize,
}

impl Section {
    /// Index of the header line.
    pub fn header_index(&self) -> usize {
        self.header
    }

    /// Index of the next `## ` line, or the document length.
    pub fn end_index(&self) -> usize {
        self.end
    }

    /// Line indices between the header and the end of the section.
    pub fn body(&self) -> Range<usize> {
        self.header + 1..self.end
    }
}

impl Document {
    pub fn parse(text: &str) -> Self {
        let line_ending = if text.contains("\r\n") { "\r\n" } else { "\n" };
        Self {
            lines: text.lines().map(str::to_string).collect(),
            line_ending,
            trailing_newline: text.ends_with('\n'),
        }
    }

    /// A fresh note for `date`: a title, a blank line, the section header, and
    /// a trailing blank line.
    ///
    /// # Examples
    ///
    /// ```
    /// use jot::journal_core::Document;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let document = Document::daily_template(date, "## Today");
    /// assert_eq!(document.to_text(), "# 2024-01-01\n\n## Today\n\n");
    /// ```
    pub fn daily_template(date: NaiveDate, header: &str) -> Self {
        Self::parse(&format!("# {}\n\n{}\n\n", date.format(DATE_FORMAT_ISO), header))
    }

    pub fn to_text(&self) -> String {
        let mut text = self.lines.join(self.line_ending);
        if self.trailing_newline && !self.lines.is_empty() {
            text.push_str(self.line_ending);
        }
        text
    }

    /// Finds the first line whose trimmed text equals `header` (also trimmed).
    ///
    /// The section runs until the next line starting with `## `, or the end of
    /// the document. Returns `None` when no line matches the header.
    pub fn locate_section(&self, header: &str) -> Option<Section> {
        let header = header.trim();
        let start = self.lines.iter().position(|line| line.trim() == header)?;
        let end = self.lines[start + 1..]
            .iter()
            .position(|line| line.starts_with(SECTION_BOUNDARY_PREFIX))
            .map_or(self.lines.len(), |offset| start + 1 + offset);

        debug!(header, start, end, "Located section");
        Some(Section { header: start, end })
    }

    /// Entries in the section body, sorted by time.
    ///
    /// Body lines that are not entries are skipped, so prose can live inside
    /// the section alongside entries.
    pub fn entries(&self, section: &Section) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.lines[section.body()]
            .iter()
            .filter_map(|line| Entry::parse_line(line))
            .collect();
        sort_chronologically(&mut entries);
        entries
    }

    /// Adds `entry` and regroups every entry, sorted, directly below the header.
    ///
    /// Any non-entry lines from the body follow the entry block in their
    /// original relative order. Prose that used to sit between entries
    /// therefore moves below them.
    pub fn insert_entry(&mut self, section: Section, entry: Entry) {
        let mut entries = self.entries(&section);
        entries.push(entry);
        sort_chronologically(&mut entries);

        let body = section.body();
        let prose: Vec<String> = self.lines[body.clone()]
            .iter()
            .filter(|line| !Entry::is_entry_line(line))
            .cloned()
            .collect();

        debug!(
            entries = entries.len(),
            prose = prose.len(),
            "Rewriting section body"
        );
        let rewritten: Vec<String> = entries
            .into_iter()
            .map(|entry| entry.raw)
            .chain(prose)
            .collect();
        self.lines.splice(body, rewritten);
    }

    /// Removes the chronologically last entry (the later line among equal
    /// times) and returns it. All other lines stay where they are.
    ///
    /// Returns `None` when the section holds no entries.
    pub fn remove_last_entry(&mut self, section: Section) -> Option<Entry> {
        let last = self.entries(&section).pop()?;
        let index = section
            .body()
            .find(|&index| self.lines[index] == last.raw)?;

        debug!(index, raw = %last.raw, "Removing entry line");
        self.lines.remove(index);
        Some(last)
    }
}

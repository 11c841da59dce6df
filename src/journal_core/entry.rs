//! Bullet lines of the form `- HH:mm <message>`.

use super::time::EntryTime;
use once_cell::sync::Lazy;
use regex::Regex;

// Dash, spaces, 1-2 digit hour, colon, 2 digit minute, spaces, message.
static ENTRY_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^- +([0-9]{1,2}):([0-9]{2}) +(\S.*)$").expect("valid entry line regex")
});

/// One timestamped bullet inside a section.
///
/// `raw` is the exact line text. Entries that are not being added are written
/// back from `raw`, so spacing like `-  9:05 note` survives a rewrite untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: EntryTime,
    pub message: String,
    pub raw: String,
}

impl Entry {
    /// Builds a new entry, formatted as `- HH:mm <message>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jot::journal_core::{Entry, EntryTime};
    ///
    /// let entry = Entry::new(EntryTime::new(9, 30).unwrap(), "Standup");
    /// assert_eq!(entry.raw, "- 09:30 Standup");
    /// ```
    pub fn new(time: EntryTime, message: impl Into<String>) -> Self {
        let message = message.into();
        let raw = format!("- {} {}", time, message);
        Self { time, message, raw }
    }

    /// Parses a document line, returning `None` for anything that is not an entry.
    ///
    /// Lines whose time is out of range (e.g. `- 25:00 x`) are treated as prose.
    pub fn parse_line(line: &str) -> Option<Self> {
        let caps = ENTRY_LINE_RE.captures(line)?;
        let hour = caps[1].parse().ok()?;
        let minute = caps[2].parse().ok()?;
        let time = EntryTime::new(hour, minute)?;
        Some(Self {
            time,
            message: caps[3].to_string(),
            raw: line.to_string(),
        })
    }

    /// Whether `line` would parse as an entry.
    pub fn is_entry_line(line: &str) -> bool {
        Self::parse_line(line).is_some()
    }
}

/// Stable sort by time of day; equal times keep their relative order.
pub(crate) fn sort_chronologically(entries: &mut [Entry]) {
    entries.sort_by_key(|entry| entry.time);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_line() {
        let entry = Entry::parse_line("- 09:30 Standup with team").unwrap();
        assert_eq!(entry.time.to_string(), "09:30");
        assert_eq!(entry.message, "Standup with team");
        assert_eq!(entry.raw, "- 09:30 Standup with team");
    }

    #[test]
    fn test_parse_preserves_loose_formatting() {
        let entry = Entry::parse_line("-   9:05   coffee  ").unwrap();
        assert_eq!(entry.time.to_string(), "09:05");
        assert_eq!(entry.message, "coffee  ");
        assert_eq!(entry.raw, "-   9:05   coffee  ");
    }

    #[test]
    fn test_non_entry_lines() {
        let lines = [
            "",
            "Just some prose",
            "- a regular bullet",
            "-09:30 no space after dash",
            "- 09:30",
            "- 09:30 ",
            "- 09:30nospace",
            "- 9:5 short minute",
            "- 123:00 long hour",
            "- 25:00 out of range",
            "- 12:60 out of range",
            "  - 09:30 indented",
            "* 09:30 star bullet",
            "## Today",
        ];

        for line in lines {
            assert!(
                Entry::parse_line(line).is_none(),
                "{:?} should not be an entry",
                line
            );
            assert!(!Entry::is_entry_line(line));
        }
    }

    #[test]
    fn test_new_entry_round_trips_through_parse() {
        let entry = Entry::new(EntryTime::new(7, 5).unwrap(), "Wake up");
        assert_eq!(Entry::parse_line(&entry.raw), Some(entry));
    }

    #[test]
    fn test_sort_is_stable_for_equal_times() {
        let mut entries = vec![
            Entry::new(EntryTime::new(10, 0).unwrap(), "first ten"),
            Entry::new(EntryTime::new(9, 0).unwrap(), "nine"),
            Entry::new(EntryTime::new(10, 0).unwrap(), "second ten"),
        ];
        sort_chronologically(&mut entries);

        let messages: Vec<_> = entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["nine", "first ten", "second ten"]);
    }
}

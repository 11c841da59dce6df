//! Time-of-day values used to stamp and order entries.

use crate::errors::{AppError, AppResult};
use chrono::Timelike;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

const MINUTES_PER_HOUR: u32 = 60;
const HOURS_PER_DAY: u32 = 24;

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("valid time regex"));

/// A time of day with minute precision.
///
/// Ordering follows total minutes since midnight, which is the key entries are
/// sorted by within a section.
///
/// # Examples
///
/// ```
/// use jot::journal_core::EntryTime;
///
/// let time: EntryTime = "9:05".parse().unwrap();
/// assert_eq!(time.to_string(), "09:05");
/// assert_eq!(time.minutes_since_midnight(), 545);
///
/// assert!("25:30".parse::<EntryTime>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryTime {
    minutes: u16,
}

impl EntryTime {
    /// Creates a time from an hour (0-23) and minute (0-59).
    ///
    /// Returns `None` if either component is out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour >= HOURS_PER_DAY || minute >= MINUTES_PER_HOUR {
            return None;
        }
        Some(Self {
            minutes: (hour * MINUTES_PER_HOUR + minute) as u16,
        })
    }

    /// Truncates any chrono time value (e.g. `Local::now()`) to the minute.
    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        Self {
            minutes: (time.hour() * MINUTES_PER_HOUR + time.minute()) as u16,
        }
    }

    /// Parses `H:mm` or `HH:mm`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidTimeFormat` when the text is not one or two
    /// hour digits, a colon, and exactly two minute digits, or when the hour
    /// or minute is out of range.
    pub fn parse(text: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidTimeFormat(text.to_string());
        let caps = TIME_RE.captures(text).ok_or_else(invalid)?;
        let hour = caps[1].parse().map_err(|_| invalid())?;
        let minute = caps[2].parse().map_err(|_| invalid())?;
        Self::new(hour, minute).ok_or_else(invalid)
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.minutes) / MINUTES_PER_HOUR
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minutes) % MINUTES_PER_HOUR
    }

    /// The ordering key: `hour * 60 + minute`.
    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.minutes)
    }
}

impl FromStr for EntryTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EntryTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

//! The extracted cleaning-event record.
//!
//! This module provides [`EventRecord`], the unit of output produced by the
//! scanner. A record is created once during the scan pass and never mutated
//! afterwards; aggregation and export consume it read-only.
//!
//! # Overview
//!
//! A record consists of three fields, all required:
//! - `date` — the date marker in effect when the line was scanned (`YYYY/MM/DD`)
//! - `time` — the clock time found on the line itself (`HH:MM`)
//! - `message` — the full trimmed text of the matching line
//!
//! The `date` and `time` fields keep the literal substrings matched in the
//! input. Calendar values for aggregation are derived on demand via
//! [`naive_date`](EventRecord::naive_date), [`month_key`](EventRecord::month_key)
//! and [`weekday`](EventRecord::weekday).
//!
//! # Examples
//!
//! ```
//! use sweeplog::EventRecord;
//! use chrono::Weekday;
//!
//! let rec = EventRecord::new("2024/01/15", "10:30", "10:30 cleaning started");
//! assert_eq!(rec.month_key(), "2024-01");
//! assert_eq!(rec.weekday(), Some(Weekday::Mon));
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One extracted cleaning event.
///
/// Records are emitted in scan order and are immutable after creation.
/// The date and time are stored exactly as matched in the input; no calendar
/// validation happens at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Date marker in effect when the line was scanned, formatted `YYYY/MM/DD`.
    pub date: String,

    /// Clock time found on the matching line, formatted `HH:MM`.
    pub time: String,

    /// Full trimmed text of the matching line.
    pub message: String,
}

impl EventRecord {
    /// Creates a new record from the three matched fields.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sweeplog::EventRecord;
    ///
    /// let rec = EventRecord::new("2024/01/15", "10:30", "10:30 start");
    /// assert_eq!(rec.date(), "2024/01/15");
    /// assert_eq!(rec.time(), "10:30");
    /// ```
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            message: message.into(),
        }
    }

    /// Returns the date string (`YYYY/MM/DD`).
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the time string (`HH:MM`).
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the trimmed message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Parses the date field into a calendar date.
    ///
    /// Returns `None` when the field matched the `YYYY/MM/DD` shape but is
    /// not a real calendar date (e.g. month 13). The scanner only checks the
    /// shape, so consumers that need a real date must go through here.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y/%m/%d").ok()
    }

    /// Returns the `YYYY-MM` month bucket key for this record.
    ///
    /// Derived textually from the date field, so it is available even for
    /// dates that fail calendar validation.
    pub fn month_key(&self) -> String {
        self.date[..7.min(self.date.len())].replace('/', "-")
    }

    /// Returns the day of week, if the date is a real calendar date.
    pub fn weekday(&self) -> Option<Weekday> {
        self.naive_date().map(|d| d.weekday())
    }
}

//! LINE talk-history scanner.
//!
//! This module provides [`LineScanner`], the extraction core. LINE exports
//! interleave date-header lines with message lines:
//!
//! ```text
//! 2024/01/15(月)
//! 10:30	田中	いまから清掃を開始します
//! 10:45	佐藤	了解です
//! 2024/01/16(火)
//! ...
//! ```
//!
//! A date header applies to every following line until the next one appears.
//! The scanner tracks that marker and emits one [`EventRecord`] for every
//! keyword-matching line that also carries an `HH:MM` time.
//!
//! # Example
//!
//! ```rust
//! use sweeplog::scanner::LineScanner;
//! use sweeplog::config::ScanConfig;
//!
//! # fn main() -> sweeplog::Result<()> {
//! let scanner = LineScanner::new(ScanConfig::new().with_keyword("清掃を開始"))?;
//! let records = scanner.scan("2024/01/15\n10:30 清掃を開始します\n");
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].date, "2024/01/15");
//! assert_eq!(records[0].time, "10:30");
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::config::ScanConfig;
use crate::error::{Result, SweeplogError};
use crate::record::EventRecord;

/// Pattern for a date header anywhere on a line.
const DATE_PATTERN: &str = r"\d{4}/\d{2}/\d{2}";

/// Pattern for a clock time anywhere on a line.
const TIME_PATTERN: &str = r"\d{2}:\d{2}";

/// Extracts cleaning-event records from exported talk-history text.
///
/// The scanner itself is immutable; the current-date marker lives in a
/// per-pass [`ScanState`], so a single scanner can serve concurrent scans
/// without leaking date state between them.
#[derive(Debug)]
pub struct LineScanner {
    keyword: String,
    date_re: Regex,
    time_re: Regex,
}

impl LineScanner {
    /// Creates a scanner for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SweeplogError::InvalidKeyword`] if the keyword is empty.
    pub fn new(config: ScanConfig) -> Result<Self> {
        if config.keyword.is_empty() {
            return Err(SweeplogError::InvalidKeyword);
        }
        Ok(Self {
            keyword: config.keyword,
            date_re: Regex::new(DATE_PATTERN).unwrap(),
            time_re: Regex::new(TIME_PATTERN).unwrap(),
        })
    }

    /// Creates a scanner with the default keyword.
    pub fn with_defaults() -> Self {
        // The default keyword is non-empty, so this cannot fail.
        Self::new(ScanConfig::default()).unwrap()
    }

    /// Returns the configured keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Reads a talk-history file and scans it.
    ///
    /// # Errors
    ///
    /// Returns [`SweeplogError::Io`] if the file cannot be read and
    /// [`SweeplogError::Decode`] if its bytes are not valid UTF-8.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<EventRecord>> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| SweeplogError::decode(e, Some(path.to_path_buf())))?;
        Ok(self.scan(&content))
    }

    /// Scans the full text content, line by line, in order.
    ///
    /// The return value preserves scan order. An empty result is a valid
    /// outcome, not an error.
    pub fn scan(&self, content: &str) -> Vec<EventRecord> {
        let mut state = ScanState::new();
        content
            .split('\n')
            .filter_map(|line| self.step(&mut state, line))
            .collect()
    }

    /// Processes one line against the current scan state.
    ///
    /// A line that carries a date header only updates the marker; it never
    /// contributes a record, even if it also contains the keyword and a
    /// time. Keyword lines without a time are dropped silently.
    fn step(&self, state: &mut ScanState, line: &str) -> Option<EventRecord> {
        if let Some(m) = self.date_re.find(line) {
            state.current_date = Some(m.as_str().to_string());
            return None;
        }

        let date = state.current_date.as_ref()?;
        if !line.contains(&self.keyword) {
            return None;
        }

        let time = self.time_re.find(line)?;
        Some(EventRecord::new(date, time.as_str(), line.trim()))
    }
}

/// Mutable state threaded through one scan pass.
///
/// Holds the most recently seen date marker. Each call to
/// [`LineScanner::scan`] owns a fresh instance; nothing carries over
/// between passes.
#[derive(Debug, Default)]
struct ScanState {
    current_date: Option<String>,
}

impl ScanState {
    fn new() -> Self {
        Self::default()
    }
}

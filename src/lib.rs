//! # Sweeplog
//!
//! A Rust library for extracting cleaning-event records from LINE
//! talk-history exports and turning them into summary reports.
//!
//! ## Overview
//!
//! LINE exports a talk history as plain text: date-header lines
//! (`2024/01/15(月)`) followed by timestamped message lines. Sweeplog scans
//! that text for a configurable keyword (by default the phrase posted when a
//! cleaning shift starts), extracts one record per match, and aggregates the
//! records into monthly and weekday counts ready for export.
//!
//! ## Quick Start
//!
//! ```rust
//! use sweeplog::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let scanner = LineScanner::new(ScanConfig::new())?;
//!     let records = scanner.scan("2024/01/15\n10:30 いまから清掃を開始します\n");
//!
//!     let report = CleaningReport::from_records(&records);
//!     assert_eq!(report.total, 1);
//!     Ok(())
//! }
//! ```
//!
//! An empty record set is a valid result, not an error — callers present it
//! as "keyword not found" rather than a failure.
//!
//! ## Module Structure
//!
//! - [`scanner`] — [`LineScanner`], the extraction core
//! - [`record`] — [`EventRecord`], the three-field output row
//! - [`config`] — [`ScanConfig`](config::ScanConfig) and the default keyword
//! - [`report`] — [`CleaningReport`], monthly/weekday aggregation
//! - [`output`] — CSV workbook and JSON report writers
//! - [`cli`] — CLI argument types (feature `cli`)
//! - [`error`] — [`SweeplogError`] and the crate [`Result`]
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod record;
pub mod report;
pub mod scanner;

// Re-export the main types at the crate root for convenience
pub use error::{Result, SweeplogError};
pub use record::EventRecord;
pub use report::CleaningReport;
pub use scanner::LineScanner;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use sweeplog::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::record::EventRecord;
    pub use crate::report::CleaningReport;
    pub use crate::scanner::LineScanner;

    // Error types
    pub use crate::error::{Result, SweeplogError};

    // Configuration
    pub use crate::config::{ScanConfig, DEFAULT_KEYWORD};

    // Output
    pub use crate::output::OutputFormat;
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_records_csv, write_csv_workbook};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, write_json};
}

//! Export writers for records and reports.
//!
//! This module contains:
//! - [`OutputFormat`] - supported export formats
//! - [`csv_writer`] - CSV workbook (one file per table)
//! - [`json_writer`] - single JSON report document
//!
//! The CSV export mirrors a multi-sheet workbook: the record table and the
//! two aggregate tables each land in their own file sharing a common stem.

#[cfg(feature = "csv-output")]
pub mod csv_writer;
#[cfg(feature = "json-output")]
pub mod json_writer;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SweeplogError};
use crate::record::EventRecord;
use crate::report::CleaningReport;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_monthly_csv, to_records_csv, to_weekday_csv, write_csv_workbook};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};

/// Export format for scan results.
///
/// # Example
///
/// ```rust
/// use sweeplog::output::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("json").unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.extension(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV workbook: records, monthly and weekday tables as separate files.
    #[default]
    Csv,

    /// Single JSON document with records, summary and both aggregate tables.
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json"]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
        }
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(SweeplogError::invalid_format(
                "output",
                format!("Unknown file extension: '.{}'. Expected one of: csv, json", ext),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes the scan result in the selected format.
///
/// `stem` is the output path without extension (e.g. `cleaning_report`);
/// the writers derive the actual file names from it. Returns the paths
/// written, in write order.
///
/// # Errors
///
/// Returns an error if the required feature for the format is not enabled
/// or the files cannot be written.
#[allow(unused_variables)]
pub fn write_report(
    records: &[EventRecord],
    report: &CleaningReport,
    stem: &Path,
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => write_csv_workbook(records, report, stem),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => {
            let path = stem.with_extension("json");
            write_json(records, report, &path)?;
            Ok(vec![path])
        }
        #[allow(unreachable_patterns)]
        _ => Err(SweeplogError::invalid_format(
            "output",
            format!(
                "Output format {:?} requires the '{}' feature to be enabled",
                format,
                match format {
                    OutputFormat::Csv => "csv-output",
                    OutputFormat::Json => "json-output",
                }
            ),
        )),
    }
}

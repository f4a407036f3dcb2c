//! JSON report writer.
//!
//! Produces a single pretty-printed document carrying the record table,
//! the totals and both aggregate tables — the JSON equivalent of the CSV
//! workbook.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::record::EventRecord;
use crate::report::CleaningReport;

#[derive(Serialize)]
struct JsonReport<'a> {
    records: &'a [EventRecord],
    summary: Summary,
    monthly: &'a [(String, usize)],
    weekday: &'a [(&'static str, usize)],
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    current_month_total: usize,
    monthly_average: f64,
}

fn json_report<'a>(records: &'a [EventRecord], report: &'a CleaningReport) -> JsonReport<'a> {
    JsonReport {
        records,
        summary: Summary {
            total: report.total,
            current_month_total: report.current_month_total,
            monthly_average: report.monthly_average,
        },
        monthly: &report.monthly,
        weekday: &report.weekday,
    }
}

/// Writes the report document to a file.
pub fn write_json(records: &[EventRecord], report: &CleaningReport, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    let json = to_json(records, report)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Converts the report document to a pretty-printed JSON string.
pub fn to_json(records: &[EventRecord], report: &CleaningReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json_report(records, report))?)
}

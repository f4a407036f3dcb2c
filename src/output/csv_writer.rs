//! CSV workbook writer.
//!
//! Writes the scan result as one CSV file per table, sharing a common stem:
//!
//! - `{stem}_records.csv` — `Date,Time,Message`
//! - `{stem}_monthly.csv` — `Month,Count`
//! - `{stem}_weekday.csv` — `Weekday,Count`

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::EventRecord;
use crate::report::CleaningReport;

/// Writes all three tables next to each other and returns the written paths.
pub fn write_csv_workbook(
    records: &[EventRecord],
    report: &CleaningReport,
    stem: &Path,
) -> Result<Vec<PathBuf>> {
    let records_path = sheet_path(stem, "records");
    let monthly_path = sheet_path(stem, "monthly");
    let weekday_path = sheet_path(stem, "weekday");

    write_records_csv(records, &records_path)?;
    write_monthly_csv(report, &monthly_path)?;
    write_weekday_csv(report, &weekday_path)?;

    Ok(vec![records_path, monthly_path, weekday_path])
}

/// Derives `{stem}_{sheet}.csv` from the output stem.
fn sheet_path(stem: &Path, sheet: &str) -> PathBuf {
    let name = stem
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    stem.with_file_name(format!("{name}_{sheet}.csv"))
}

/// Writes the full record table.
pub fn write_records_csv(records: &[EventRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_records(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Writes the per-month counts.
pub fn write_monthly_csv(report: &CleaningReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_monthly(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

/// Writes the per-weekday counts.
pub fn write_weekday_csv(report: &CleaningReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_weekday(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

/// Converts the record table to an in-memory CSV string.
pub fn to_records_csv(records: &[EventRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_records(&mut writer, records)?;
    into_string(writer)
}

/// Converts the monthly table to an in-memory CSV string.
pub fn to_monthly_csv(report: &CleaningReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_monthly(&mut writer, report)?;
    into_string(writer)
}

/// Converts the weekday table to an in-memory CSV string.
pub fn to_weekday_csv(report: &CleaningReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_weekday(&mut writer, report)?;
    into_string(writer)
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    records: &[EventRecord],
) -> Result<()> {
    writer.write_record(["Date", "Time", "Message"])?;
    for rec in records {
        writer.write_record([&rec.date, &rec.time, &rec.message])?;
    }
    Ok(())
}

fn write_monthly<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    report: &CleaningReport,
) -> Result<()> {
    writer.write_record(["Month", "Count"])?;
    for (month, count) in &report.monthly {
        writer.write_record([month.as_str(), &count.to_string()])?;
    }
    Ok(())
}

fn write_weekday<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    report: &CleaningReport,
) -> Result<()> {
    writer.write_record(["Weekday", "Count"])?;
    for (day, count) in &report.weekday {
        writer.write_record([*day, &count.to_string()])?;
    }
    Ok(())
}

fn into_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_records() -> Vec<EventRecord> {
        vec![
            EventRecord::new("2024/01/15", "10:30", "10:30 clean"),
            EventRecord::new("2024/02/05", "09:00", "09:00 clean"),
        ]
    }

    #[test]
    fn test_to_records_csv() {
        let csv = to_records_csv(&sample_records()).unwrap();
        assert!(csv.starts_with("Date,Time,Message"));
        assert!(csv.contains("2024/01/15,10:30,10:30 clean"));
        assert!(csv.contains("2024/02/05,09:00,09:00 clean"));
    }

    #[test]
    fn test_to_monthly_csv() {
        let records = sample_records();
        let report = CleaningReport::from_records(&records);
        let csv = to_monthly_csv(&report).unwrap();
        assert!(csv.starts_with("Month,Count"));
        assert!(csv.contains("2024-01,1"));
        assert!(csv.contains("2024-02,1"));
    }

    #[test]
    fn test_to_weekday_csv() {
        let records = sample_records();
        let report = CleaningReport::from_records(&records);
        let csv = to_weekday_csv(&report).unwrap();
        assert!(csv.starts_with("Weekday,Count"));
        // 2024-01-15 was a Monday, 2024-02-05 a Monday too
        assert!(csv.contains("Monday,2"));
    }

    #[test]
    fn test_workbook_file_names() {
        let dir = tempdir().unwrap();
        let stem = dir.path().join("cleaning_report");

        let records = sample_records();
        let report = CleaningReport::from_records(&records);
        let paths = write_csv_workbook(&records, &report, &stem).unwrap();

        assert_eq!(paths.len(), 3);
        assert!(paths[0].ends_with("cleaning_report_records.csv"));
        assert!(paths[1].ends_with("cleaning_report_monthly.csv"));
        assert!(paths[2].ends_with("cleaning_report_weekday.csv"));
        for path in &paths {
            assert!(path.exists());
        }
    }

    #[test]
    fn test_csv_escapes_commas_in_messages() {
        let records = vec![EventRecord::new("2024/01/15", "10:30", "clean, thoroughly")];
        let csv = to_records_csv(&records).unwrap();
        assert!(csv.contains("\"clean, thoroughly\""));
    }
}

//! Summary statistics over extracted records.
//!
//! This module aggregates the scanner's output into the tables the export
//! writers and the CLI summary consume:
//!
//! - monthly counts (`YYYY-MM` buckets, ascending)
//! - weekday counts (Monday through Sunday)
//! - totals: overall, latest month, average per month
//!
//! Aggregation never fails. Records whose date matched the `YYYY/MM/DD`
//! shape but is not a real calendar date keep their textual month bucket
//! and are skipped for weekday bucketing.
//!
//! # Example
//!
//! ```rust
//! use sweeplog::{CleaningReport, EventRecord};
//!
//! let records = vec![
//!     EventRecord::new("2024/01/15", "10:30", "clean"),
//!     EventRecord::new("2024/01/22", "09:00", "clean"),
//!     EventRecord::new("2024/02/05", "10:30", "clean"),
//! ];
//!
//! let report = CleaningReport::from_records(&records);
//! assert_eq!(report.total, 3);
//! assert_eq!(report.current_month_total, 1);
//! assert_eq!(report.monthly, vec![("2024-01".into(), 2), ("2024-02".into(), 1)]);
//! ```

use std::collections::BTreeMap;

use chrono::Weekday;
use serde::Serialize;

use crate::record::EventRecord;

/// Weekday bucket order used in the report tables.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// English display name for a weekday bucket.
fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Aggregated view of one scan pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleaningReport {
    /// Total number of records.
    pub total: usize,

    /// Number of records in the latest month seen.
    pub current_month_total: usize,

    /// Average records per distinct month (0.0 when there are no records).
    pub monthly_average: f64,

    /// Per-month counts, ascending by `YYYY-MM` key.
    pub monthly: Vec<(String, usize)>,

    /// Per-weekday counts, Monday through Sunday. Only weekdays that
    /// received at least one record appear.
    pub weekday: Vec<(&'static str, usize)>,
}

impl CleaningReport {
    /// Builds a report from records in any order.
    pub fn from_records(records: &[EventRecord]) -> Self {
        let mut monthly: BTreeMap<String, usize> = BTreeMap::new();
        let mut by_weekday: BTreeMap<u8, usize> = BTreeMap::new();

        for rec in records {
            *monthly.entry(rec.month_key()).or_default() += 1;
            if let Some(day) = rec.weekday() {
                *by_weekday
                    .entry(day.num_days_from_monday() as u8)
                    .or_default() += 1;
            }
        }

        let total = records.len();
        let current_month_total = monthly.values().next_back().copied().unwrap_or(0);
        let monthly_average = if monthly.is_empty() {
            0.0
        } else {
            total as f64 / monthly.len() as f64
        };

        let weekday = WEEKDAYS
            .iter()
            .filter_map(|&day| {
                by_weekday
                    .get(&(day.num_days_from_monday() as u8))
                    .map(|&count| (weekday_name(day), count))
            })
            .collect();

        Self {
            total,
            current_month_total,
            monthly_average,
            monthly: monthly.into_iter().collect(),
            weekday,
        }
    }

    /// Returns `true` if the report covers no records.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(date: &str) -> EventRecord {
        EventRecord::new(date, "10:30", "clean")
    }

    #[test]
    fn test_empty_report() {
        let report = CleaningReport::from_records(&[]);
        assert!(report.is_empty());
        assert_eq!(report.total, 0);
        assert_eq!(report.current_month_total, 0);
        assert_eq!(report.monthly_average, 0.0);
        assert!(report.monthly.is_empty());
        assert!(report.weekday.is_empty());
    }

    #[test]
    fn test_monthly_buckets() {
        // Two in January, one in February
        let records = vec![rec("2024/01/15"), rec("2024/01/22"), rec("2024/02/05")];
        let report = CleaningReport::from_records(&records);

        assert_eq!(report.total, 3);
        assert_eq!(
            report.monthly,
            vec![("2024-01".to_string(), 2), ("2024-02".to_string(), 1)]
        );
    }

    #[test]
    fn test_current_month_is_latest_bucket() {
        let records = vec![rec("2024/02/05"), rec("2024/01/15"), rec("2024/02/19")];
        let report = CleaningReport::from_records(&records);
        assert_eq!(report.current_month_total, 2);
    }

    #[test]
    fn test_monthly_average() {
        let records = vec![rec("2024/01/15"), rec("2024/01/22"), rec("2024/02/05")];
        let report = CleaningReport::from_records(&records);
        assert!((report.monthly_average - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weekday_buckets() {
        // 2024-01-15 and 2024-01-22 are Mondays, 2024-01-17 a Wednesday
        let records = vec![rec("2024/01/15"), rec("2024/01/22"), rec("2024/01/17")];
        let report = CleaningReport::from_records(&records);

        assert_eq!(report.weekday, vec![("Monday", 2), ("Wednesday", 1)]);
    }

    #[test]
    fn test_weekday_order_is_monday_first() {
        // Sunday 2024-01-21, Monday 2024-01-22
        let records = vec![rec("2024/01/21"), rec("2024/01/22")];
        let report = CleaningReport::from_records(&records);
        assert_eq!(report.weekday, vec![("Monday", 1), ("Sunday", 1)]);
    }

    #[test]
    fn test_non_calendar_date_kept_in_monthly_only() {
        let records = vec![rec("2024/13/99"), rec("2024/01/15")];
        let report = CleaningReport::from_records(&records);

        assert_eq!(report.total, 2);
        assert_eq!(
            report.monthly,
            vec![("2024-01".to_string(), 1), ("2024-13".to_string(), 1)]
        );
        // Weekday derivation needs a real calendar date
        assert_eq!(report.weekday, vec![("Monday", 1)]);
    }

    #[test]
    fn test_report_input_order_does_not_matter() {
        let a = vec![rec("2024/01/15"), rec("2024/02/05")];
        let b = vec![rec("2024/02/05"), rec("2024/01/15")];
        assert_eq!(
            CleaningReport::from_records(&a),
            CleaningReport::from_records(&b)
        );
    }
}

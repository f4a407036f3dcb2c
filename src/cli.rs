//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the CLI argument structure, plus the
//! clap-facing wrapper around [`OutputFormat`](crate::output::OutputFormat).

use clap::{Parser, ValueEnum};

use crate::config::DEFAULT_KEYWORD;

/// Extract cleaning-event records from a LINE talk-history export
/// and write summary reports.
#[derive(Parser, Debug, Clone)]
#[command(name = "sweeplog")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    sweeplog talk_history.txt
    sweeplog talk_history.txt -k \"清掃完了\"
    sweeplog talk_history.txt -o reports/january -f json")]
pub struct Args {
    /// Path to the exported talk history (.txt)
    pub input: String,

    /// Keyword marking a cleaning-started message line
    #[arg(short, long, default_value = DEFAULT_KEYWORD)]
    pub keyword: String,

    /// Output path stem (extension is derived from the format)
    #[arg(short, long, default_value = "cleaning_report")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,
}

/// Output format options for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// CSV workbook: records, monthly and weekday tables as separate files
    #[default]
    Csv,

    /// Single JSON document with all tables
    Json,
}

impl From<OutputFormat> for crate::output::OutputFormat {
    fn from(format: OutputFormat) -> crate::output::OutputFormat {
        match format {
            OutputFormat::Csv => crate::output::OutputFormat::Csv,
            OutputFormat::Json => crate::output::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["sweeplog", "talk.txt"]);
        assert_eq!(args.input, "talk.txt");
        assert_eq!(args.keyword, DEFAULT_KEYWORD);
        assert_eq!(args.output, "cleaning_report");
        assert_eq!(args.format, OutputFormat::Csv);
    }

    #[test]
    fn test_keyword_override() {
        let args = Args::parse_from(["sweeplog", "talk.txt", "-k", "清掃完了"]);
        assert_eq!(args.keyword, "清掃完了");
    }

    #[test]
    fn test_format_conversion() {
        let lib: crate::output::OutputFormat = OutputFormat::Json.into();
        assert_eq!(lib, crate::output::OutputFormat::Json);
    }
}

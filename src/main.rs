//! # sweeplog CLI
//!
//! Command-line interface for the sweeplog library.

use std::path::Path;
use std::process;

use clap::Parser as ClapParser;

use sweeplog::cli::Args;
use sweeplog::config::ScanConfig;
use sweeplog::output::{write_report, OutputFormat};
use sweeplog::{CleaningReport, LineScanner, SweeplogError};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        if e.is_decode() {
            eprintln!("   Check the file format: the input must be a UTF-8 .txt export.");
        }
        process::exit(1);
    }
}

fn run() -> Result<(), SweeplogError> {
    let args = <Args as ClapParser>::parse();
    let format: OutputFormat = args.format.into();

    println!("🧹 sweeplog v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("🔑 Keyword: {}", args.keyword);
    println!("📄 Format:  {}", format);
    println!();

    println!("⏳ Scanning talk history...");
    let scanner = LineScanner::new(ScanConfig::new().with_keyword(args.keyword))?;
    let records = scanner.scan_file(Path::new(&args.input))?;

    if records.is_empty() {
        println!();
        println!("⚠️  Keyword \"{}\" was not found in the input.", scanner.keyword());
        return Ok(());
    }
    println!("   Found {} records", records.len());

    println!("📊 Aggregating...");
    let report = CleaningReport::from_records(&records);

    println!("💾 Writing {}...", format);
    let written = write_report(&records, &report, Path::new(&args.output), format)?;
    for path in &written {
        println!("   {}", path.display());
    }

    println!();
    println!("✅ Done!");
    println!();
    println!("📊 Summary:");
    println!("   Total:          {} cleanings", report.total);
    println!("   Latest month:   {} cleanings", report.current_month_total);
    println!("   Monthly average: {:.1}", report.monthly_average);

    Ok(())
}

//! Statistics reporting.

use console::style;

use crate::clean::{CleanReport, FileOutcome};

/// Print the statistics of a finished run.
pub fn print_clean_stats(report: &CleanReport) {
    let stats = &report.stats;

    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Statistics:").bold());
    println!("  Files:       {}", stats.files_seen);
    println!("  Directories: {} (skipped)", stats.directories_skipped);
    println!("  Renamed:     {}", stats.renamed);
    println!("  Converted:   {}", stats.converted);
    println!(
        "  Compressed:  {} ({} saved)",
        stats.compressed,
        format_bytes(stats.bytes_saved())
    );
    println!("  Untouched:   {}", stats.untouched);
    if stats.failures() > 0 {
        println!("  Failed:      {}", style(stats.failures()).red());
        for record in report.failures() {
            println!("    - {}: {}", record.name, failure_message(&record.outcome));
        }
    }
    println!("{}", style("═".repeat(50)).dim());
}

fn failure_message(outcome: &FileOutcome) -> &str {
    match outcome {
        FileOutcome::RenameFailed { error }
        | FileOutcome::ConversionFailed { error }
        | FileOutcome::CompressionFailed { error } => error.as_str(),
        _ => "",
    }
}

/// Format a byte count for humans (1024-based).
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

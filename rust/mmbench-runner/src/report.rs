//! Rendering for the console table, the summary block, and the
//! machine-readable formats.

use crate::bench::SweepEvent;
use crate::result::{BenchmarkResult, Summary};

/// Width of the dash and equals rules in the text output.
const RULE_WIDTH: usize = 70;

/// Column header line plus the dash rule under it.
pub fn table_header() -> String {
    format!(
        "{:<10} {:<15} {:<15}\n{}",
        "Size",
        "Time (s)",
        "Memory (MB)",
        "-".repeat(RULE_WIDTH)
    )
}

/// One table row for a sweep event.
pub fn table_row(event: &SweepEvent<'_>) -> String {
    match event {
        SweepEvent::Completed(result) => data_row(result),
        SweepEvent::OutOfMemory { size } => memory_error_row(*size),
        SweepEvent::Failed { size, message } => error_row(*size, message),
    }
}

/// Data row: size, seconds to four decimals, mebibytes to two.
pub fn data_row(result: &BenchmarkResult) -> String {
    format!(
        "{:<10} {:<15.4} {:<15.2}",
        result.size, result.execution_time_secs, result.memory_used_mb
    )
}

/// Row for a size whose matrices could not be allocated.
pub fn memory_error_row(size: usize) -> String {
    format!("{:<10} MEMORY ERROR - Size too large", size)
}

/// Row for any other per-size failure.
pub fn error_row(size: usize, message: &str) -> String {
    format!("{:<10} ERROR: {}", size, message)
}

/// Warning line for a failed size; `None` for completions.
///
/// The machine-readable modes print this to stderr, keeping stdout
/// parseable while still reporting why a sweep stopped early.
pub fn failure_warning(event: &SweepEvent<'_>) -> Option<String> {
    match event {
        SweepEvent::Completed(_) => None,
        SweepEvent::OutOfMemory { size } => Some(format!(
            "Warning: size {}: MEMORY ERROR - Size too large, stopping sweep",
            size
        )),
        SweepEvent::Failed { size, message } => Some(format!(
            "Warning: size {}: ERROR: {}, stopping sweep",
            size, message
        )),
    }
}

/// The SUMMARY block: header, equals rule, totals, largest size.
pub fn summary_block(summary: &Summary) -> String {
    format!(
        "SUMMARY\n{}\nTotal execution time: {:.2} seconds\nAverage memory usage: {:.2} MB\nLargest matrix tested: {size}x{size}",
        "=".repeat(RULE_WIDTH),
        summary.total_time_secs,
        summary.avg_memory_mb,
        size = summary.largest_size
    )
}

/// CSV header, matching the JSON field names.
pub fn csv_header() -> String {
    "size,execution_time_secs,memory_used_mb,peak_rss_kb".to_string()
}

/// One CSV line per result; an absent RSS reading prints as `N/A`.
pub fn csv_row(result: &BenchmarkResult) -> String {
    format!(
        "{},{:.6},{:.6},{}",
        result.size,
        result.execution_time_secs,
        result.memory_used_mb,
        result.peak_rss_kb.map_or("N/A".to_string(), |v| v.to_string())
    )
}

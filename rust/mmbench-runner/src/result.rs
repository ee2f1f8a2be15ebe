use chrono::{DateTime, Utc};
use serde::Serialize;

/// Immutable record of one size's benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    /// Edge length of the square matrices.
    pub size: usize,
    /// Wall-clock duration of the multiply, in seconds.
    pub execution_time_secs: f64,
    /// Live-heap delta across construction + multiply, in MiB.
    pub memory_used_mb: f64,
    /// Peak RSS sampled after the multiply (Linux only). Supplementary
    /// diagnostic; never part of the fixed three-column table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_rss_kb: Option<u64>,
}

/// Aggregates over an ordered result sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Sum of execution times across all collected results.
    pub total_time_secs: f64,
    /// Mean memory delta across all collected results.
    pub avg_memory_mb: f64,
    /// Edge length of the largest successfully benchmarked matrix.
    pub largest_size: usize,
}

impl Summary {
    /// Compute the summary, or `None` when nothing was collected.
    pub fn from_results(results: &[BenchmarkResult]) -> Option<Self> {
        let largest_size = results.iter().map(|r| r.size).max()?;
        let total_time_secs = results.iter().map(|r| r.execution_time_secs).sum();
        let avg_memory_mb =
            results.iter().map(|r| r.memory_used_mb).sum::<f64>() / results.len() as f64;
        Some(Summary {
            total_time_secs,
            avg_memory_mb,
            largest_size,
        })
    }
}

/// Machine-readable envelope for a whole run (JSON output).
#[derive(Debug, Serialize)]
pub struct Report {
    /// When the run finished.
    pub timestamp: DateTime<Utc>,
    pub results: Vec<BenchmarkResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

impl Report {
    pub fn new(results: Vec<BenchmarkResult>) -> Self {
        let summary = Summary::from_results(&results);
        Report {
            timestamp: Utc::now(),
            results,
            summary,
        }
    }
}

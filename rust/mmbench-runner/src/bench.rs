//! Per-size measurement and the fail-fast size sweep.

use std::time::Instant;

use mmbench_matrix::matrix::{Matrix, MatrixError};
use mmbench_matrix::ops;

use crate::memory;
use crate::report;
use crate::result::BenchmarkResult;

/// Size of the untimed warm-up run.
pub const WARMUP_SIZE: usize = 32;

/// The fixed size list for the measured sweep.
pub const DEFAULT_SIZES: [usize; 4] = [64, 128, 256, 512];

/// Fill value for the left operand.
pub const LEFT_FILL: f64 = 1.5;
/// Fill value for the right operand.
pub const RIGHT_FILL: f64 = 2.5;

const BYTES_PER_MIB: f64 = 1_048_576.0;

/// Per-size failure, collapsed to the two buckets the table distinguishes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BenchError {
    /// Resource exhaustion while building the matrices.
    #[error("out of memory allocating {size}x{size} matrices")]
    OutOfMemory { size: usize },
    /// Anything else; the message feeds the error row.
    #[error("{0}")]
    Other(String),
}

fn classify(size: usize, err: MatrixError) -> BenchError {
    match err {
        MatrixError::Allocation { .. } => BenchError::OutOfMemory { size },
        other => BenchError::Other(other.to_string()),
    }
}

/// Measure one size: construct A (1.5-filled) and B (2.5-filled), both
/// `size x size`, multiply them, and record wall time and heap delta.
///
/// Heap numbers come from the counting allocator (see [`crate::memory`]).
/// A heap-compaction request before sampling is deliberately absent: with
/// no collector to prod, the live-byte count needs no settling. The
/// baseline is sampled before construction and the second sample after
/// the multiply, so the delta covers A + B + C.
pub fn benchmark(size: usize) -> Result<BenchmarkResult, BenchError> {
    let heap_before = memory::live_bytes();

    let a = Matrix::filled(size, size, LEFT_FILL).map_err(|e| classify(size, e))?;
    let b = Matrix::filled(size, size, RIGHT_FILL).map_err(|e| classify(size, e))?;

    let start = Instant::now();
    let product = ops::matmul(&a, &b).map_err(|e| classify(size, e))?;
    let execution_time_secs = start.elapsed().as_secs_f64();

    let heap_after = memory::live_bytes();
    // The product stays live through the second sample; the delta must
    // cover all three matrices.
    std::hint::black_box(&product);

    let delta_bytes = heap_after.saturating_sub(heap_before);
    Ok(BenchmarkResult {
        size,
        execution_time_secs,
        memory_used_mb: delta_bytes as f64 / BYTES_PER_MIB,
        peak_rss_kb: memory::peak_rss_kb(),
    })
}

/// One attempted size's outcome, as observed by the sweep callback.
#[derive(Debug)]
pub enum SweepEvent<'a> {
    /// The size completed; its result is appended to the collection.
    Completed(&'a BenchmarkResult),
    /// Allocation failed; the sweep stops here.
    OutOfMemory { size: usize },
    /// Any other failure; the sweep stops here.
    Failed { size: usize, message: String },
}

/// Fail-fast sweep, generic over the per-size function.
///
/// Invokes `bench_fn` for each size in order, appending successes and
/// notifying `on_event` once per attempted size. The first failure is
/// reported and ends the iteration; later (larger) sizes are not
/// attempted. Returns whatever was collected before the stop.
pub fn run_benchmarks_with<F, R>(
    sizes: &[usize],
    mut bench_fn: F,
    mut on_event: R,
) -> Vec<BenchmarkResult>
where
    F: FnMut(usize) -> Result<BenchmarkResult, BenchError>,
    R: FnMut(&SweepEvent<'_>),
{
    let mut results = Vec::with_capacity(sizes.len());
    for &size in sizes {
        match bench_fn(size) {
            Ok(result) => {
                on_event(&SweepEvent::Completed(&result));
                results.push(result);
            }
            Err(BenchError::OutOfMemory { .. }) => {
                on_event(&SweepEvent::OutOfMemory { size });
                break;
            }
            Err(BenchError::Other(message)) => {
                on_event(&SweepEvent::Failed { size, message });
                break;
            }
        }
    }
    results
}

/// Print the table header, then run the measured sweep over `sizes`,
/// printing one row per attempted size.
pub fn run_benchmarks(sizes: &[usize]) -> Vec<BenchmarkResult> {
    println!("{}", report::table_header());
    run_benchmarks_with(sizes, benchmark, |event| {
        println!("{}", report::table_row(event));
    })
}

/// Run the measured sweep without the incremental table, reporting failed
/// sizes as warnings on stderr. Used by the JSON and CSV output modes.
pub fn run_benchmarks_quiet(sizes: &[usize]) -> Vec<BenchmarkResult> {
    run_benchmarks_with(sizes, benchmark, |event| {
        if let Some(warning) = report::failure_warning(event) {
            eprintln!("{}", warning);
        }
    })
}

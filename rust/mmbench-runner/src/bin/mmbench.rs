//! Times naive dense matrix multiplication across fixed sizes.
//!
//! Runs one untimed warm-up, then the measured sweep over the hardcoded
//! size list, then prints the summary. `--format json|csv` swaps the
//! incremental table for a machine-readable report on stdout.

use clap::Parser;

use mmbench_runner::bench::{self, DEFAULT_SIZES, WARMUP_SIZE};
use mmbench_runner::report;
use mmbench_runner::result::{Report, Summary};

#[derive(Parser)]
#[command(name = "mmbench", version, about = "Naive dense matmul timing harness")]
struct Cli {
    /// Output format (text, json, or csv)
    #[arg(long, default_value = "text")]
    format: String,
}

fn main() {
    let cli = Cli::parse();

    match cli.format.as_str() {
        "json" => run_json(),
        "csv" => run_csv(),
        _ => run_text(),
    }
}

fn run_text() {
    println!("Warming up...");
    let _ = bench::benchmark(WARMUP_SIZE);
    println!();

    let results = bench::run_benchmarks(&DEFAULT_SIZES);

    if let Some(summary) = Summary::from_results(&results) {
        println!("\n");
        println!("{}", report::summary_block(&summary));
    }
}

fn run_json() {
    let _ = bench::benchmark(WARMUP_SIZE);
    let results = bench::run_benchmarks_quiet(&DEFAULT_SIZES);
    let report = Report::new(results);
    println!("{}", serde_json::to_string_pretty(&report).unwrap());
}

fn run_csv() {
    let _ = bench::benchmark(WARMUP_SIZE);
    let results = bench::run_benchmarks_quiet(&DEFAULT_SIZES);
    println!("{}", report::csv_header());
    for result in &results {
        println!("{}", report::csv_row(result));
    }
}

use anyhow::Result;
use clap::Parser;

use contention_report::report_runner::run_report;

/// Turn raw contention benchmark logs into CSV reports.
///
/// Reads `<prefix>.txt` and writes `<prefix>.csv`, the grouped reports,
/// and one averaged report per (load variable, load profile) pair.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Test-run prefix, without extension. For example `results0` reads
    /// `results0.txt`.
    prefix: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let cli = Cli::parse();
    run_report(&cli.prefix)
}

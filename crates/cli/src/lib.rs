//! CLI for the determinism benchmark report generator.
//!
//! Reads the results record left behind by the benchmark harness and writes
//! the markdown report plus the optional comparison chart next to it.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use detbench_report::ReportError;
use std::path::PathBuf;

/// Results directory used when none is given on the command line.
pub const DEFAULT_RESULTS_DIR: &str = "results/latest";

/// Determinism benchmark report generator.
#[derive(Parser, Debug)]
#[command(name = "detbench-report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing results.json (defaults to results/latest).
    pub results_dir: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI with the given arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the results directory cannot
/// be resolved or the record cannot be loaded.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let results_dir = resolve_results_dir(cli.results_dir)?;
    tracing::debug!(dir = %results_dir.display(), "resolved results directory");

    println!("Loading results from: {}", results_dir.display());
    let outcome = detbench_report::generate(&results_dir)?;

    println!("Report saved to: {}", outcome.report_path.display());
    match &outcome.plot_path {
        Some(path) => println!("Plot saved to: {}", path.display()),
        None => println!("Plot support not available, skipping chart"),
    }

    println!();
    println!("{}", "=".repeat(50));
    println!("BENCHMARK SUMMARY");
    println!("{}", "=".repeat(50));
    let overall = &outcome.record.overall;
    println!("Total scripts: {}", overall.total_scripts);
    println!("Deterministic: {}", overall.deterministic_scripts);
    println!("Overall score: {:.1}%", overall.overall_score);

    Ok(())
}

/// Pick the results directory: the explicit argument wins, otherwise fall
/// back to [`DEFAULT_RESULTS_DIR`], which must exist to be usable.
fn resolve_results_dir(arg: Option<PathBuf>) -> Result<PathBuf> {
    match arg {
        Some(dir) => Ok(dir),
        None => {
            let dir = PathBuf::from(DEFAULT_RESULTS_DIR);
            if dir.is_dir() {
                Ok(dir)
            } else {
                Err(ReportError::Configuration(dir).into())
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_positional_results_dir() {
        let cli = Cli::try_parse_from(["detbench-report", "runs/2025-11-02"]).unwrap();
        assert_eq!(cli.results_dir, Some(PathBuf::from("runs/2025-11-02")));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parses_verbose_flag() {
        let cli = Cli::try_parse_from(["detbench-report", "-v"]).unwrap();
        assert!(cli.results_dir.is_none());
        assert!(cli.verbose);
    }

    #[test]
    fn test_explicit_dir_skips_existence_check() {
        // A nonexistent explicit directory surfaces later as a missing
        // results file, not as a configuration error.
        let dir = resolve_results_dir(Some(PathBuf::from("does/not/exist"))).unwrap();
        assert_eq!(dir, PathBuf::from("does/not/exist"));
    }
}

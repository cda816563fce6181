// Copyright 2025 Detbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Determinism benchmark report generation.
//!
//! Converts the results record produced by an external benchmark harness
//! into two artifacts inside the results directory: a markdown report
//! (`REPORT.md`) and, when plot support is compiled in, a two-panel
//! comparison chart (`benchmark_plot.png`). Scores are formatted and
//! visualized as supplied; nothing is recomputed here.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> detbench_report::Result<()> {
//! let outcome = detbench_report::generate(Path::new("results/latest"))?;
//! println!("report at {}", outcome.report_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`record`] - The results record data model
//! - [`io`] - Reading the record and writing report artifacts
//! - [`markdown`] - Markdown report rendering
//! - [`chart`] - Chart rendering, gated behind the `plots` feature

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod chart;
pub mod error;
pub mod io;
pub mod markdown;
pub mod record;

pub use error::{ReportError, Result};
pub use record::ResultsRecord;

use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::info;

/// Artifacts produced by one pipeline run.
#[derive(Debug)]
pub struct ReportOutcome {
    /// The record the artifacts were generated from.
    pub record: ResultsRecord,
    /// Path of the written markdown report.
    pub report_path: PathBuf,
    /// Path of the chart image, when one was produced.
    pub plot_path: Option<PathBuf>,
}

/// Run the full report pipeline against a results directory.
///
/// Sequential steps: load `<dir>/results.json`, render and write
/// `<dir>/REPORT.md`, attempt the chart, and append the image reference to
/// the report when a chart was produced. Chart capability being absent is
/// not an error; any other failure aborts the pipeline.
pub fn generate(results_dir: &Path) -> Result<ReportOutcome> {
    let record = io::load_results(results_dir)?;
    let markdown = markdown::render(&record, Utc::now());
    let report_path = io::write_report(results_dir, &markdown)?;
    info!(path = %report_path.display(), "report written");

    let plot_path = chart::render_chart(&record, results_dir);
    if plot_path.is_some() {
        io::append_plot_reference(&report_path)?;
    }

    Ok(ReportOutcome {
        record,
        report_path,
        plot_path,
    })
}

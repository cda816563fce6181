// Copyright 2025 Detbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Filesystem I/O for report artifacts.
//!
//! All artifacts live inside the caller-supplied results directory under
//! fixed names; nothing else on disk is touched.

use crate::error::{ReportError, Result};
use crate::record::ResultsRecord;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Conventional name of the harness results file inside a results directory.
pub const RESULTS_FILE: &str = "results.json";

/// Name of the generated markdown report.
pub const REPORT_FILE: &str = "REPORT.md";

/// Name of the generated chart image.
pub const PLOT_FILE: &str = "benchmark_plot.png";

/// Load and parse the results record from `<dir>/results.json`.
pub fn load_results(dir: &Path) -> Result<ResultsRecord> {
    let path = dir.join(RESULTS_FILE);
    if !path.is_file() {
        return Err(ReportError::MissingResults(path));
    }
    debug!(path = %path.display(), "reading results file");
    let content = fs::read_to_string(&path)?;
    serde_json::from_str(&content).map_err(|source| ReportError::MalformedResults { path, source })
}

/// Write the markdown report to `<dir>/REPORT.md`, replacing any previous one.
pub fn write_report(dir: &Path, markdown: &str) -> Result<PathBuf> {
    let path = dir.join(REPORT_FILE);
    fs::write(&path, markdown)?;
    debug!(path = %path.display(), bytes = markdown.len(), "wrote report");
    Ok(path)
}

/// Append the chart image reference to an already-written report.
pub fn append_plot_reference(report_path: &Path) -> Result<()> {
    let mut file = OpenOptions::new().append(true).open(report_path)?;
    write!(file, "\n## Visualization\n\n![Benchmark Results]({PLOT_FILE})\n")?;
    debug!(path = %report_path.display(), "appended plot reference");
    Ok(())
}

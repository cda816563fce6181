// Copyright 2025 Detbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for report generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating report artifacts.
#[derive(Debug, Error)]
pub enum ReportError {
    /// No results directory could be resolved.
    #[error("results directory {0} does not exist; pass a results directory or run the benchmark harness first")]
    Configuration(PathBuf),

    /// The results file is absent from the results directory.
    #[error("results file not found: {0}")]
    MissingResults(PathBuf),

    /// The results file exists but could not be parsed.
    #[error("malformed results file {path}: {source}")]
    MalformedResults {
        /// Path of the offending file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem error while reading or writing artifacts.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

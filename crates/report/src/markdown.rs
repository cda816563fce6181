// Copyright 2025 Detbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Markdown report rendering.
//!
//! [`render`] is a pure function of the record and the injected generation
//! timestamp: two calls with identical arguments produce byte-identical
//! output. Scripts appear in record order in every section.

use crate::record::ResultsRecord;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Width of the ASCII score bar, in characters between the brackets.
const BAR_WIDTH: usize = 30;

/// Width of the rule under the performance table header.
const RULE_WIDTH: usize = 60;

/// Render the full markdown report for a results record.
pub fn render(record: &ResultsRecord, generated_at: DateTime<Utc>) -> String {
    let mut output = String::new();

    writeln!(output, "# Determinism Benchmark Report").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "**Generated:** {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    )
    .unwrap();
    writeln!(output, "**Benchmark Run:** {}", record.benchmark_info.timestamp).unwrap();
    writeln!(
        output,
        "**Iterations per script:** {}",
        record.benchmark_info.iterations
    )
    .unwrap();
    writeln!(output).unwrap();

    writeln!(output, "## Overall Summary").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "| Metric | Value |").unwrap();
    writeln!(output, "|--------|-------|").unwrap();
    writeln!(output, "| Scripts Tested | {} |", record.overall.total_scripts).unwrap();
    writeln!(
        output,
        "| Fully Deterministic | {} |",
        record.overall.deterministic_scripts
    )
    .unwrap();
    writeln!(output, "| Overall Score | {:.1}% |", record.overall.overall_score).unwrap();
    writeln!(output).unwrap();

    writeln!(output, "## Determinism Score by Script").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "```").unwrap();
    for (name, result) in record.scripts.iter() {
        writeln!(output, "{:<30} {}", name, ascii_bar(result.determinism_score)).unwrap();
    }
    writeln!(output, "```").unwrap();
    writeln!(output).unwrap();

    writeln!(output, "## Detailed Results").unwrap();
    writeln!(output).unwrap();
    for (name, result) in record.scripts.iter() {
        let verdict = if result.is_deterministic() { "PASS" } else { "FAIL" };
        writeln!(output, "### {} [{}]", name, verdict).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Metric | Value |").unwrap();
        writeln!(output, "|--------|-------|").unwrap();
        writeln!(output, "| Status | {} |", result.status).unwrap();
        writeln!(
            output,
            "| Determinism Score | {:.1}% |",
            result.determinism_score
        )
        .unwrap();
        writeln!(output, "| Iterations | {} |", result.iterations).unwrap();
        writeln!(output, "| Matching Outputs | {} |", result.match_count).unwrap();
        writeln!(output, "| Unique Outputs | {} |", result.unique_outputs).unwrap();
        writeln!(
            output,
            "| Avg Execution Time | {:.3}s |",
            result.avg_time_seconds
        )
        .unwrap();
        writeln!(output).unwrap();
    }

    writeln!(output, "## Performance Summary").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "```").unwrap();
    writeln!(output, "{:<30} {:>12} {:>15}", "Script", "Avg Time", "Status").unwrap();
    writeln!(output, "{}", "-".repeat(RULE_WIDTH)).unwrap();
    for (name, result) in record.scripts.iter() {
        let avg_time = format!("{:.3}s", result.avg_time_seconds);
        writeln!(output, "{:<30} {:>12} {:>15}", name, avg_time, result.status).unwrap();
    }
    writeln!(output, "```").unwrap();
    writeln!(output).unwrap();

    writeln!(output, "## Methodology").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "Each script was executed multiple times with identical inputs."
    )
    .unwrap();
    writeln!(
        output,
        "Outputs were hashed (SHA-256) and compared to measure consistency."
    )
    .unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "- **Determinism Score**: Percentage of runs matching the first run"
    )
    .unwrap();
    writeln!(
        output,
        "- **Unique Outputs**: Number of distinct outputs across all runs"
    )
    .unwrap();
    writeln!(
        output,
        "- **DETERMINISTIC**: 100% of runs produced identical output"
    )
    .unwrap();

    output
}

/// Render a fixed-width ASCII bar for a 0-100 score.
///
/// The fill count is clipped to `[0, BAR_WIDTH]` so out-of-range scores in
/// malformed input cannot break the fixed-width alignment.
fn ascii_bar(score: f64) -> String {
    let filled = ((score / 100.0) * BAR_WIDTH as f64).floor() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}] {score:.1}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

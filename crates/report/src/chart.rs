// Copyright 2025 Detbench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Chart rendering for benchmark results.
//!
//! Plot support is an optional capability gated behind the `plots` feature.
//! [`render_chart`] never fails the pipeline: whether the feature is
//! compiled out or the backend cannot draw on this host, it reports "no
//! artifact produced" and the caller carries on with the text report.

use crate::record::ResultsRecord;
use std::path::{Path, PathBuf};

/// Bar color for scripts at exactly 100%.
#[cfg(feature = "plots")]
const SCORE_PASS_COLOR: plotters::style::RGBColor = plotters::style::RGBColor(0x2e, 0xcc, 0x71);

/// Bar color for every other score.
#[cfg(feature = "plots")]
const SCORE_FAIL_COLOR: plotters::style::RGBColor = plotters::style::RGBColor(0xe7, 0x4c, 0x3c);

/// Bar color for the execution-time panel.
#[cfg(feature = "plots")]
const TIME_COLOR: plotters::style::RGBColor = plotters::style::RGBColor(0x34, 0x98, 0xdb);

/// Render the two-panel comparison chart to `<dir>/benchmark_plot.png`.
///
/// The left panel shows per-script determinism scores with a reference line
/// at the 100% target; the right panel shows average execution times. Bars
/// follow record order in both panels. Returns the image path, or `None`
/// when no chart was produced (empty record, or a backend failure, which is
/// logged and recovered).
#[cfg(feature = "plots")]
pub fn render_chart(record: &ResultsRecord, dir: &Path) -> Option<PathBuf> {
    use tracing::{info, warn};

    if record.scripts.is_empty() {
        info!("record contains no scripts, skipping chart");
        return None;
    }

    let path = dir.join(crate::io::PLOT_FILE);
    match draw_chart(record, &path) {
        Ok(()) => {
            info!(path = %path.display(), "chart written");
            Some(path)
        }
        Err(e) => {
            warn!("chart rendering failed, continuing without it: {}", e);
            None
        }
    }
}

#[cfg(feature = "plots")]
fn draw_chart(record: &ResultsRecord, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    use plotters::prelude::*;

    let names: Vec<&str> = record.scripts.iter().map(|(name, _)| name).collect();
    let scores: Vec<f64> = record
        .scripts
        .iter()
        .map(|(_, result)| result.determinism_score)
        .collect();
    let times: Vec<f64> = record
        .scripts
        .iter()
        .map(|(_, result)| result.avg_time_seconds)
        .collect();
    let count = names.len();

    let root = BitMapBackend::new(path, (1400, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let (score_area, time_area) = root.split_horizontally(700);

    // Left panel: determinism score, green only at exactly 100%.
    let mut score_chart = ChartBuilder::on(&score_area)
        .caption("Determinism Score by Script", ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(170)
        .build_cartesian_2d(0.0..105.0, (0..count).into_segmented())?;
    score_chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Determinism Score (%)")
        .y_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) => names[*i].to_string(),
            _ => String::new(),
        })
        .draw()?;

    score_chart.draw_series(scores.iter().enumerate().map(|(i, &score)| {
        let color = if score == 100.0 {
            SCORE_PASS_COLOR
        } else {
            SCORE_FAIL_COLOR
        };
        let mut bar = Rectangle::new(
            [
                (0.0, SegmentValue::Exact(i)),
                (score, SegmentValue::Exact(i + 1)),
            ],
            color.filled(),
        );
        bar.set_margin(6, 6, 0, 0);
        bar
    }))?;

    score_chart
        .draw_series(LineSeries::new(
            vec![
                (100.0, SegmentValue::Exact(0)),
                (100.0, SegmentValue::Exact(count)),
            ],
            GREEN.stroke_width(1),
        ))?
        .label("Target (100%)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.filled()));
    score_chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    score_chart.draw_series(scores.iter().enumerate().map(|(i, &score)| {
        Text::new(
            format!("{:.0}%", score),
            (score + 1.0, SegmentValue::CenterOf(i)),
            ("sans-serif", 12).into_font(),
        )
    }))?;

    // Right panel: average execution time, single color.
    let max_time = times.iter().cloned().fold(0.0f64, f64::max);
    let time_axis_end = if max_time > 0.0 { max_time * 1.15 } else { 1.0 };

    let mut time_chart = ChartBuilder::on(&time_area)
        .caption("Execution Time by Script", ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(170)
        .build_cartesian_2d(0.0..time_axis_end, (0..count).into_segmented())?;
    time_chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Average Execution Time (seconds)")
        .y_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) => names[*i].to_string(),
            _ => String::new(),
        })
        .draw()?;

    time_chart.draw_series(times.iter().enumerate().map(|(i, &time)| {
        let mut bar = Rectangle::new(
            [
                (0.0, SegmentValue::Exact(i)),
                (time, SegmentValue::Exact(i + 1)),
            ],
            TIME_COLOR.filled(),
        );
        bar.set_margin(6, 6, 0, 0);
        bar
    }))?;

    time_chart.draw_series(times.iter().enumerate().map(|(i, &time)| {
        Text::new(
            format!("{:.2}s", time),
            (time + time_axis_end * 0.01, SegmentValue::CenterOf(i)),
            ("sans-serif", 12).into_font(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Chart rendering without plot support compiled in.
///
/// Always reports "no artifact produced". Absence of the capability is a
/// normal branch for callers, not a fault.
#[cfg(not(feature = "plots"))]
pub fn render_chart(_record: &ResultsRecord, _dir: &Path) -> Option<PathBuf> {
    tracing::info!("plot support not compiled in (enable the `plots` feature), skipping chart");
    None
}

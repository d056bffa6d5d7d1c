//! PNG line charts of monthly activity series.
//!
//! One chart per metric, one line per person. The x-axis is the ascending
//! union of month keys across all series; a series draws only the months it
//! contains, so gaps in a person's timeline connect straight across.

use std::collections::BTreeSet;
use std::path::Path;

use activity_core::error::{ActivityError, Result};
use activity_data::report::PersonSeries;
use plotters::prelude::*;
use tracing::info;

/// Chart canvas size in pixels.
const CHART_SIZE: (u32, u32) = (1280, 720);

// ── Public API ────────────────────────────────────────────────────────────────

/// Render one line per series into a PNG at `path`.
///
/// `title` becomes the chart caption and `y_desc` the y-axis description;
/// the x-axis is labeled with month keys. Series are labeled by person
/// identifier in an upper-left legend.
pub fn render_monthly_chart(
    path: &Path,
    title: &str,
    y_desc: &str,
    series: &[PersonSeries],
) -> Result<()> {
    let months = month_axis(series);
    let y_max = max_count(series);

    draw(path, title, y_desc, series, &months, y_max).map_err(|source| ActivityError::Render {
        path: path.to_path_buf(),
        message: source.to_string(),
    })?;

    info!("Rendered chart {}", path.display());
    Ok(())
}

// ── Axis helpers ──────────────────────────────────────────────────────────────

/// Ascending union of month keys across all series.
fn month_axis(series: &[PersonSeries]) -> Vec<String> {
    series
        .iter()
        .flat_map(|s| s.points.iter().map(|(month, _)| month.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Largest count across all series, for the y-axis upper bound.
fn max_count(series: &[PersonSeries]) -> u64 {
    series
        .iter()
        .flat_map(|s| s.points.iter().map(|&(_, count)| count))
        .max()
        .unwrap_or(0)
}

/// Map a series' month-keyed points onto x-axis indices.
fn indexed_points(series: &PersonSeries, months: &[String]) -> Vec<(usize, u64)> {
    series
        .points
        .iter()
        .filter_map(|(month, count)| {
            months
                .binary_search(month)
                .ok()
                .map(|index| (index, *count))
        })
        .collect()
}

// ── Drawing ───────────────────────────────────────────────────────────────────

fn draw(
    path: &Path,
    title: &str,
    y_desc: &str,
    series: &[PersonSeries],
    months: &[String],
    y_max: u64,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(0..months.len().max(1), 0u64..y_max + 1)?;

    chart
        .configure_mesh()
        .x_desc("Month")
        .y_desc(y_desc)
        .x_labels(months.len().clamp(1, 12))
        .x_label_formatter(&|index| months.get(*index).cloned().unwrap_or_default())
        .draw()?;

    for (i, person) in series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(
                indexed_points(person, months),
                color.stroke_width(2),
            ))?
            .label(person.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.4))
        .draw()?;

    root.present()?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Render the sampled curve as a PNG line plot.
//!
//! Plotters draws into a `BitMapBackend`; the x axis is labeled "time" and
//! the y axis "y". An existing file at the destination is overwritten, so a
//! rerun into the same run directory replaces the previous plot.

use std::path::Path;

use plotters::prelude::*;

use crate::domain::SampleSeries;
use crate::error::AppError;

/// Output image size in pixels.
const PLOT_SIZE: (u32, u32) = (800, 600);

/// Render `series` as a line plot and write it to `path`.
///
/// Fails if the series is empty or the destination cannot be written (e.g.
/// its directory does not exist).
pub fn render_line_png(series: &SampleSeries, path: &Path) -> Result<(), AppError> {
    if series.is_empty() {
        return Err(AppError::render("Cannot render an empty series."));
    }
    if series.x.len() != series.y.len() {
        return Err(AppError::render(format!(
            "Series length mismatch: {} x values vs {} y values.",
            series.x.len(),
            series.y.len()
        )));
    }

    draw_chart(series, path).map_err(|e| {
        AppError::render(format!("Failed to render plot '{}': {e}", path.display()))
    })
}

fn draw_chart(series: &SampleSeries, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (x0, x1) = padded_bounds(&series.x)?;
    let (y0, y1) = padded_bounds(&series.y)?;

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc("time")
        .y_desc("y")
        .label_style(("sans-serif", 14))
        .draw()?;

    chart.draw_series(LineSeries::new(series.points(), &BLUE))?;

    root.present()?;
    Ok(())
}

/// Axis bounds for a value list, padded when the range is degenerate.
///
/// A single-point or flat series has zero extent; Plotters requires
/// `max > min` to build the coordinate system, so the range is widened
/// symmetrically in that case.
fn padded_bounds(values: &[f64]) -> Result<(f64, f64), Box<dyn std::error::Error>> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }

    if !(lo.is_finite() && hi.is_finite()) {
        return Err("non-finite values in series".into());
    }
    if (hi - lo).abs() < 1e-12 {
        lo -= 0.5;
        hi += 0.5;
    }
    Ok((lo, hi))
}

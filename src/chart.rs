//! Bar chart rendering for the guess distribution.
//!
//! Charts are drawn with the [`plotters`] bitmap backend and saved as PNG
//! at a fixed 1200x800 resolution. Axis and bar labels need a usable
//! sans-serif font at render time.

use crate::tally::GuessTally;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Bar fill color, RGB (96, 160, 94).
const BAR_COLOR: RGBColor = RGBColor(96, 160, 94);

const CHART_WIDTH: u32 = 1200;
const CHART_HEIGHT: u32 = 800;

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),
}

type Result<T> = core::result::Result<T, ChartError>;

/// Render the guess distribution as an annotated bar chart PNG.
///
/// X-axis is guess-count ("Guesses per answer"), Y-axis is how many answers
/// took that many guesses ("Words solved"). Each bar carries its frequency
/// as a label above it. An empty tally still produces a chart, with axes
/// and no bars.
pub fn render_guess_chart(tally: &GuessTally, output_path: &Path) -> Result<()> {
    let max_guesses = tally.max_guess_count().unwrap_or(0);
    let max_frequency = tally.max_frequency().unwrap_or(0);

    info!(
        action = "start",
        component = "chart",
        output_path = ?output_path,
        bars = tally.iter().count(),
        "Rendering guess distribution chart"
    );

    let root = BitMapBackend::new(output_path, (CHART_WIDTH, CHART_HEIGHT));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    // Headroom above the tallest bar so its label stays inside the plot
    let x_range = 0.0..(max_guesses as f64 + 1.0);
    let y_range = 0.0..(max_frequency as f64 * 1.1).max(1.0);

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .disable_mesh()
        .x_desc("Guesses per answer")
        .x_label_style(("sans-serif", 35))
        .y_desc("Words solved")
        .y_label_style(("sans-serif", 35))
        .label_style(("sans-serif", 25))
        .x_label_formatter(&|x| format!("{:.0}", x.round()))
        .y_label_formatter(&|y| format!("{:.0}", y.round()))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(tally.iter().map(|(guesses, frequency)| {
            let center = guesses as f64;
            Rectangle::new(
                [(center - 0.4, 0.0), (center + 0.4, frequency as f64)],
                BAR_COLOR.filled(),
            )
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    // Frequency labels, centered just above each bar
    let label_style = TextStyle::from(("sans-serif", 30))
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart_context
        .draw_series(tally.iter().map(|(guesses, frequency)| {
            Text::new(
                frequency.to_string(),
                (guesses as f64, frequency as f64),
                label_style.clone(),
            )
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    info!(
        action = "done",
        component = "chart",
        output_path = ?output_path,
        "Chart saved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tally::tally_lines;

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn renders_png_for_empty_tally() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("empty.png");

        render_guess_chart(&GuessTally::new(), &output_path).unwrap();

        assert!(output_path.exists());
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn renders_png_for_simple_tally() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("results.png");

        let tally = tally_lines(["a, b, c", "d, e", "f, g, h"]);
        render_guess_chart(&tally, &output_path).unwrap();

        assert!(output_path.exists());
    }
}

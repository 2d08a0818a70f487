use std::path::PathBuf;

use chrono::NaiveDate;
use plotters::prelude::*;
use thiserror::Error;
use uuid::Uuid;

use crate::models::Candle;

const CHART_WIDTH: u32 = 1024;
const CHART_HEIGHT: u32 = 768;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot chart an empty series")]
    EmptySeries,
    #[error("failed to render chart: {0}")]
    Backend(String),
    #[error("chart file io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Unique scratch path for one render. Every invocation gets its own file
/// so interleaved commands never touch each other's artifact.
fn temp_chart_path() -> PathBuf {
    std::env::temp_dir().join(format!("stock_chart_{}.png", Uuid::new_v4()))
}

/// Axis ranges for a close-price plot, padded so degenerate series
/// (a single session, a flat line) still produce a drawable area.
fn padded_ranges(candles: &[Candle]) -> Option<((NaiveDate, NaiveDate), (f64, f64))> {
    let x_min = candles.first()?.date;
    let mut x_max = candles.last()?.date;
    if x_min == x_max {
        x_max = x_max + chrono::Duration::days(1);
    }

    let min_price = candles.iter().map(|c| c.close).fold(f64::INFINITY, f64::min);
    let max_price = candles.iter().map(|c| c.close).fold(f64::NEG_INFINITY, f64::max);

    let price_range = (max_price - min_price).max(1e-8);
    let padding = price_range * 0.1;
    let y_min = (min_price - padding).max(0.0);
    let y_max = max_price + padding;

    Some(((x_min, x_max), (y_min, y_max)))
}

/// Generate a year-to-date close-price chart as PNG bytes.
///
/// The plot is a dated line with circle markers, gridded mesh and rotated
/// ISO date labels. Rendering goes through a uniquely named temporary file
/// which is removed before returning.
pub fn render_close_chart(
    candles: &[Candle],
    name: &str,
    ticker: &str,
) -> Result<Vec<u8>, RenderError> {
    let ((x_min, x_max), (y_min, y_max)) =
        padded_ranges(candles).ok_or(RenderError::EmptySeries)?;

    let temp_file = temp_chart_path();

    {
        let backend = BitMapBackend::new(&temp_file, (CHART_WIDTH, CHART_HEIGHT));
        let root = backend.into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| RenderError::Backend(format!("Failed to fill canvas: {}", e)))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("{} ({}) Year-to-Date Close", name, ticker),
                ("sans-serif", 32.0).into_font(),
            )
            .margin(15)
            .x_label_area_size(70)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| RenderError::Backend(format!("Failed to build chart: {}", e)))?;

        chart
            .configure_mesh()
            .x_labels(10)
            .x_label_formatter(&|d| d.format("%Y-%m-%d").to_string())
            .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
            .x_desc("Date")
            .y_desc("Close")
            .draw()
            .map_err(|e| RenderError::Backend(format!("Failed to draw mesh: {}", e)))?;

        chart
            .draw_series(LineSeries::new(
                candles.iter().map(|c| (c.date, c.close)),
                &BLUE,
            ))
            .map_err(|e| RenderError::Backend(format!("Failed to draw line: {}", e)))?;

        chart
            .draw_series(
                candles
                    .iter()
                    .map(|c| Circle::new((c.date, c.close), 3, BLUE.filled())),
            )
            .map_err(|e| RenderError::Backend(format!("Failed to draw points: {}", e)))?;

        root.present()
            .map_err(|e| RenderError::Backend(format!("Failed to render chart: {}", e)))?;
    }

    let image_data = std::fs::read(&temp_file)?;
    let _ = std::fs::remove_file(&temp_file);

    Ok(image_data)
}

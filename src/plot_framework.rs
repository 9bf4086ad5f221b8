// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::IntoDrawingArea;
use plotters::element::Circle;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, PLATE_COLORS, PLOT_HEIGHT,
    PLOT_WIDTH, SCATTER_POINT_SIZE,
};

/// One plate's points on a scatter plot.
#[derive(Clone)]
pub struct ScatterSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
}

/// Per-plate color, cycled when more plates than palette entries are drawn.
pub fn plate_color(plate_index: usize) -> RGBColor {
    PLATE_COLORS[plate_index % PLATE_COLORS.len()]
}

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Padded axis ranges covering every point of every series. None when the
/// series hold no points at all.
pub fn series_bounds(series: &[ScatterSeries]) -> Option<(Range<f64>, Range<f64>)> {
    let xs = Array1::from_iter(series.iter().flat_map(|s| s.data.iter().map(|p| p.0)));
    let ys = Array1::from_iter(series.iter().flat_map(|s| s.data.iter().map(|p| p.1)));

    let x_min = *xs.min().ok()?;
    let x_max = *xs.max().ok()?;
    let y_min = *ys.min().ok()?;
    let y_max = *ys.max().ok()?;

    let (x_lo, x_hi) = calculate_range(x_min, x_max);
    let (y_lo, y_hi) = calculate_range(y_min, y_max);
    Some((x_lo..x_hi, y_lo..y_hi))
}

/// Draw a scatter plot with one colored point cloud per series and a legend
/// in the upper right, then write it to `output_path` as a PNG.
pub fn draw_scatter_plot(
    output_path: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
    x_range: Range<f64>,
    y_range: Range<f64>,
    series: &[ScatterSeries],
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .x_labels(10)
        .y_labels(8)
        .light_line_style(&WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    for s in series {
        let color = s.color;
        chart
            .draw_series(
                s.data
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), SCATTER_POINT_SIZE, color.filled())),
            )?
            .label(s.label.clone())
            .legend(move |(x, y)| Circle::new((x + 10, y), SCATTER_POINT_SIZE, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", FONT_SIZE_LEGEND))
        .draw()?;

    root_area.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_range_pads_and_orders() {
        let (lo, hi) = calculate_range(0.0, 10.0);
        assert!(lo < 0.0 && hi > 10.0);
        let (lo, hi) = calculate_range(10.0, 0.0);
        assert!(lo < 0.0 && hi > 10.0);
    }

    #[test]
    fn calculate_range_widens_degenerate_spans() {
        let (lo, hi) = calculate_range(2.0, 2.0);
        assert!(lo < 2.0 && hi > 2.0);
    }

    #[test]
    fn series_bounds_covers_all_series() {
        let series = vec![
            ScatterSeries {
                data: vec![(0.0, 1.0), (2.0, 5.0)],
                label: "a".to_string(),
                color: plate_color(0),
            },
            ScatterSeries {
                data: vec![(4.0, -1.0)],
                label: "b".to_string(),
                color: plate_color(1),
            },
        ];
        let (x_range, y_range) = series_bounds(&series).expect("bounds");
        assert!(x_range.start < 0.0 && x_range.end > 4.0);
        assert!(y_range.start < -1.0 && y_range.end > 5.0);
    }

    #[test]
    fn series_bounds_of_empty_series_is_none() {
        assert!(series_bounds(&[]).is_none());
        let empty = ScatterSeries {
            data: Vec::new(),
            label: "empty".to_string(),
            color: plate_color(0),
        };
        assert!(series_bounds(&[empty]).is_none());
    }
}

// src/plot_framework.rs

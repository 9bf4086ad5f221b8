// src/plot_functions/plot_velocities.rs

use std::error::Error;
use std::path::Path;

use crate::error::AnalysisError;
use crate::plot_framework::{draw_scatter_plot, plate_color, series_bounds, ScatterSeries};

/// Generates the per-row velocity scatter plot: row numbers 1..=16 on the x
/// axis, one colored series per plate.
pub fn plot_velocities(
    velocities: &[(String, Vec<f64>)],
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let series: Vec<ScatterSeries> = velocities
        .iter()
        .enumerate()
        .map(|(plate_index, (label, rows))| ScatterSeries {
            data: rows
                .iter()
                .enumerate()
                .map(|(row, &velocity)| ((row + 1) as f64, velocity))
                .collect(),
            label: label.clone(),
            color: plate_color(plate_index),
        })
        .collect();

    let Some((x_range, y_range)) = series_bounds(&series) else {
        return Err(Box::new(AnalysisError::MissingData(
            "no velocities to plot".to_string(),
        )));
    };

    draw_scatter_plot(
        output_path,
        "Velocity in every row",
        "Row number",
        "Velocity [well position/hour]",
        x_range,
        y_range,
        &series,
    )
}

// src/plot_functions/plot_velocities.rs

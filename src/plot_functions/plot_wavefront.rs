// src/plot_functions/plot_wavefront.rs

use std::error::Error;
use std::path::Path;

use crate::error::AnalysisError;
use crate::plot_framework::{draw_scatter_plot, plate_color, series_bounds, ScatterSeries};
use crate::types::Trajectory;

/// Generates the multi-plate wavefront scatter plot: position against
/// elapsed hours for one row, one colored series per plate.
pub fn plot_wavefront(
    trajectories: &[(String, Trajectory)],
    row: usize,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let series: Vec<ScatterSeries> = trajectories
        .iter()
        .enumerate()
        .map(|(plate_index, (label, trajectory))| ScatterSeries {
            data: trajectory
                .iter()
                .map(|point| (point.hours, point.well as f64))
                .collect(),
            label: label.clone(),
            color: plate_color(plate_index),
        })
        .collect();

    let Some((x_range, y_range)) = series_bounds(&series) else {
        return Err(Box::new(AnalysisError::MissingData(format!(
            "no wavefront points found for row {} on any plate",
            row + 1
        ))));
    };

    draw_scatter_plot(
        output_path,
        "Position of the bacterial wavefront over time",
        "Time in hours",
        "Position",
        x_range,
        y_range,
        &series,
    )
}

// src/plot_functions/plot_wavefront.rs

// src/modes.rs
//
// The four analysis modes as pure, config-driven entry points. The
// interactive shell in main.rs only gathers parameters and prints reports;
// everything below takes an explicit configuration and owns its own
// transient state.

use std::error::Error;
use std::path::PathBuf;

use crate::constants::ROW_COUNT;
use crate::data_analysis::statistics::{correlation, slope_fit};
use crate::data_analysis::wavefront::{extract, halve};
use crate::data_input::plate::{Plate, PlateFormat};
use crate::data_input::velocity::read_row_velocities;
use crate::error::AnalysisError;
use crate::plot_functions::plot_velocities::plot_velocities;
use crate::plot_functions::plot_wavefront::plot_wavefront;
use crate::types::{RowCorrelation, SpeedEstimate, Trajectory};

/// Mode 1: wavefront position over time for one row across multiple plates.
pub struct WavefrontPlotConfig {
    pub plate_dirs: Vec<PathBuf>,
    /// 0-based row index.
    pub row: usize,
    pub output: PathBuf,
}

pub fn wavefront_plot(config: &WavefrontPlotConfig) -> Result<(), Box<dyn Error>> {
    let mut trajectories: Vec<(String, Trajectory)> = Vec::with_capacity(config.plate_dirs.len());
    for dir in &config.plate_dirs {
        let plate = Plate::open(dir)?;
        let (first, last) = plate.timestep_range()?;
        println!(
            "Plate '{}': timesteps {}..={}",
            plate.label, first, last
        );
        let trajectory = extract(&plate, config.row, first, last)?;
        println!("  {} wavefront points extracted.", trajectory.len());
        trajectories.push((plate.label.clone(), trajectory));
    }
    plot_wavefront(&trajectories, config.row, &config.output)?;
    println!("Wavefront plot saved as '{}'.", config.output.display());
    Ok(())
}

/// Mode 2: row-wise Pearson correlation between two plates.
pub struct CorrelationConfig {
    pub plate_dir1: PathBuf,
    pub plate_dir2: PathBuf,
}

pub fn correlation_report(config: &CorrelationConfig) -> Result<Vec<RowCorrelation>, Box<dyn Error>> {
    let plate1 = Plate::open(&config.plate_dir1)?;
    let plate2 = Plate::open(&config.plate_dir2)?;
    let range1 = plate1.timestep_range()?;
    let range2 = plate2.timestep_range()?;

    let mut report = Vec::with_capacity(ROW_COUNT);
    for row in 0..ROW_COUNT {
        let trajectory1 = aligned_trajectory(&plate1, row, range1)?;
        let trajectory2 = aligned_trajectory(&plate2, row, range2)?;
        report.push(RowCorrelation {
            row,
            coefficient: correlation(&trajectory1, &trajectory2),
        });
    }
    Ok(report)
}

/// Extract one row's trajectory over the plate's full range, resampled to
/// the newer reader's cadence when the plate is a Fluostar one. The
/// correlation itself then truncates the pair to the shorter series.
fn aligned_trajectory(
    plate: &Plate,
    row: usize,
    (first, last): (usize, usize),
) -> Result<Trajectory, AnalysisError> {
    let trajectory = extract(plate, row, first, last)?;
    Ok(match plate.format {
        PlateFormat::FormatB => halve(&trajectory),
        PlateFormat::FormatA => trajectory,
    })
}

/// Mode 3: per-row velocities for multiple plates, read from precomputed
/// `<plate>.txt` files in one folder.
pub struct VelocityPlotConfig {
    pub velocity_dir: PathBuf,
    pub plate_names: Vec<String>,
    pub output: PathBuf,
}

pub fn velocity_plot(config: &VelocityPlotConfig) -> Result<(), Box<dyn Error>> {
    let mut velocities: Vec<(String, Vec<f64>)> = Vec::with_capacity(config.plate_names.len());
    for name in &config.plate_names {
        let path = config.velocity_dir.join(format!("{name}.txt"));
        velocities.push((name.clone(), read_row_velocities(&path)?));
    }
    plot_velocities(&velocities, &config.output)?;
    println!("Velocity plot saved as '{}'.", config.output.display());
    Ok(())
}

/// Mode 4: wavefront speed for one row over an explicit timestep window.
pub struct SpeedConfig {
    pub plate_dir: PathBuf,
    /// 0-based row index.
    pub row: usize,
    pub first_timestep: usize,
    pub last_timestep: usize,
}

pub fn speed_report(config: &SpeedConfig) -> Result<SpeedEstimate, Box<dyn Error>> {
    let plate = Plate::open(&config.plate_dir)?;
    let trajectory = extract(&plate, config.row, config.first_timestep, config.last_timestep)?;
    let (slope, stderr) = slope_fit(&trajectory)?;
    Ok(SpeedEstimate { slope, stderr })
}

// src/modes.rs

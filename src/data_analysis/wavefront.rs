// src/data_analysis/wavefront.rs

use log::warn;

use crate::constants::{OD_THRESHOLD, ROW_COUNT};
use crate::data_input::plate::Plate;
use crate::data_input::snapshot::read_snapshot_rows;
use crate::data_input::timeline::Timeline;
use crate::error::AnalysisError;
use crate::types::{Trajectory, TrajectoryPoint};

/// First well (scanning from position 0 upward) at or below the OD
/// threshold, i.e. the wavefront position for this timestep. None when the
/// front has not entered the row yet.
pub fn wavefront_position(row_od: &[f64]) -> Option<usize> {
    row_od.iter().position(|&od| od <= OD_THRESHOLD)
}

/// Track the wavefront for one row across timesteps `first..=last`, stepping
/// at the plate format's cadence.
///
/// Timesteps where no well has crossed the threshold contribute no
/// trajectory point. The skip is logged per timestep so the compressed time
/// axis stays visible to the operator instead of silently shifting.
pub fn extract(
    plate: &Plate,
    row: usize,
    first: usize,
    last: usize,
) -> Result<Trajectory, AnalysisError> {
    if row >= ROW_COUNT {
        return Err(AnalysisError::MissingData(format!(
            "row index {row} out of range, plate has {ROW_COUNT} rows"
        )));
    }

    let timeline = Timeline::new(plate, first)?;
    let stride = plate.format.timestep_stride();

    let mut trajectory = Trajectory::new();
    let mut timestep = first;
    while timestep <= last {
        let rows = read_snapshot_rows(plate, timestep)?;
        match wavefront_position(&rows[row]) {
            Some(well) => trajectory.push(TrajectoryPoint {
                hours: timeline.elapsed_hours(timestep)?,
                well,
            }),
            None => warn!(
                "plate '{}' row {} timestep {}: no well at or below OD {}, timestep skipped",
                plate.label,
                row + 1,
                timestep,
                OD_THRESHOLD
            ),
        }
        timestep += stride;
    }
    Ok(trajectory)
}

/// Keep only the odd-indexed points of a trajectory. Fluostar's usable OD
/// cadence is roughly double the newer reader's, so halving brings the two
/// near the same sampling density before pairing. This is an approximate
/// resampling; it does not align timestamps exactly.
pub fn halve(trajectory: &Trajectory) -> Trajectory {
    trajectory
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == 1)
        .map(|(_, point)| *point)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(hours: f64, well: usize) -> TrajectoryPoint {
        TrajectoryPoint { hours, well }
    }

    #[test]
    fn wavefront_position_finds_first_crossing() {
        assert_eq!(wavefront_position(&[0.9, 0.7, 0.4, 0.3]), Some(2));
        assert_eq!(wavefront_position(&[0.5, 0.9]), Some(0));
        assert_eq!(wavefront_position(&[0.9, 0.8, 0.7]), None);
        assert_eq!(wavefront_position(&[]), None);
    }

    #[test]
    fn halve_keeps_odd_indexed_points() {
        let trajectory = vec![
            point(0.0, 0),
            point(1.0, 1),
            point(2.0, 2),
            point(3.0, 3),
            point(4.0, 4),
        ];
        let halved = halve(&trajectory);
        assert_eq!(halved, vec![point(1.0, 1), point(3.0, 3)]);
    }

    #[test]
    fn halve_of_short_trajectories() {
        assert!(halve(&vec![point(0.0, 0)]).is_empty());
        assert!(halve(&Trajectory::new()).is_empty());
    }
}

// src/data_analysis/wavefront.rs

// src/data_input/timeline.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::constants::SECONDS_PER_HOUR;
use crate::data_input::plate::{numbered_file_range, Plate, PlateFormat};
use crate::error::AnalysisError;

/// Time axis for one plate's snapshot range. The snapshots carry no embedded
/// acquisition timestamp, so file modification time stands in for it; see
/// DESIGN.md for the limitation this implies.
pub struct Timeline<'a> {
    plate: &'a Plate,
    reference: SystemTime,
    source: TimeSource,
}

enum TimeSource {
    /// Format A: the snapshot files themselves are the clock; the reference
    /// is the first timestep of the analysed range.
    Snapshot,
    /// Format B: the original `.dbf` captures are the clock. The reference
    /// is the smallest-numbered `.dbf` in the folder, and timestep `n` maps
    /// to `.dbf` number `first + n - 1`.
    NumberedDbf { first: usize },
}

impl<'a> Timeline<'a> {
    pub fn new(plate: &'a Plate, first_timestep: usize) -> Result<Self, AnalysisError> {
        match plate.format {
            PlateFormat::FormatA => {
                let reference = mtime_of(&plate.snapshot_path(first_timestep))?;
                Ok(Timeline {
                    plate,
                    reference,
                    source: TimeSource::Snapshot,
                })
            }
            PlateFormat::FormatB => {
                let (first, _) = numbered_file_range(&plate.root, "dbf")?;
                let reference = mtime_of(&plate.root.join(format!("{first}.dbf")))?;
                Ok(Timeline {
                    plate,
                    reference,
                    source: TimeSource::NumberedDbf { first },
                })
            }
        }
    }

    /// Hours elapsed between this timestep's capture and the reference
    /// capture, as an absolute delta.
    pub fn elapsed_hours(&self, timestep: usize) -> Result<f64, AnalysisError> {
        let path = self.clock_file(timestep);
        Ok(hours_between(mtime_of(&path)?, self.reference))
    }

    fn clock_file(&self, timestep: usize) -> PathBuf {
        match self.source {
            TimeSource::Snapshot => self.plate.snapshot_path(timestep),
            TimeSource::NumberedDbf { first } => {
                self.plate.root.join(format!("{}.dbf", first + timestep - 1))
            }
        }
    }
}

fn mtime_of(path: &Path) -> Result<SystemTime, AnalysisError> {
    if !path.is_file() {
        return Err(AnalysisError::MissingData(format!(
            "timestamp source '{}' not found",
            path.display()
        )));
    }
    let metadata = fs::metadata(path).map_err(|e| AnalysisError::io(path, e))?;
    metadata.modified().map_err(|e| AnalysisError::io(path, e))
}

fn hours_between(a: SystemTime, b: SystemTime) -> f64 {
    let delta = match a.duration_since(b) {
        Ok(d) => d,
        Err(e) => e.duration(),
    };
    delta.as_secs_f64() / SECONDS_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn hours_between_is_symmetric_and_scaled() {
        let earlier = SystemTime::UNIX_EPOCH;
        let later = earlier + Duration::from_secs(7200);
        assert!((hours_between(later, earlier) - 2.0).abs() < 1e-12);
        assert!((hours_between(earlier, later) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn missing_clock_file_is_missing_data() {
        let dir = tempfile::tempdir().expect("tempdir");
        let plate = plate_in(dir.path(), "Fluostar_missing");
        assert!(matches!(
            Timeline::new(&plate, 1),
            Err(AnalysisError::MissingData(_))
        ));
    }

    #[test]
    fn format_b_reference_is_the_earliest_dbf() {
        let dir = tempfile::tempdir().expect("tempdir");
        let plate = plate_in(dir.path(), "Fluostar_plate");
        for n in [4usize, 5, 6] {
            std::fs::write(plate.root.join(format!("{n}.dbf")), "x").expect("write");
        }
        let timeline = Timeline::new(&plate, 1).expect("timeline");
        // Timestep 1 maps back onto the reference capture itself.
        assert_eq!(timeline.clock_file(1), plate.root.join("4.dbf"));
        assert_eq!(timeline.clock_file(3), plate.root.join("6.dbf"));
        assert_eq!(timeline.elapsed_hours(1).expect("elapsed"), 0.0);
    }

    fn plate_in(base: &Path, name: &str) -> Plate {
        let root = base.join(name);
        std::fs::create_dir(&root).expect("create plate dir");
        Plate::open(root).expect("open plate")
    }
}

// src/data_input/timeline.rs

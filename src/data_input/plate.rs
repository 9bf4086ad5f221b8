// src/data_input/plate.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::FORMAT_A_PAD_WIDTH;
use crate::error::AnalysisError;

/// The two plate reader recording layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateFormat {
    /// The newer reader: one zero-padded `00001.csv` per timestep, one
    /// comma-separated line per plate row plus a trailing sentinel line.
    FormatA,
    /// Fluostar: one `<n>.csv` per timestep derived from `<n>.dbf`, a 3-line
    /// header followed by one record per well.
    FormatB,
}

impl PlateFormat {
    /// The format is selected once per plate from the folder name.
    pub fn from_folder_name(name: &str) -> Self {
        if name.contains("Fluostar") {
            PlateFormat::FormatB
        } else {
            PlateFormat::FormatA
        }
    }

    /// Timestep stride of one analysis step. Fluostar folders interleave
    /// luminescence captures with the OD captures, so every other snapshot
    /// is skipped.
    pub fn timestep_stride(&self) -> usize {
        match self {
            PlateFormat::FormatA => 1,
            PlateFormat::FormatB => 2,
        }
    }

    pub fn snapshot_filename(&self, timestep: usize) -> String {
        match self {
            PlateFormat::FormatA => format!("{timestep:0width$}.csv", width = FORMAT_A_PAD_WIDTH),
            PlateFormat::FormatB => format!("{timestep}.csv"),
        }
    }
}

/// Handle to one plate folder. All analysis entities derived from it are
/// transient; the plate itself is only a path, a label and a format tag.
#[derive(Debug, Clone)]
pub struct Plate {
    pub root: PathBuf,
    pub format: PlateFormat,
    /// Folder name, used for legends and reports.
    pub label: String,
}

impl Plate {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, AnalysisError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(AnalysisError::MissingData(format!(
                "plate folder '{}' does not exist",
                root.display()
            )));
        }
        let label = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        let format = PlateFormat::from_folder_name(&label);
        Ok(Plate {
            root,
            format,
            label,
        })
    }

    pub fn snapshot_path(&self, timestep: usize) -> PathBuf {
        self.root.join(self.format.snapshot_filename(timestep))
    }

    /// Earliest and latest timestep present in the folder, taken from the
    /// numbered `.csv` snapshot files.
    pub fn timestep_range(&self) -> Result<(usize, usize), AnalysisError> {
        numbered_file_range(&self.root, "csv")
    }
}

/// Scan a folder for `<n>.<ext>` files and return the smallest and largest
/// `n`. Files whose stem is not an integer are ignored.
pub fn numbered_file_range(dir: &Path, ext: &str) -> Result<(usize, usize), AnalysisError> {
    let mut lowest: Option<usize> = None;
    let mut highest: Option<usize> = None;

    let entries = fs::read_dir(dir).map_err(|e| AnalysisError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| AnalysisError::io(dir, e))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(ext) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if let Ok(n) = stem.parse::<usize>() {
            lowest = Some(lowest.map_or(n, |m: usize| m.min(n)));
            highest = Some(highest.map_or(n, |m: usize| m.max(n)));
        }
    }

    match (lowest, highest) {
        (Some(first), Some(last)) => Ok((first, last)),
        _ => Err(AnalysisError::MissingData(format!(
            "no numbered .{} files in '{}'",
            ext,
            dir.display()
        ))),
    }
}


// src/data_input/plate.rs

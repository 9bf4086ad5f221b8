// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Error taxonomy for a single analysis run. All file and parse problems
/// surface immediately to the mode-level caller; nothing is retried or
/// silently skipped.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Malformed snapshot or velocity file. Always names the offending file.
    #[error("malformed input file '{}': {reason}", .file.display())]
    InputFormat { file: PathBuf, reason: String },

    /// A requested timestep file (or the whole plate folder) is absent, or
    /// fewer snapshots exist than the analysis needs.
    #[error("missing data: {0}")]
    MissingData(String),

    /// A metric is undefined for the given inputs, e.g. a slope fit on a
    /// single trajectory point.
    #[error("degenerate metric: {0}")]
    DegenerateMetric(String),

    #[error("I/O error on '{}': {source}", .file.display())]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalysisError {
    pub fn input_format(file: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        AnalysisError::InputFormat {
            file: file.into(),
            reason: reason.into(),
        }
    }

    pub fn io(file: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnalysisError::Io {
            file: file.into(),
            source,
        }
    }
}

// src/error.rs

// src/types.rs
// Shared data types for wavefront trajectories and reports

/// One wavefront observation: elapsed time since the reference snapshot and
/// the first well position at or below the OD threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    /// Hours since the reference snapshot of the analysed range.
    pub hours: f64,
    /// Well index along the row, 0-based, in propagation order.
    pub well: usize,
}

/// Wavefront track for one (plate, row) pair, ordered by timestep.
pub type Trajectory = Vec<TrajectoryPoint>;

/// Pearson coefficient for one row, paired between two plates. The
/// coefficient is NaN when the row's data is degenerate (constant or empty
/// position series); callers report that instead of crashing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowCorrelation {
    pub row: usize,
    pub coefficient: f64,
}

/// Result of the degree-1 speed fit for a single row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedEstimate {
    /// Propagation speed in well positions per hour.
    pub slope: f64,
    /// Standard error of the slope, from the fit covariance matrix.
    pub stderr: f64,
}

// src/types.rs

// src/data_analysis/statistics.rs

use ndarray::Array1;

use crate::error::AnalysisError;
use crate::types::Trajectory;

/// Pearson correlation coefficient of two wavefront position series,
/// truncated to the shorter series before pairing.
///
/// Degenerate input (empty overlap, or zero variance on either side) yields
/// NaN rather than an error, so a whole-plate report can keep going; callers
/// flag NaN rows as "results likely invalid, inspect inputs".
pub fn correlation(a: &Trajectory, b: &Trajectory) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return f64::NAN;
    }

    let xs = Array1::from_iter(a[..n].iter().map(|p| p.well as f64));
    let ys = Array1::from_iter(b[..n].iter().map(|p| p.well as f64));
    let mean_x = xs.mean().unwrap_or(f64::NAN);
    let mean_y = ys.mean().unwrap_or(f64::NAN);

    let dx = &xs - mean_x;
    let dy = &ys - mean_y;
    let covariance = dx.dot(&dy);
    let denominator = (dx.dot(&dx) * dy.dot(&dy)).sqrt();
    if denominator == 0.0 {
        return f64::NAN;
    }
    covariance / denominator
}

/// Ordinary least-squares degree-1 fit of well position against elapsed
/// hours. Returns the slope (propagation speed in well positions per hour)
/// and its standard error, taken from the covariance matrix of the fit:
/// s^2 * (X^T X)^-1 with s^2 the residual variance on n-2 degrees of freedom.
pub fn slope_fit(trajectory: &Trajectory) -> Result<(f64, f64), AnalysisError> {
    let n = trajectory.len();
    if n < 2 {
        return Err(AnalysisError::DegenerateMetric(format!(
            "slope fit needs at least 2 trajectory points, got {n}"
        )));
    }

    let t = Array1::from_iter(trajectory.iter().map(|p| p.hours));
    let y = Array1::from_iter(trajectory.iter().map(|p| p.well as f64));
    let nf = n as f64;

    let sum_t = t.sum();
    let sum_tt = t.dot(&t);
    // Determinant of X^T X for the [intercept, slope] design matrix; zero
    // when every point shares the same timestamp.
    let det = nf * sum_tt - sum_t * sum_t;
    if det.abs() < 1e-12 {
        return Err(AnalysisError::DegenerateMetric(
            "all trajectory points share the same timestamp".to_string(),
        ));
    }

    let sum_y = y.sum();
    let sum_ty = t.dot(&y);
    let slope = (nf * sum_ty - sum_t * sum_y) / det;
    let intercept = (sum_y - slope * sum_t) / nf;

    // With exactly 2 points the fit is exact and the error is zero; the
    // residual variance is only defined for n > 2.
    let stderr = if n > 2 {
        let residual_ss: f64 = trajectory
            .iter()
            .map(|p| {
                let residual = p.well as f64 - (slope * p.hours + intercept);
                residual * residual
            })
            .sum();
        let sigma2 = residual_ss / (nf - 2.0);
        // Var(slope) = sigma^2 / sum((t - mean_t)^2), and that sum is det/n.
        (sigma2 * nf / det).sqrt()
    } else {
        0.0
    };

    Ok((slope, stderr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrajectoryPoint;

    fn trajectory(points: &[(f64, usize)]) -> Trajectory {
        points
            .iter()
            .map(|&(hours, well)| TrajectoryPoint { hours, well })
            .collect()
    }

    #[test]
    fn self_correlation_is_one() {
        let t = trajectory(&[(0.0, 1), (1.0, 3), (2.0, 4), (3.0, 8), (4.0, 9)]);
        assert!((correlation(&t, &t) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn correlation_is_symmetric() {
        let a = trajectory(&[(0.0, 1), (1.0, 2), (2.0, 5), (3.0, 6)]);
        let b = trajectory(&[(0.0, 2), (1.0, 2), (2.0, 4), (3.0, 7)]);
        assert_eq!(correlation(&a, &b), correlation(&b, &a));
    }

    #[test]
    fn correlation_truncates_to_the_shorter_series() {
        let long = trajectory(&[(0.0, 1), (1.0, 2), (2.0, 3), (3.0, 4), (4.0, 0)]);
        let short = trajectory(&[(0.0, 1), (1.0, 2), (2.0, 3), (3.0, 4)]);
        // The diverging fifth point of `long` must not participate.
        assert!((correlation(&long, &short) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_series_is_undefined() {
        let constant = trajectory(&[(0.0, 3), (1.0, 3), (2.0, 3)]);
        let varying = trajectory(&[(0.0, 1), (1.0, 2), (2.0, 3)]);
        assert!(correlation(&constant, &varying).is_nan());
    }

    #[test]
    fn empty_series_is_undefined() {
        let varying = trajectory(&[(0.0, 1), (1.0, 2)]);
        assert!(correlation(&Trajectory::new(), &varying).is_nan());
    }

    #[test]
    fn exact_line_recovers_slope_with_zero_stderr() {
        // well = 3 * hours + 1, sampled at five timesteps
        let t = trajectory(&[(0.0, 1), (1.0, 4), (2.0, 7), (3.0, 10), (4.0, 13)]);
        let (slope, stderr) = slope_fit(&t).expect("fit");
        assert!((slope - 3.0).abs() < 1e-9);
        assert!(stderr.abs() < 1e-9);
    }

    #[test]
    fn noisy_line_has_positive_stderr() {
        let t = trajectory(&[(0.0, 1), (1.0, 5), (2.0, 6), (3.0, 11), (4.0, 12)]);
        let (slope, stderr) = slope_fit(&t).expect("fit");
        assert!(slope > 0.0);
        assert!(stderr > 0.0);
    }

    #[test]
    fn fewer_than_two_points_is_degenerate() {
        assert!(matches!(
            slope_fit(&trajectory(&[(0.0, 1)])),
            Err(AnalysisError::DegenerateMetric(_))
        ));
        assert!(matches!(
            slope_fit(&Trajectory::new()),
            Err(AnalysisError::DegenerateMetric(_))
        ));
    }

    #[test]
    fn identical_timestamps_are_degenerate() {
        let t = trajectory(&[(1.5, 1), (1.5, 4), (1.5, 7)]);
        assert!(matches!(
            slope_fit(&t),
            Err(AnalysisError::DegenerateMetric(_))
        ));
    }
}

// src/data_analysis/statistics.rs

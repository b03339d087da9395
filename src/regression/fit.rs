// Ordinary least-squares fit of ring data
//
// Fits D²_m (or r²_m) against the ring index m. The slope carries the
// physical information; intercept absorbs any constant offset such as a
// dust gap between lens and plate.

use crate::regression::error::{InferenceError, Result};
use serde::{Deserialize, Serialize};

/// A single (ring index, squared size) observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Ring index m (counted from the centre, starting at 1)
    pub x: f64,
    /// Squared diameter or radius in mm²
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Result of a straight-line fit `y = slope·x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination, 1.0 when y has no variance
    pub r2: f64,
}

impl RegressionResult {
    /// Fallback returned for fewer than two points
    pub const EMPTY: RegressionResult = RegressionResult {
        slope: 0.0,
        intercept: 0.0,
        r2: 0.0,
    };

    /// Value of the fitted line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Whether the ring indices vary at all
///
/// Compared exactly rather than through the OLS denominator, which rounding
/// can leave slightly non-zero for repeated non-integer x.
pub(crate) fn has_x_spread(points: &[DataPoint]) -> bool {
    match points.first() {
        Some(first) => points.iter().any(|p| p.x != first.x),
        None => false,
    }
}

/// Fit a least-squares line through `points`
///
/// Fewer than two points yield [`RegressionResult::EMPTY`]. Identical
/// x-values fail with [`InferenceError::DegenerateInput`].
///
/// # Example
/// ```
/// use newton_rings::regression::{fit, DataPoint};
///
/// let points: Vec<DataPoint> = (1..=5)
///     .map(|m| DataPoint::new(m as f64, 2.0 * m as f64 + 1.0))
///     .collect();
/// let result = fit(&points).unwrap();
/// assert!((result.slope - 2.0).abs() < 1e-12);
/// assert!((result.intercept - 1.0).abs() < 1e-12);
/// assert_eq!(result.r2, 1.0);
/// ```
pub fn fit(points: &[DataPoint]) -> Result<RegressionResult> {
    let n = points.len();
    if n < 2 {
        tracing::debug!("fit called with {} point(s), returning empty result", n);
        return Ok(RegressionResult::EMPTY);
    }

    if !has_x_spread(points) {
        return Err(InferenceError::DegenerateInput);
    }

    let (sum_x, sum_y, sum_xy, sum_x2) = points
        .iter()
        .fold((0.0, 0.0, 0.0, 0.0), |(sx, sy, sxy, sx2), p| {
            (sx + p.x, sy + p.y, sxy + p.x * p.y, sx2 + p.x * p.x)
        });

    let n_f = n as f64;
    let denominator = n_f * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(InferenceError::DegenerateInput);
    }

    let x_mean = sum_x / n_f;
    let y_mean = sum_y / n_f;
    let slope = (n_f * sum_xy - sum_x * sum_y) / denominator;
    let intercept = y_mean - slope * x_mean;

    let (ss_tot, ss_res) = points.iter().fold((0.0, 0.0), |(tot, res), p| {
        let residual = p.y - (slope * p.x + intercept);
        (tot + (p.y - y_mean).powi(2), res + residual.powi(2))
    });

    let r2 = if ss_tot == 0.0 {
        1.0
    } else {
        1.0 - ss_res / ss_tot
    };

    tracing::debug!(n, slope, intercept, r2, "least-squares fit");

    Ok(RegressionResult {
        slope,
        intercept,
        r2,
    })
}

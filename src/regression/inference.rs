// Curvature radius estimate and its confidence interval
//
// The fit slope relates to the radius through slope = k·λ·R, where k is the
// model constant (4 when fitting diameter², 1 when fitting radius²). The
// interval half width is t·SE(slope) pushed through the same relation.

use crate::regression::error::{InferenceError, Result};
use crate::regression::fit::{has_x_spread, DataPoint, RegressionResult};
use crate::regression::t_table::critical_value;
use serde::{Deserialize, Serialize};

/// Radius estimate with its uncertainty band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    /// Estimated curvature radius (mm)
    pub predicted_radius: f64,
    /// Half width of the confidence interval around `predicted_radius` (mm)
    pub confidence_interval_half_width: f64,
}

impl InferenceResult {
    /// Lower and upper bounds of the interval
    pub fn bounds(&self) -> (f64, f64) {
        (
            self.predicted_radius - self.confidence_interval_half_width,
            self.predicted_radius + self.confidence_interval_half_width,
        )
    }

    /// Whether `radius` lies inside the interval (inclusive)
    pub fn contains(&self, radius: f64) -> bool {
        let (lower, upper) = self.bounds();
        radius >= lower && radius <= upper
    }
}

/// Convert a fit slope into a curvature radius: `slope / (k·λ)`
///
/// # Example
/// ```
/// use newton_rings::regression::predict_radius;
///
/// let radius = predict_radius(0.4712, 589e-6, 4.0);
/// assert!((radius - 200.0).abs() < 1e-9);
/// ```
pub fn predict_radius(slope: f64, wavelength: f64, model_constant: f64) -> f64 {
    slope / (model_constant * wavelength)
}

/// Standard error of the fitted slope
///
/// Returns 0.0 for n ≤ 2, where no residual degrees of freedom remain.
pub fn standard_error(points: &[DataPoint], fit: &RegressionResult) -> Result<f64> {
    let n = points.len();
    if n <= 2 {
        return Ok(0.0);
    }

    let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n as f64;

    let (sum_squared_residuals, spread_x) = points.iter().fold((0.0, 0.0), |(res, sxx), p| {
        (
            res + (p.y - fit.predict(p.x)).powi(2),
            sxx + (p.x - mean_x).powi(2),
        )
    });

    if spread_x == 0.0 || !has_x_spread(points) {
        return Err(InferenceError::DegenerateInput);
    }

    let variance = sum_squared_residuals / (n - 2) as f64;
    Ok((variance / spread_x).sqrt())
}

/// Half width of the radius confidence interval
///
/// Uses the coarse Student-t table in [`crate::regression::t_table`].
pub fn confidence_interval_half_width(
    confidence_level: f64,
    degrees_of_freedom: f64,
    standard_error: f64,
    wavelength: f64,
    model_constant: f64,
) -> Result<f64> {
    let t_value = critical_value(confidence_level, degrees_of_freedom)?;
    Ok(t_value * standard_error / (model_constant * wavelength))
}

/// Radius estimate and interval for a completed fit
///
/// Degrees of freedom are `n − 2`.
pub fn infer(
    points: &[DataPoint],
    fit: &RegressionResult,
    wavelength: f64,
    model_constant: f64,
    confidence_level: f64,
) -> Result<InferenceResult> {
    if points.len() <= 2 {
        tracing::warn!(
            "only {} point(s): confidence interval collapses to zero",
            points.len()
        );
    }

    let predicted_radius = predict_radius(fit.slope, wavelength, model_constant);
    let se = standard_error(points, fit)?;
    let degrees_of_freedom = points.len() as f64 - 2.0;
    let half_width = confidence_interval_half_width(
        confidence_level,
        degrees_of_freedom,
        se,
        wavelength,
        model_constant,
    )?;

    tracing::debug!(
        predicted_radius,
        standard_error = se,
        degrees_of_freedom,
        half_width,
        "radius inference"
    );

    Ok(InferenceResult {
        predicted_radius,
        confidence_interval_half_width: half_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regression::fit::fit;

    const SODIUM_D: f64 = 589e-6;

    #[test]
    fn test_predict_radius_for_radius_squared_model() {
        let radius = predict_radius(0.1178, SODIUM_D, 1.0);
        assert!((radius - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_predict_radius_negative_wavelength_is_not_an_error() {
        assert!(predict_radius(0.4712, -SODIUM_D, 4.0) < 0.0);
    }

    #[test]
    fn test_standard_error_zero_for_two_points() {
        let points = vec![DataPoint::new(1.0, 2.0), DataPoint::new(2.0, 5.0)];
        let result = fit(&points).unwrap();
        assert_eq!(standard_error(&points, &result).unwrap(), 0.0);
    }

    #[test]
    fn test_standard_error_zero_for_exact_line() {
        let points: Vec<DataPoint> = (1..=6)
            .map(|m| DataPoint::new(m as f64, 0.5 * m as f64))
            .collect();
        let result = fit(&points).unwrap();
        assert!(standard_error(&points, &result).unwrap() < 1e-12);
    }

    #[test]
    fn test_standard_error_known_value() {
        // Sxx = 5, Sxy = 7 -> slope 1.4, intercept -1.0
        let points = vec![
            DataPoint::new(1.0, 0.0),
            DataPoint::new(2.0, 3.0),
            DataPoint::new(3.0, 2.0),
            DataPoint::new(4.0, 5.0),
        ];
        let result = fit(&points).unwrap();
        assert!((result.slope - 1.4).abs() < 1e-12);
        assert!((result.intercept + 1.0).abs() < 1e-12);

        let ssr: f64 = points
            .iter()
            .map(|p| (p.y - result.predict(p.x)).powi(2))
            .sum();
        let expected = (ssr / 2.0 / 5.0).sqrt();
        let se = standard_error(&points, &result).unwrap();
        assert!((se - expected).abs() < 1e-12);
    }

    #[test]
    fn test_standard_error_degenerate_x() {
        let points = vec![
            DataPoint::new(3.0, 1.0),
            DataPoint::new(3.0, 2.0),
            DataPoint::new(3.0, 4.0),
        ];
        let result = RegressionResult {
            slope: 0.0,
            intercept: 7.0 / 3.0,
            r2: 0.0,
        };
        assert_eq!(
            standard_error(&points, &result),
            Err(InferenceError::DegenerateInput)
        );
    }

    #[test]
    fn test_half_width_formula() {
        let half_width =
            confidence_interval_half_width(0.95, 8.0, 0.002, SODIUM_D, 4.0).unwrap();
        let expected = 2.228 * 0.002 / (4.0 * SODIUM_D);
        assert!((half_width - expected).abs() < 1e-12);
    }

    #[test]
    fn test_half_width_rejects_unsupported_level() {
        assert_eq!(
            confidence_interval_half_width(0.80, 8.0, 0.002, SODIUM_D, 4.0),
            Err(InferenceError::UnsupportedConfidenceLevel(0.80))
        );
    }

    #[test]
    fn test_infer_bounds_contain_true_radius_for_clean_data() {
        let points: Vec<DataPoint> = (1..=10)
            .map(|m| DataPoint::new(m as f64, 4.0 * m as f64 * SODIUM_D * 200.0))
            .collect();
        let result = fit(&points).unwrap();
        let inference = infer(&points, &result, SODIUM_D, 4.0, 0.95).unwrap();

        assert!((inference.predicted_radius - 200.0).abs() < 1e-6);
        assert!(inference.confidence_interval_half_width < 1e-6);
        assert!(inference.contains(inference.predicted_radius));
    }

    #[test]
    fn test_bounds() {
        let inference = InferenceResult {
            predicted_radius: 200.0,
            confidence_interval_half_width: 1.5,
        };
        assert_eq!(inference.bounds(), (198.5, 201.5));
        assert!(inference.contains(201.5));
        assert!(!inference.contains(202.0));
    }
}

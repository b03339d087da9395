//! Synthetic ring data for prediction runs
//!
//! Ideal points follow `y = k·m·λ·R` exactly. Measured points add uniform
//! noise bounded by `± noise% · y` to each ideal value, so larger rings
//! carry proportionally larger absolute error.

use crate::regression::DataPoint;
use rand::Rng;

/// Ideal `(m, k·m·λ·R)` points for rings `m = 1..=samples`
///
/// # Example
/// ```
/// use newton_rings::synthetic::ideal_points;
///
/// let points = ideal_points(3, 200.0, 589e-6, 4.0);
/// assert_eq!(points.len(), 3);
/// assert_eq!(points[0].x, 1.0);
/// assert!((points[2].y - 3.0 * 0.4712).abs() < 1e-12);
/// ```
pub fn ideal_points(
    samples: usize,
    radius: f64,
    wavelength: f64,
    model_constant: f64,
) -> Vec<DataPoint> {
    (1..=samples)
        .map(|m| {
            let m = m as f64;
            DataPoint::new(m, model_constant * m * wavelength * radius)
        })
        .collect()
}

/// Perturb each point's y by `(u − 0.5)·2·y·noise_percent/100`, `u ~ U[0, 1)`
pub fn add_noise<R: Rng + ?Sized>(
    points: &[DataPoint],
    noise_percent: f64,
    rng: &mut R,
) -> Vec<DataPoint> {
    let scale = noise_percent / 100.0;
    points
        .iter()
        .map(|p| {
            let u: f64 = rng.gen();
            DataPoint::new(p.x, p.y + (u - 0.5) * 2.0 * p.y * scale)
        })
        .collect()
}

/// Root-mean-square deviation of `measured` from `ideal`, paired by position
///
/// Returns 0.0 for empty input. Extra points in the longer slice are ignored.
pub fn rms_deviation(ideal: &[DataPoint], measured: &[DataPoint]) -> f64 {
    let n = ideal.len().min(measured.len());
    if n == 0 {
        return 0.0;
    }

    let sum_sq: f64 = ideal
        .iter()
        .zip(measured)
        .map(|(i, m)| (m.y - i.y).powi(2))
        .sum();
    (sum_sq / n as f64).sqrt()
}

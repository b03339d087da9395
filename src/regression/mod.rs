// Curvature-radius estimation from Newton's-rings data
//
// Fits squared ring sizes against ring index with ordinary least squares,
// converts the slope into a curvature radius via slope = k·λ·R, and attaches
// a Student-t confidence interval to the estimate.
//
// Error policy:
// - Zero spread in the ring indices is an error (DegenerateInput)
// - A confidence level outside {0.90, 0.95, 0.99} is an error
// - Everything else (too few points, NaN, odd wavelengths) falls back to a
//   defined value so that interactive callers keep rendering something

mod error;
mod fit;
mod inference;
mod t_table;

pub use error::{InferenceError, Result};
pub use fit::{fit, DataPoint, RegressionResult};
pub use inference::{
    confidence_interval_half_width, infer, predict_radius, standard_error, InferenceResult,
};
pub use t_table::{critical_value, ConfidenceLevel};

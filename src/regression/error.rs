// Error kinds raised by the regression and inference engine
//
// Only two conditions are errors. Everything else (n < 2, n <= 2 for the
// standard error, NaN inputs, negative wavelengths) degrades to a defined
// fallback value instead.

use thiserror::Error;

/// Errors that can occur while fitting or inferring from ring data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// All x-values are identical, so the slope is undefined
    #[error("Degenerate input: ring indices have zero variance")]
    DegenerateInput,

    /// Confidence level outside the supported set {0.90, 0.95, 0.99}
    #[error("Unsupported confidence level: {0} (expected 0.90, 0.95 or 0.99)")]
    UnsupportedConfidenceLevel(f64),
}

/// Result type for regression and inference operations
pub type Result<T> = std::result::Result<T, InferenceError>;

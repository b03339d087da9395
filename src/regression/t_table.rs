// Student-t critical values for the confidence interval
//
// A four-column table (df = 5, 10, 15, 20) per confidence level. The nearest
// tabulated df is used; when two entries are equally near, the lower df wins.
// This is a coarse approximation of the t-distribution and is kept as-is so
// that interval widths stay comparable with previously published results.

use crate::regression::error::{InferenceError, Result};
use serde::{Deserialize, Serialize};

/// Tolerance used when matching a requested level against the table
const LEVEL_TOLERANCE: f64 = 1e-9;

/// Degrees of freedom available in the table, ascending
const TABLE_DF: [f64; 4] = [5.0, 10.0, 15.0, 20.0];

/// Two-sided confidence level supported by the critical-value table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// 90% confidence
    Ninety,
    /// 95% confidence
    NinetyFive,
    /// 99% confidence
    NinetyNine,
}

impl ConfidenceLevel {
    /// All supported levels, loosest first
    pub const ALL: [ConfidenceLevel; 3] = [
        ConfidenceLevel::Ninety,
        ConfidenceLevel::NinetyFive,
        ConfidenceLevel::NinetyNine,
    ];

    /// Numeric value of the level (e.g. 0.95)
    pub fn value(self) -> f64 {
        match self {
            ConfidenceLevel::Ninety => 0.90,
            ConfidenceLevel::NinetyFive => 0.95,
            ConfidenceLevel::NinetyNine => 0.99,
        }
    }

    /// Critical values in the same order as `TABLE_DF`
    fn row(self) -> [f64; 4] {
        match self {
            ConfidenceLevel::Ninety => [2.015, 1.812, 1.753, 1.725],
            ConfidenceLevel::NinetyFive => [2.571, 2.228, 2.131, 2.086],
            ConfidenceLevel::NinetyNine => [4.032, 3.169, 2.947, 2.845],
        }
    }

    /// Look up the critical value for the tabulated df nearest to `degrees_of_freedom`
    ///
    /// # Example
    /// ```
    /// use newton_rings::regression::ConfidenceLevel;
    ///
    /// assert_eq!(ConfidenceLevel::NinetyFive.critical_value(8.0), 2.228);
    /// // Halfway between 5 and 10 resolves to 5
    /// assert_eq!(ConfidenceLevel::NinetyFive.critical_value(7.5), 2.571);
    /// ```
    pub fn critical_value(self, degrees_of_freedom: f64) -> f64 {
        let row = self.row();
        let mut best = 0;

        for (i, &df) in TABLE_DF.iter().enumerate().skip(1) {
            // Strictly closer only: ties keep the earlier (lower) df
            if (df - degrees_of_freedom).abs() < (TABLE_DF[best] - degrees_of_freedom).abs() {
                best = i;
            }
        }

        row[best]
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = InferenceError;

    fn try_from(level: f64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| (candidate.value() - level).abs() < LEVEL_TOLERANCE)
            .ok_or(InferenceError::UnsupportedConfidenceLevel(level))
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.value() * 100.0)
    }
}

/// Student-t critical value for a raw confidence level and df
pub fn critical_value(confidence_level: f64, degrees_of_freedom: f64) -> Result<f64> {
    let level = ConfidenceLevel::try_from(confidence_level)?;
    Ok(level.critical_value(degrees_of_freedom))
}

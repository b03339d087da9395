//! JSON output format for prediction runs

use crate::simulator::{PredictionHistory, PredictionReport};
use serde::{Deserialize, Serialize};

/// Summary of repeated runs (`--runs N`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonHistory {
    /// Number of predictions in the window
    pub count: usize,
    /// Predicted radii, oldest first
    pub radii: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_dev: Option<f64>,
}

impl From<&PredictionHistory> for JsonHistory {
    fn from(history: &PredictionHistory) -> Self {
        Self {
            count: history.len(),
            radii: history.radii().collect(),
            mean_radius: history.mean(),
            std_dev: history.std_dev(),
        }
    }
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Crate version that produced the file
    pub version: String,
    /// Format name
    pub format: String,
    /// Most recent prediction
    pub report: PredictionReport,
    /// Repeated-run summary, present when more than one run was made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<JsonHistory>,
}

impl JsonOutput {
    /// Create a new JSON output structure
    pub fn new(report: PredictionReport) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "newton-rings-json-v1".to_string(),
            report,
            history: None,
        }
    }

    /// Attach a repeated-run summary
    pub fn with_history(mut self, history: &PredictionHistory) -> Self {
        self.history = Some(history.into());
        self
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

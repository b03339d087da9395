//! Prediction runs: synthetic data → fit → radius estimate
//!
//! A run generates ideal ring data for a known lens, perturbs it, and checks
//! how well the regression engine recovers the radius. [`analyze_measurements`]
//! does the same for real measurements, where the true radius is unknown.

use crate::config::{RingModel, SimulationConfig};
use crate::regression::{fit, infer, DataPoint, InferenceResult, RegressionResult};
use crate::synthetic::{add_noise, ideal_points, rms_deviation};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Instant;

/// Number of predictions kept by [`PredictionHistory::default`]
pub const DEFAULT_HISTORY_CAPACITY: usize = 30;

/// Everything produced by one prediction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    /// Parameters the run used
    pub parameters: SimulationConfig,
    /// Noise-free points; empty when analysing measured data
    pub ideal: Vec<DataPoint>,
    /// Points that were fitted
    pub measured: Vec<DataPoint>,
    pub regression: RegressionResult,
    pub inference: InferenceResult,
    /// `|R_pred − R_true| / R_true · 100`; `None` without a known radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_error_percent: Option<f64>,
    /// RMS distance of measured from ideal values (mm²)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rms_deviation: Option<f64>,
    /// Wall-clock time spent fitting (ms)
    pub duration_ms: f64,
    /// Unix timestamp (seconds) at which the report was produced
    pub generated_at: u64,
}

impl PredictionReport {
    /// Whether a true radius was known for this run
    pub fn is_synthetic(&self) -> bool {
        !self.ideal.is_empty()
    }

    /// Human-readable summary
    pub fn to_report_string(&self) -> String {
        let p = &self.parameters;
        let mut report = String::new();

        report.push_str("=== Newton's Rings Curvature Prediction ===\n\n");

        report.push_str("Parameters:\n");
        if self.is_synthetic() {
            report.push_str(&format!("  True radius (R):   {:.2} mm\n", p.radius_mm));
            report.push_str(&format!("  Noise level:       {}%\n", p.noise_percent));
        }
        report.push_str(&format!("  Wavelength (λ):    {} nm\n", p.wavelength_nm));
        report.push_str(&format!("  Rings (n):         {}\n", self.measured.len()));
        report.push_str(&format!("  Model:             {}\n", p.model.label()));
        report.push_str(&format!(
            "  Confidence level:  {:.0}%\n",
            p.confidence_level * 100.0
        ));

        report.push_str("\nResults:\n");
        report.push_str(&format!(
            "  Predicted radius:  {:.2} mm\n",
            self.inference.predicted_radius
        ));
        report.push_str(&format!(
            "  Confidence interval: ±{:.2} mm\n",
            self.inference.confidence_interval_half_width
        ));
        report.push_str(&format!(
            "  Fit slope:         {:.3e} mm²/ring\n",
            self.regression.slope
        ));
        report.push_str(&format!(
            "  Fit intercept:     {:.3e} mm²\n",
            self.regression.intercept
        ));
        report.push_str(&format!("  R²:                {:.4}\n", self.regression.r2));
        if let Some(error) = self.relative_error_percent {
            report.push_str(&format!("  Relative error:    {:.2}%\n", error));
        }
        if let Some(rms) = self.rms_deviation {
            report.push_str(&format!("  RMS noise:         {:.2e} mm²\n", rms));
        }
        report.push_str(&format!("  Duration:          {:.1} ms\n", self.duration_ms));

        report
    }
}

/// Build the RNG for a run: seeded when the config asks for it
pub fn rng_for(config: &SimulationConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run one synthetic prediction
///
/// # Example
/// ```
/// use newton_rings::config::SimulationConfig;
/// use newton_rings::simulator::{rng_for, run_prediction};
///
/// let config = SimulationConfig { noise_percent: 0.0, ..SimulationConfig::default() };
/// let report = run_prediction(&config, &mut rng_for(&config)).unwrap();
/// assert!((report.inference.predicted_radius - 200.0).abs() < 1e-6);
/// ```
pub fn run_prediction<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<PredictionReport> {
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid simulation parameters: {}", e))?;

    tracing::debug!(
        radius_mm = config.radius_mm,
        wavelength_nm = config.wavelength_nm,
        noise_percent = config.noise_percent,
        samples = config.samples,
        "starting prediction"
    );

    let start = Instant::now();
    let wavelength = config.wavelength_mm();
    let k = config.model.constant();

    let ideal = ideal_points(config.samples, config.radius_mm, wavelength, k);
    let measured = add_noise(&ideal, config.noise_percent, rng);

    let regression = fit(&measured).context("Failed to fit ring data")?;
    let inference = infer(&measured, &regression, wavelength, k, config.confidence_level)
        .context("Failed to estimate curvature radius")?;
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    let relative_error =
        (inference.predicted_radius - config.radius_mm).abs() / config.radius_mm * 100.0;
    let rms = rms_deviation(&ideal, &measured);

    tracing::info!(
        predicted_radius = inference.predicted_radius,
        half_width = inference.confidence_interval_half_width,
        relative_error,
        "prediction complete"
    );

    Ok(PredictionReport {
        parameters: config.clone(),
        ideal,
        measured,
        regression,
        inference,
        relative_error_percent: Some(relative_error),
        rms_deviation: Some(rms),
        duration_ms,
        generated_at: unix_timestamp(),
    })
}

/// Fit measured points directly; no true radius is known
pub fn analyze_measurements(
    points: Vec<DataPoint>,
    wavelength_nm: f64,
    model: RingModel,
    confidence_level: f64,
) -> Result<PredictionReport> {
    if points.is_empty() {
        anyhow::bail!("No measured points to analyze");
    }

    let parameters = SimulationConfig {
        wavelength_nm,
        samples: points.len(),
        confidence_level,
        model,
        noise_percent: 0.0,
        ..SimulationConfig::default()
    };

    let start = Instant::now();
    let wavelength = parameters.wavelength_mm();
    let k = model.constant();

    let regression = fit(&points).context("Failed to fit measured data")?;
    let inference = infer(&points, &regression, wavelength, k, confidence_level)
        .context("Failed to estimate curvature radius")?;
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    tracing::info!(
        predicted_radius = inference.predicted_radius,
        r2 = regression.r2,
        "measurement analysis complete"
    );

    Ok(PredictionReport {
        parameters,
        ideal: Vec::new(),
        measured: points,
        regression,
        inference,
        relative_error_percent: None,
        rms_deviation: None,
        duration_ms,
        generated_at: unix_timestamp(),
    })
}

/// Unix time in seconds
fn unix_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Rolling window of recent predicted radii
#[derive(Debug, Clone)]
pub struct PredictionHistory {
    radii: VecDeque<f64>,
    capacity: usize,
}

impl Default for PredictionHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl PredictionHistory {
    /// Create a history holding at most `capacity` predictions (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            radii: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a prediction, evicting the oldest when full
    pub fn record(&mut self, predicted_radius: f64) {
        if self.radii.len() == self.capacity {
            self.radii.pop_front();
        }
        self.radii.push_back(predicted_radius);
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Recorded radii, oldest first
    pub fn radii(&self) -> impl Iterator<Item = f64> + '_ {
        self.radii.iter().copied()
    }

    /// Mean of recorded radii
    pub fn mean(&self) -> Option<f64> {
        if self.radii.is_empty() {
            return None;
        }
        Some(self.radii.iter().sum::<f64>() / self.radii.len() as f64)
    }

    /// Sample standard deviation (n − 1); needs two predictions
    pub fn std_dev(&self) -> Option<f64> {
        if self.radii.len() < 2 {
            return None;
        }
        let mean = self.mean()?;
        let sum_sq: f64 = self.radii.iter().map(|r| (r - mean).powi(2)).sum();
        Some((sum_sq / (self.radii.len() - 1) as f64).sqrt())
    }

    /// Summary line for repeated runs
    pub fn summary(&self) -> String {
        match (self.mean(), self.std_dev()) {
            (Some(mean), Some(std)) => format!(
                "{} predictions: mean radius {:.2} mm, std dev {:.2} mm",
                self.len(),
                mean,
                std
            ),
            (Some(mean), None) => format!("1 prediction: radius {:.2} mm", mean),
            _ => "no predictions recorded".to_string(),
        }
    }
}

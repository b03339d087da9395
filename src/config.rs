//! Simulation parameters for prediction runs
//!
//! Parameters can come from defaults, a named preset, or a TOML file:
//!
//! ```toml
//! [simulation]
//! radius_mm = 200.0
//! wavelength_nm = 589.0
//! noise_percent = 2.0
//! samples = 10
//! confidence_level = 0.95
//! model = "diameter-squared"
//! seed = 42
//! ```
//!
//! Missing keys take their default values.

use crate::regression::ConfidenceLevel;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which squared ring size is plotted against the ring index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RingModel {
    /// D²_m = 4·m·λ·R
    #[default]
    DiameterSquared,
    /// r²_m = m·λ·R
    RadiusSquared,
}

impl RingModel {
    /// Model constant k in `slope = k·λ·R`
    pub fn constant(self) -> f64 {
        match self {
            RingModel::DiameterSquared => 4.0,
            RingModel::RadiusSquared => 1.0,
        }
    }

    /// Short label for report tables
    pub fn label(self) -> &'static str {
        match self {
            RingModel::DiameterSquared => "D² vs m",
            RingModel::RadiusSquared => "r² vs m",
        }
    }
}

/// Parameters of a single synthetic prediction run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// True curvature radius of the lens (mm)
    pub radius_mm: f64,

    /// Wavelength of the light source (nm)
    ///
    /// Default: 589 nm, the sodium D line
    pub wavelength_nm: f64,

    /// Uniform noise bound as a percentage of each ideal value
    pub noise_percent: f64,

    /// Number of rings measured
    pub samples: usize,

    /// Confidence level for the radius interval: 0.90, 0.95 or 0.99
    pub confidence_level: f64,

    /// Fitting model (diameter² or radius² against ring index)
    pub model: RingModel,

    /// Seed for reproducible noise; `None` draws from OS entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            radius_mm: 200.0,
            wavelength_nm: 589.0,
            noise_percent: 2.0,
            samples: 10,
            confidence_level: 0.95,
            model: RingModel::DiameterSquared,
            seed: None,
        }
    }
}

/// Root of a TOML parameter file
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    simulation: SimulationConfig,
}

impl SimulationConfig {
    /// Low noise, many rings, 99% confidence
    pub fn precise() -> Self {
        Self {
            noise_percent: 0.5,
            samples: 20,
            confidence_level: 0.99,
            ..Self::default()
        }
    }

    /// Noisy hand measurements of a few rings at 90% confidence
    pub fn classroom() -> Self {
        Self {
            noise_percent: 5.0,
            samples: 5,
            confidence_level: 0.90,
            ..Self::default()
        }
    }

    /// Load parameters from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
    }

    /// Load parameters from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).context("Failed to parse TOML")?;
        Ok(file.simulation)
    }

    /// Wavelength converted to millimetres
    pub fn wavelength_mm(&self) -> f64 {
        self.wavelength_nm * 1e-6
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.radius_mm.is_finite() || self.radius_mm <= 0.0 {
            return Err(format!(
                "radius_mm must be a positive number, got {}",
                self.radius_mm
            ));
        }

        if !self.wavelength_nm.is_finite() || self.wavelength_nm <= 0.0 {
            return Err(format!(
                "wavelength_nm must be a positive number, got {}",
                self.wavelength_nm
            ));
        }

        if !self.noise_percent.is_finite() || self.noise_percent < 0.0 {
            return Err(format!(
                "noise_percent must be non-negative, got {}",
                self.noise_percent
            ));
        }

        if self.samples == 0 {
            return Err("samples must be >= 1".to_string());
        }

        ConfidenceLevel::try_from(self.confidence_level).map_err(|e| e.to_string())?;

        Ok(())
    }
}

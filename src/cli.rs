//! CLI argument parsing for newton-rings

use crate::config::{RingModel, SimulationConfig};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for prediction reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
    /// HTML format for visual reports
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "newton-rings")]
#[command(version)]
#[command(
    about = "Estimate lens curvature radius from Newton's rings data",
    long_about = None
)]
pub struct Cli {
    /// Load simulation parameters from a TOML file
    #[arg(short = 'C', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// True curvature radius of the simulated lens (mm)
    #[arg(short = 'R', long = "radius", value_name = "MM")]
    pub radius: Option<f64>,

    /// Light wavelength (nm)
    #[arg(short = 'l', long = "wavelength", value_name = "NM")]
    pub wavelength: Option<f64>,

    /// Noise level as a percentage of each value
    #[arg(short = 'n', long = "noise", value_name = "PERCENT")]
    pub noise: Option<f64>,

    /// Number of rings to simulate
    #[arg(short = 's', long = "samples", value_name = "N")]
    pub samples: Option<usize>,

    /// Confidence level for the radius interval (0.90, 0.95 or 0.99)
    #[arg(short = 'c', long = "confidence", value_name = "LEVEL")]
    pub confidence: Option<f64>,

    /// Fitting model
    #[arg(short = 'm', long = "model", value_enum)]
    pub model: Option<RingModel>,

    /// Seed the noise generator for reproducible runs
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Repeat the prediction and summarize the spread of estimates
    #[arg(short = 'r', long = "runs", value_name = "N", default_value = "1")]
    pub runs: usize,

    /// Fit measured data from a CSV file (m,value) instead of simulating
    #[arg(long = "measurements", value_name = "FILE")]
    pub measurements: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Resolve parameters: defaults, then config file, then flags
    pub fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_file(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(radius) = self.radius {
            config.radius_mm = radius;
        }
        if let Some(wavelength) = self.wavelength {
            config.wavelength_nm = wavelength;
        }
        if let Some(noise) = self.noise {
            config.noise_percent = noise;
        }
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(confidence) = self.confidence {
            config.confidence_level = confidence;
        }
        if let Some(model) = self.model {
            config.model = model;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

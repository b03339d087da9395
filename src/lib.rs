//! newton-rings - Curvature radius estimation for the Newton's rings experiment
//!
//! This library fits squared ring sizes against ring index, recovers the lens
//! curvature radius with a Student-t confidence interval, and simulates noisy
//! measurements to check how well the estimate holds up.

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod html_output;
pub mod json_output;
pub mod measurements;
pub mod regression;
pub mod simulator;
pub mod synthetic;

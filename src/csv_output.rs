//! CSV export of prediction runs
//!
//! Metadata (parameters and results) is written as `#` comment lines ahead
//! of the data, so the file still loads in a spreadsheet and can be read back
//! with [`crate::measurements::parse_points`] using the last column.

use crate::simulator::PredictionReport;

/// CSV record for a single ring
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRing {
    pub index: f64,
    pub ideal: Option<f64>,
    pub measured: f64,
}

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput {
    rings: Vec<CsvRing>,
    metadata: Vec<String>,
    include_ideal: bool,
}

impl CsvOutput {
    /// Create a new CSV output formatter
    pub fn new(include_ideal: bool) -> Self {
        Self {
            rings: Vec::new(),
            metadata: Vec::new(),
            include_ideal,
        }
    }

    /// Build a formatter pre-filled from a prediction report
    pub fn from_report(report: &PredictionReport) -> Self {
        let mut output = Self::new(report.is_synthetic());
        let p = &report.parameters;

        output.add_metadata("Newton's rings curvature prediction");
        output.add_metadata(format!("Generated at (unix): {}", report.generated_at));
        output.add_metadata("Parameters:");
        if report.is_synthetic() {
            output.add_metadata(format!("Curvature radius (R): {} mm", p.radius_mm));
            output.add_metadata(format!("Noise level: {}%", p.noise_percent));
        }
        output.add_metadata(format!("Wavelength: {} nm", p.wavelength_nm));
        output.add_metadata(format!("Samples: {}", report.measured.len()));
        output.add_metadata(format!("Model: {}", p.model.label()));
        output.add_metadata("");
        output.add_metadata("Results:");
        output.add_metadata(format!(
            "Predicted radius: {:.2} mm",
            report.inference.predicted_radius
        ));
        if let Some(error) = report.relative_error_percent {
            output.add_metadata(format!("Relative error: {:.2}%", error));
        }
        output.add_metadata(format!("R squared: {:.4}", report.regression.r2));
        output.add_metadata(format!("Slope: {:.3e}", report.regression.slope));
        output.add_metadata(format!(
            "Confidence interval ({:.0}%): ±{:.2} mm",
            p.confidence_level * 100.0,
            report.inference.confidence_interval_half_width
        ));

        for (i, measured) in report.measured.iter().enumerate() {
            output.add_ring(CsvRing {
                index: measured.x,
                ideal: report.ideal.get(i).map(|p| p.y),
                measured: measured.y,
            });
        }

        output
    }

    /// Add a `#` comment line to the metadata block
    pub fn add_metadata(&mut self, line: impl Into<String>) {
        self.metadata.push(line.into());
    }

    /// Add a ring to the output
    pub fn add_ring(&mut self, ring: CsvRing) {
        self.rings.push(ring);
    }

    /// Generate CSV header row based on enabled flags
    fn header(&self) -> String {
        let mut headers = vec!["m"];

        if self.include_ideal {
            headers.push("ideal_mm2");
        }

        headers.push("measured_mm2");
        headers.join(",")
    }

    /// Format a ring index: integers without a fraction
    fn format_index(index: f64) -> String {
        if index.fract() == 0.0 && index.abs() < 1e15 {
            format!("{}", index as i64)
        } else {
            index.to_string()
        }
    }

    /// Format a ring as CSV row
    fn format_ring(&self, ring: &CsvRing) -> String {
        let mut fields = vec![Self::format_index(ring.index)];

        if self.include_ideal {
            match ring.ideal {
                Some(ideal) => fields.push(format!("{:.5e}", ideal)),
                None => fields.push(String::new()),
            }
        }

        fields.push(format!("{:.5e}", ring.measured));
        fields.join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        for line in &self.metadata {
            if line.is_empty() {
                output.push_str("#\n");
            } else {
                output.push_str("# ");
                output.push_str(line);
                output.push('\n');
            }
        }

        output.push_str(&self.header());
        output.push('\n');

        for ring in &self.rings {
            output.push_str(&self.format_ring(ring));
            output.push('\n');
        }

        output
    }
}

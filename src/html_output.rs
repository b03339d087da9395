//! HTML report for prediction runs
//!
//! Standalone document with embedded CSS: parameters, results and the ring
//! data table (ideal, measured and fitted values).

use crate::simulator::{PredictionHistory, PredictionReport};

/// HTML output formatter
#[derive(Debug)]
pub struct HtmlOutput<'a> {
    report: &'a PredictionReport,
    history: Option<&'a PredictionHistory>,
}

impl<'a> HtmlOutput<'a> {
    /// Create a new HTML output formatter
    pub fn new(report: &'a PredictionReport) -> Self {
        Self {
            report,
            history: None,
        }
    }

    /// Include a repeated-run summary section
    pub fn with_history(mut self, history: &'a PredictionHistory) -> Self {
        self.history = Some(history);
        self
    }

    /// Escape HTML special characters to prevent XSS
    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    /// Generate embedded CSS styles
    fn generate_styles() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        h1, h2 {
            color: #333;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #4a90d9;
            color: white;
            font-weight: bold;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
        .value {
            font-family: monospace;
        }
        .highlight {
            font-weight: bold;
            color: #0066cc;
        }
        .results-table th {
            background-color: #5cb85c;
        }
        .footer {
            margin-top: 20px;
            font-size: 0.8em;
            color: #888;
            text-align: center;
        }
        "#
    }

    /// Two-column key/value row
    fn row(label: &str, value: &str, class: &str) -> String {
        format!(
            "        <tr><th>{}</th><td class=\"{}\">{}</td></tr>\n",
            Self::escape_html(label),
            class,
            Self::escape_html(value)
        )
    }

    fn render_parameters(&self) -> String {
        let p = &self.report.parameters;
        let mut html = String::new();

        html.push_str("    <h2>Parameters</h2>\n");
        html.push_str("    <table>\n");
        if self.report.is_synthetic() {
            html.push_str(&Self::row("True radius (R)", &format!("{} mm", p.radius_mm), "value"));
            html.push_str(&Self::row("Noise level", &format!("{}%", p.noise_percent), "value"));
        }
        html.push_str(&Self::row(
            "Wavelength (λ)",
            &format!("{} nm", p.wavelength_nm),
            "value",
        ));
        html.push_str(&Self::row(
            "Rings (n)",
            &self.report.measured.len().to_string(),
            "value",
        ));
        html.push_str(&Self::row("Model", p.model.label(), "value"));
        html.push_str(&Self::row(
            "Confidence level",
            &format!("{:.0}%", p.confidence_level * 100.0),
            "value",
        ));
        html.push_str("    </table>\n");

        html
    }

    fn render_results(&self) -> String {
        let r = self.report;
        let mut html = String::new();

        html.push_str("    <h2>Results</h2>\n");
        html.push_str("    <table class=\"results-table\">\n");
        html.push_str(&Self::row(
            "Predicted radius",
            &format!(
                "{:.2} ± {:.2} mm",
                r.inference.predicted_radius, r.inference.confidence_interval_half_width
            ),
            "value highlight",
        ));
        if let Some(error) = r.relative_error_percent {
            html.push_str(&Self::row("Relative error", &format!("{:.2}%", error), "value"));
        }
        html.push_str(&Self::row(
            "Fit slope",
            &format!("{:.3e} mm²/ring", r.regression.slope),
            "value",
        ));
        html.push_str(&Self::row(
            "Fit intercept",
            &format!("{:.3e} mm²", r.regression.intercept),
            "value",
        ));
        html.push_str(&Self::row("R²", &format!("{:.4}", r.regression.r2), "value"));
        html.push_str(&Self::row(
            "Duration",
            &format!("{:.1} ms", r.duration_ms),
            "value",
        ));
        html.push_str("    </table>\n");

        html
    }

    fn render_data(&self) -> String {
        let r = self.report;
        let synthetic = r.is_synthetic();
        let mut html = String::new();

        html.push_str("    <h2>Ring Data</h2>\n");
        html.push_str("    <table>\n");
        if synthetic {
            html.push_str("        <tr><th>m</th><th>Ideal (mm²)</th><th>Measured (mm²)</th><th>Fitted (mm²)</th></tr>\n");
        } else {
            html.push_str("        <tr><th>m</th><th>Measured (mm²)</th><th>Fitted (mm²)</th></tr>\n");
        }

        for (i, point) in r.measured.iter().enumerate() {
            let fitted = r.regression.predict(point.x);
            let ideal_cell = match (synthetic, r.ideal.get(i)) {
                (true, Some(ideal)) => format!("<td class=\"value\">{:.5e}</td>", ideal.y),
                (true, None) => "<td></td>".to_string(),
                (false, _) => String::new(),
            };
            html.push_str(&format!(
                "        <tr><td>{}</td>{}<td class=\"value\">{:.5e}</td><td class=\"value\">{:.5e}</td></tr>\n",
                point.x, ideal_cell, point.y, fitted
            ));
        }

        html.push_str("    </table>\n");
        html
    }

    fn render_history(history: &PredictionHistory) -> String {
        let mut html = String::new();

        html.push_str("    <h2>Repeated Runs</h2>\n");
        html.push_str("    <table>\n");
        html.push_str(&Self::row("Runs", &history.len().to_string(), "value"));
        if let Some(mean) = history.mean() {
            html.push_str(&Self::row("Mean radius", &format!("{:.2} mm", mean), "value"));
        }
        if let Some(std) = history.std_dev() {
            html.push_str(&Self::row("Std deviation", &format!("{:.2} mm", std), "value"));
        }
        html.push_str("    </table>\n");

        html
    }

    /// Generate complete HTML document
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");

        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str("    <title>Newton's Rings Prediction Report</title>\n");
        html.push_str("    <style>");
        html.push_str(Self::generate_styles());
        html.push_str("</style>\n");
        html.push_str("</head>\n");

        html.push_str("<body>\n");
        html.push_str("    <h1>Newton&#39;s Rings Curvature Prediction</h1>\n");

        html.push_str(&self.render_parameters());
        html.push_str(&self.render_results());
        if let Some(history) = self.history {
            html.push_str(&Self::render_history(history));
        }
        html.push_str(&self.render_data());

        html.push_str("    <div class=\"footer\">\n");
        html.push_str(&format!(
            "        Generated by newton-rings {} (unix time {})\n",
            env!("CARGO_PKG_VERSION"),
            self.report.generated_at
        ));
        html.push_str("    </div>\n");

        html.push_str("</body>\n");
        html.push_str("</html>\n");

        html
    }
}

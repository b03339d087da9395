use anyhow::Result;
use clap::Parser;
use newton_rings::cli::{Cli, OutputFormat};
use newton_rings::config::SimulationConfig;
use newton_rings::csv_output::CsvOutput;
use newton_rings::html_output::HtmlOutput;
use newton_rings::json_output::JsonOutput;
use newton_rings::measurements::{load_points, ValueColumn};
use newton_rings::simulator::{
    analyze_measurements, rng_for, run_prediction, PredictionHistory, PredictionReport,
};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Run `runs` synthetic predictions with one RNG stream
fn run_simulation(
    config: &SimulationConfig,
    runs: usize,
) -> Result<(PredictionReport, PredictionHistory)> {
    let mut rng = rng_for(config);
    let mut history = PredictionHistory::default();
    let mut last = None;

    for run in 1..=runs {
        let report = run_prediction(config, &mut rng)?;
        tracing::debug!(run, radius = report.inference.predicted_radius, "run finished");
        history.record(report.inference.predicted_radius);
        last = Some(report);
    }

    let report = last.ok_or_else(|| anyhow::anyhow!("No prediction runs were made"))?;
    Ok((report, history))
}

/// Fit a measurement file using the wavelength, model and level from `config`
fn run_measurements(path: &Path, config: &SimulationConfig) -> Result<PredictionReport> {
    let points = load_points(path, ValueColumn::Last)?;
    analyze_measurements(
        points,
        config.wavelength_nm,
        config.model,
        config.confidence_level,
    )
}

fn print_report(
    report: &PredictionReport,
    history: Option<&PredictionHistory>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", report.to_report_string());
            if let Some(history) = history {
                println!("\nRepeated runs: {}", history.summary());
            }
        }
        OutputFormat::Json => {
            let mut output = JsonOutput::new(report.clone());
            if let Some(history) = history {
                output = output.with_history(history);
            }
            println!("{}", output.to_json()?);
        }
        OutputFormat::Csv => {
            print!("{}", CsvOutput::from_report(report).to_csv());
        }
        OutputFormat::Html => {
            let mut output = HtmlOutput::new(report);
            if let Some(history) = history {
                output = output.with_history(history);
            }
            print!("{}", output.to_html());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.runs == 0 {
        anyhow::bail!("Invalid value for --runs: 0 (must be >= 1)");
    }

    init_tracing(args.debug);

    let config = args.simulation_config()?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid simulation parameters: {}", e))?;

    if let Some(path) = &args.measurements {
        let report = run_measurements(path, &config)?;
        return print_report(&report, None, args.format);
    }

    let (report, history) = run_simulation(&config, args.runs)?;
    let history = (args.runs > 1).then_some(&history);
    print_report(&report, history, args.format)
}

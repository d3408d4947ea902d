//! Command-line interface for the headless demo.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use scatter_core::SynthesisMode;

/// Salary distribution used when no data file is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Uniform 5..100 thousand
    Uniform,
    /// Six-bucket distribution up to 400 thousand
    Piecewise,
}

impl From<Mode> for SynthesisMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Uniform => SynthesisMode::Uniform,
            Mode::Piecewise => SynthesisMode::Piecewise,
        }
    }
}

/// Output format for rendered charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Png,
    Svg,
    Both,
}

/// Render the salary-by-year scatter chart to image files
#[derive(Parser, Debug)]
#[command(name = "scatter-demo")]
#[command(version)]
#[command(about = "Renders a salary-by-year scatter chart with filters, averages and a trend line", long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Load records from a .json or .csv file instead of synthesizing
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Synthetic salary distribution (overrides config file)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Number of synthetic records (overrides config file)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Seed for reproducible synthetic data
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Uncheck a filter value, e.g. `gender=Female` or `parental=No info` (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "GROUP=VALUE")]
    pub exclude: Vec<String>,

    /// Drop records above this salary (overrides config file)
    #[arg(long)]
    pub ceiling: Option<f64>,

    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    pub out: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: Format,

    /// Also write the loaded records as JSON to this path
    #[arg(long)]
    pub export_data: Option<PathBuf>,

    /// Log filter (overrides config file and RUST_LOG), e.g. `debug` or `scatter_core=trace`
    #[arg(short, long)]
    pub log_level: Option<String>,
}

//! CLI interface for intrinsic-sim
//!
//! Provides subcommands for:
//! - `evaluate`: Evaluate the configured assumptions
//! - `scenarios`: Compare bear/base/bull presets
//! - `score`: Aggressiveness score and confidence label
//! - `sparkline`: Illustrative sparkline points
//! - `forecast`: Multi-year projection and horizon returns
//! - `sensitivity`: Parameter sweeps and grids
//! - `quote` / `series`: Synthetic market data

mod forecast;
mod market;
mod sensitivity;
mod valuation;

pub use forecast::ForecastArgs;
pub use market::{QuoteArgs, SeriesArgs};
pub use sensitivity::{SensitivityArgs, SensitivityCommand};
pub use valuation::{execute_scenarios, EvaluateArgs, ScoreArgs, SparklineArgs};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "intrinsic-sim")]
#[command(about = "Deterministic valuation, scenario and synthetic market simulation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the configured assumptions
    Evaluate(EvaluateArgs),
    /// Compare bear, base and bull presets
    Scenarios,
    /// Score how aggressive the assumptions are
    Score(ScoreArgs),
    /// Print sparkline points
    Sparkline(SparklineArgs),
    /// Project revenue and equity value over several years
    Forecast(ForecastArgs),
    /// Run sensitivity sweeps
    Sensitivity(SensitivityArgs),
    /// Show a synthetic quote
    Quote(QuoteArgs),
    /// Show a synthetic price series
    Series(SeriesArgs),
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Print `value` as pretty JSON, or the rendered table
pub(crate) fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    table: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Table => println!("{}", table()),
    }
    Ok(())
}

/// Render a grid with labelled axes
pub(crate) fn format_grid(
    title: &str,
    row_values: &[f64],
    column_values: &[f64],
    grid: &[Vec<f64>],
    cell: impl Fn(f64) -> String,
) -> String {
    let mut out = format!("{title}\n{:>10}", "");
    for column in column_values {
        out.push_str(&format!("{column:>10.2}"));
    }
    out.push('\n');
    for (row_value, row) in row_values.iter().zip(grid) {
        out.push_str(&format!("{row_value:>10.3}"));
        for value in row {
            out.push_str(&format!("{:>10}", cell(*value)));
        }
        out.push('\n');
    }
    out
}

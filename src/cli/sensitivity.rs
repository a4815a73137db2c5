//! Sensitivity command implementation

use super::{emit, format_grid, OutputFormat};
use crate::config::Config;
use crate::sensitivity::{GridVariable, MatrixAxes, SensitivityAnalyzer, SweepVariable};
use crate::forecast::MAX_HORIZON_YEARS;
use crate::valuation::ValuationEngine;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct SensitivityArgs {
    #[command(subcommand)]
    pub command: SensitivityCommand,
}

#[derive(Subcommand, Debug)]
pub enum SensitivityCommand {
    /// Annualized return over revenue growth x exit multiple
    Grid {
        /// Horizon in years (defaults to the configured horizon)
        #[arg(long, value_parser = clap::value_parser!(u32).range(..=MAX_HORIZON_YEARS as i64))]
        horizon: Option<u32>,
    },
    /// Intrinsic value across offsets of one variable
    Sweep {
        /// driver[:index], operating-margin, discount-rate or terminal-growth
        variable: SweepVariable,
    },
    /// Intrinsic value over two variables
    Matrix {
        /// Row variable: discount-rate or operating-margin
        rows: GridVariable,
        /// Column variable, different from the row variable
        columns: GridVariable,
    },
}

impl SensitivityArgs {
    pub fn execute(&self, config: &Config, format: OutputFormat) -> anyhow::Result<()> {
        let analyzer = SensitivityAnalyzer::new(ValuationEngine::new());
        match &self.command {
            SensitivityCommand::Grid { horizon } => {
                let horizon = horizon.unwrap_or(config.sensitivity.horizon_years);
                let result = analyzer.forecast_grid(&config.forecast.assumptions, horizon);
                emit(format, &result, || {
                    format_grid(
                        &format!("Annualized return at {horizon}y (rows: CAGR, columns: multiple)"),
                        &result.row_values,
                        &result.column_values,
                        &result.grid,
                        |v| format!("{:.2}%", v * 100.0),
                    )
                })
            }
            SensitivityCommand::Sweep { variable } => {
                let series = analyzer.sweep(&config.valuation, *variable);
                emit(format, &series, || {
                    let mut out = format!("{:>8}{:>10}{:>12}\n", "offset", "value", "intrinsic");
                    for ((offset, applied), value) in series
                        .offsets
                        .iter()
                        .zip(&series.applied_values)
                        .zip(&series.intrinsic_values)
                    {
                        out.push_str(&format!("{offset:>8}{applied:>10.2}{value:>12.2}\n"));
                    }
                    out
                })
            }
            SensitivityCommand::Matrix { rows, columns } => {
                let axes = MatrixAxes::new(*rows, *columns)
                    .ok_or_else(|| anyhow::anyhow!("matrix rows and columns must differ"))?;
                let result = analyzer.matrix(&config.valuation, axes);
                emit(format, &result, || {
                    format_grid(
                        "Intrinsic value",
                        &result.row_values,
                        &result.column_values,
                        &result.grid,
                        |v| format!("{v:.2}"),
                    )
                })
            }
        }
    }
}

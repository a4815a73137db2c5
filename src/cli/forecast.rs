//! Forecast command implementation

use super::{emit, OutputFormat};
use crate::config::Config;
use crate::forecast::{ForecastEngine, ForecastResult, MAX_HORIZON_YEARS};
use clap::Args;

#[derive(Args, Debug)]
pub struct ForecastArgs {
    /// Horizons in years, comma separated (defaults to the configured list)
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = clap::value_parser!(u32).range(..=MAX_HORIZON_YEARS as i64)
    )]
    pub horizons: Option<Vec<u32>>,
}

fn format_forecast(result: &ForecastResult) -> String {
    let mut out = format!(
        "{:>4}{:>12}{:>12}{:>12}{:>12}\n",
        "year", "revenue", "op income", "equity", "price"
    );
    for p in &result.projections {
        out.push_str(&format!(
            "{:>4}{:>12.1}{:>12.1}{:>12.1}{:>12.2}\n",
            p.year, p.revenue, p.operating_income, p.equity_value, p.implied_price
        ));
    }
    out.push('\n');
    for r in &result.returns {
        out.push_str(&format!(
            "{:>2}y  total {:+7.1}%  annualized {:+6.2}%\n",
            r.horizon,
            r.total_return * 100.0,
            r.annualized_return * 100.0
        ));
    }
    out.push_str(&format!(
        "\nFair value {:.2} ({:+.1}%)",
        result.fair_value, result.upside_percent
    ));
    out
}

impl ForecastArgs {
    pub fn execute(&self, config: &Config, format: OutputFormat) -> anyhow::Result<()> {
        let horizons = self
            .horizons
            .as_deref()
            .unwrap_or(&config.forecast.horizons);
        let result = ForecastEngine::new().forecast(&config.forecast.assumptions, horizons);
        tracing::info!(
            horizons = ?horizons,
            fair_value = result.fair_value,
            "Forecast complete"
        );
        emit(format, &result, || format_forecast(&result))
    }
}

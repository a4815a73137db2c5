//! Market data command implementations

use super::{emit, OutputFormat};
use crate::market::{MarketSimulator, PriceRange};
use clap::Args;

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Ticker symbol
    pub symbol: String,
}

#[derive(Args, Debug)]
pub struct SeriesArgs {
    /// Ticker symbol
    pub symbol: String,

    /// Chart range: 1D, 1W, 1M, 3M, 1Y or 5Y
    #[arg(short, long, default_value = "1M")]
    pub range: PriceRange,
}

impl QuoteArgs {
    pub fn execute(&self, format: OutputFormat) -> anyhow::Result<()> {
        let quote = MarketSimulator::new().quote(&self.symbol);
        emit(format, &quote, || {
            format!(
                "{}  {}  {:+} ({:+}%)\nHigh {}  Low {}",
                quote.symbol,
                quote.price,
                quote.change.absolute,
                quote.change.percent,
                quote.day_range.high,
                quote.day_range.low,
            )
        })
    }
}

impl SeriesArgs {
    pub fn execute(&self, format: OutputFormat) -> anyhow::Result<()> {
        let series = MarketSimulator::new().price_series(&self.symbol, self.range);
        tracing::debug!(symbol = %self.symbol, points = series.len(), "Series generated");
        emit(format, &series, || {
            let prices: Vec<String> = series.prices.iter().map(|p| p.to_string()).collect();
            format!("{} {}\n{}", series.symbol, series.range, prices.join(" "))
        })
    }
}

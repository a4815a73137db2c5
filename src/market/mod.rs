//! Synthetic market data module
//!
//! Reproducible prices keyed only by ticker symbol. Every quantity draws
//! from its own generator seeded off the symbol hash, so the same symbol
//! always produces the same quote and series, in any order, on any thread.

mod generator;
mod types;

pub use generator::{seed_for, DeterministicSequenceGenerator};
pub use types::{DayChange, DayRange, MarketError, PriceRange, PriceSeries, Quote};

use rust_decimal::{Decimal, RoundingStrategy};

const PRICE_BOUNDS: (f64, f64) = (50.0, 500.0);
const DAY_CHANGE_PCT_BOUNDS: (f64, f64) = (-5.0, 5.0);
const DAY_RANGE_PCT_BOUNDS: (f64, f64) = (0.5, 3.0);
/// Per-step noise as a fraction of the current price
const SERIES_NOISE: f64 = 0.02;
/// Series prices stay within this band around the current price
const SERIES_BAND: (f64, f64) = (0.5, 1.5);

const CHANGE_SEED_OFFSET: u64 = 1_000;
const RANGE_SEED_OFFSET: u64 = 2_000;

/// Stateless synthetic price source
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketSimulator;

impl MarketSimulator {
    /// Create a new simulator
    pub fn new() -> Self {
        Self
    }

    /// Current price in `[50, 500]`, rounded to cents
    pub fn current_price(&self, symbol: &str) -> Decimal {
        let mut generator = DeterministicSequenceGenerator::new(seed_for(symbol));
        to_cents(generator.next_in_range(PRICE_BOUNDS.0, PRICE_BOUNDS.1))
    }

    /// Change since the previous close, between -5% and +5%
    pub fn day_change(&self, symbol: &str) -> DayChange {
        let mut generator =
            DeterministicSequenceGenerator::new(seed_for(symbol) + CHANGE_SEED_OFFSET);
        let percent = generator.next_in_range(DAY_CHANGE_PCT_BOUNDS.0, DAY_CHANGE_PCT_BOUNDS.1);
        let price = as_f64(self.current_price(symbol));
        DayChange {
            absolute: to_cents(price * percent / 100.0),
            percent: to_cents(percent),
        }
    }

    /// Intraday high and low, each 0.5% to 3% away from the current price
    pub fn day_high_low(&self, symbol: &str) -> DayRange {
        let mut generator =
            DeterministicSequenceGenerator::new(seed_for(symbol) + RANGE_SEED_OFFSET);
        let high_pct = generator.next_in_range(DAY_RANGE_PCT_BOUNDS.0, DAY_RANGE_PCT_BOUNDS.1);
        let low_pct = generator.next_in_range(DAY_RANGE_PCT_BOUNDS.0, DAY_RANGE_PCT_BOUNDS.1);
        let price = as_f64(self.current_price(symbol));
        DayRange {
            high: to_cents(price * (1.0 + high_pct / 100.0)),
            low: to_cents(price * (1.0 - low_pct / 100.0)),
        }
    }

    /// Price, change and range in one value
    pub fn quote(&self, symbol: &str) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            price: self.current_price(symbol),
            change: self.day_change(symbol),
            day_range: self.day_high_low(symbol),
        }
    }

    /// Price path for `range`, drifting from the previous close toward the
    /// current price. The last point is always exactly the current price.
    pub fn price_series(&self, symbol: &str, range: PriceRange) -> PriceSeries {
        let current = self.current_price(symbol);
        let target = as_f64(current);
        let points = range.point_count();
        let mut generator =
            DeterministicSequenceGenerator::new(seed_for(symbol) + seed_for(range.label()));

        let noise = SERIES_NOISE * target;
        let (floor, ceiling) = (SERIES_BAND.0 * target, SERIES_BAND.1 * target);
        let mut price = target - as_f64(self.day_change(symbol).absolute);

        let mut prices = Vec::with_capacity(points);
        for i in 0..points {
            prices.push(to_cents(price));
            let drift = (target - price) / (points - i) as f64;
            price = (price + drift + generator.next_in_range(-noise, noise)).clamp(floor, ceiling);
        }
        if let Some(last) = prices.last_mut() {
            *last = current;
        }

        tracing::trace!(symbol, range = %range, points, "Generated price series");

        PriceSeries {
            symbol: symbol.to_string(),
            range,
            prices,
        }
    }
}

fn to_cents(value: f64) -> Decimal {
    Decimal::try_from(value)
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn as_f64(value: Decimal) -> f64 {
    f64::try_from(value).unwrap_or(0.0)
}

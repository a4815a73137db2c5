//! Compound-growth projection with an exit multiple

use super::{ForecastAssumptions, ForecastResult, HorizonReturn, YearProjection};

/// Projections always cover at least this many years
const MIN_PROJECTION_YEARS: u32 = 10;
const MIN_SHARES: f64 = 1e-6;

/// Longest horizon projected. Longer requests are clamped to it.
pub const MAX_HORIZON_YEARS: u32 = 100;

/// Multi-year projection engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastEngine;

impl ForecastEngine {
    /// Create a new forecast engine
    pub fn new() -> Self {
        Self
    }

    /// Project years `0..=max(10, max(horizons))` and summarize returns at
    /// each requested horizon. Horizons beyond [`MAX_HORIZON_YEARS`] are
    /// clamped, and the clamped horizon is what the summary reports.
    pub fn forecast(&self, assumptions: &ForecastAssumptions, horizons: &[u32]) -> ForecastResult {
        let mut horizons: Vec<u32> = horizons
            .iter()
            .map(|&h| h.min(MAX_HORIZON_YEARS))
            .collect();
        horizons.sort_unstable();
        horizons.dedup();

        let last_year = horizons
            .last()
            .copied()
            .unwrap_or(0)
            .max(MIN_PROJECTION_YEARS);
        let projections: Vec<YearProjection> = (0..=last_year)
            .map(|year| project_year(assumptions, year))
            .collect();

        let price = assumptions.current_price;
        let returns = horizons
            .iter()
            .map(|&horizon| {
                let implied_price = projections[horizon as usize].implied_price;
                let (total_return, annualized_return) = if price > 0.0 {
                    let ratio = implied_price / price;
                    (ratio - 1.0, annualize(ratio, horizon.max(1)))
                } else {
                    (0.0, 0.0)
                };
                HorizonReturn {
                    horizon,
                    implied_price,
                    total_return,
                    annualized_return,
                }
            })
            .collect();

        let fair_value = projections
            .last()
            .map(|p| p.implied_price)
            .unwrap_or_default();
        let upside_percent = if price > 0.0 {
            (fair_value - price) / price * 100.0
        } else {
            0.0
        };

        tracing::trace!(years = projections.len(), fair_value, "Forecast projected");

        ForecastResult {
            projections,
            returns,
            fair_value,
            upside_percent,
        }
    }
}

fn project_year(a: &ForecastAssumptions, year: u32) -> YearProjection {
    let revenue = a.current_revenue * (1.0 + a.revenue_cagr).powi(year as i32);
    let operating_income = revenue * a.operating_margin;
    let enterprise_value = revenue * a.exit_multiple;
    let equity_value = enterprise_value - a.net_debt;
    YearProjection {
        year,
        revenue,
        operating_income,
        after_tax_operating_income: operating_income * (1.0 - a.tax_rate),
        enterprise_value,
        equity_value,
        implied_price: equity_value / a.shares_outstanding.max(MIN_SHARES),
    }
}

/// Geometric annualization. A negative ratio has no real root and yields -100%.
fn annualize(ratio: f64, years: u32) -> f64 {
    if ratio <= 0.0 {
        return -1.0;
    }
    ratio.powf(1.0 / years as f64) - 1.0
}

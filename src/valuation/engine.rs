//! Index-based intrinsic value model
//!
//! A closed-form stand-in for a discounted cash flow model:
//! revenue index -> FCF margin -> FCF index -> forecast PV + terminal PV.
//! Every intermediate is clamped so the outputs stay bounded for any input.

use super::{DcfInputs, DcfOutputs, DriverUnit, RevenueDriver, Valuator};

const REVENUE_INDEX_BOUNDS: (f64, f64) = (30.0, 300.0);
const FCF_MARGIN_CAP: f64 = 0.35;
const FCF_INDEX_CAP: f64 = 120.0;
const INTRINSIC_BOUNDS: (f64, f64) = (20.0, 800.0);
const CAGR_BOUNDS: (f64, f64) = (-50.0, 50.0);

/// Converts the FCF index into per-share value units
const FCF_SCALE: f64 = 1.2;
const FORECAST_WEIGHT: f64 = 0.9;
const TERMINAL_WEIGHT: f64 = 0.6;
const MIN_RATE: f64 = 0.01;

/// Reported terminal share of value.
///
/// Fixed approximation, independent of the forecast/terminal split that
/// `evaluate` actually computes.
pub const TERMINAL_SHARE_PERCENT: f64 = 65.0;

/// The canonical evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuationEngine;

impl ValuationEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self
    }

    /// Evaluate inputs into bounded outputs. Total for every input.
    pub fn evaluate(&self, inputs: &DcfInputs) -> DcfOutputs {
        let revenue_index = revenue_index(inputs);
        let fcf_margin = fcf_margin(inputs);
        let fcf_index = (revenue_index * fcf_margin).clamp(0.0, FCF_INDEX_CAP);

        let v = &inputs.valuation;
        let forecast_pv =
            fcf_index * FCF_SCALE * FORECAST_WEIGHT / (v.discount_rate / 100.0).max(MIN_RATE);
        let terminal_pv = fcf_index * FCF_SCALE * TERMINAL_WEIGHT
            / ((v.discount_rate - v.terminal_growth) / 100.0).max(MIN_RATE);
        let intrinsic_value =
            (forecast_pv + terminal_pv).clamp(INTRINSIC_BOUNDS.0, INTRINSIC_BOUNDS.1);

        let price = inputs.current_price;
        let upside_percent = if price > 0.0 {
            (intrinsic_value - price) / price * 100.0
        } else {
            0.0
        };

        let cagr_percent = if price > 0.0 && inputs.horizon_years > 0 {
            let growth = (intrinsic_value / price).powf(1.0 / inputs.horizon_years as f64);
            ((growth - 1.0) * 100.0).clamp(CAGR_BOUNDS.0, CAGR_BOUNDS.1)
        } else {
            0.0
        };

        DcfOutputs {
            revenue_index,
            fcf_margin,
            fcf_index,
            intrinsic_value,
            upside_percent,
            cagr_percent,
            terminal_share_percent: TERMINAL_SHARE_PERCENT,
        }
    }
}

impl Valuator for ValuationEngine {
    fn evaluate(&self, inputs: &DcfInputs) -> DcfOutputs {
        ValuationEngine::evaluate(self, inputs)
    }
}

/// Revenue multiplier contributed by a single driver, `None` when skipped
fn driver_multiplier(driver: &RevenueDriver) -> Option<f64> {
    match driver.unit {
        DriverUnit::Percent => Some(1.0 + driver.value / 100.0),
        DriverUnit::Multiple => Some(driver.value),
        DriverUnit::Number | DriverUnit::Currency => {
            driver.position().map(|position| 0.8 + 0.4 * position)
        }
    }
}

fn revenue_index(inputs: &DcfInputs) -> f64 {
    let product: f64 = inputs
        .revenue_impacting()
        .filter_map(driver_multiplier)
        .product();
    (100.0 * product).clamp(REVENUE_INDEX_BOUNDS.0, REVENUE_INDEX_BOUNDS.1)
}

fn fcf_margin(inputs: &DcfInputs) -> f64 {
    let op = &inputs.operating;
    let after_tax = op.operating_margin * (1.0 - op.tax_rate / 100.0);
    let margin = (after_tax - op.capex_percent - op.working_capital_percent).max(0.0);
    (margin / 100.0).clamp(0.0, FCF_MARGIN_CAP)
}

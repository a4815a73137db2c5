//! Illustrative sparkline curves for the live display.
//!
//! These are eased interpolations between two endpoints, not forecasts.

use super::{DcfInputs, Valuator};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Points in every sparkline
pub const SPARKLINE_POINTS: usize = 6;

const REVENUE_EASING: f64 = 0.9;

/// Metric a sparkline is drawn for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SparklineMetric {
    /// Base-100 revenue index toward the evaluated index
    Revenue,
    /// Current price toward intrinsic value
    Intrinsic,
}

impl FromStr for SparklineMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "revenue" => Ok(Self::Revenue),
            "intrinsic" => Ok(Self::Intrinsic),
            other => Err(format!("unknown sparkline metric: {other}")),
        }
    }
}

/// Sparkline points for `metric`, evaluated with the given valuator
pub fn sparkline_data<V: Valuator + ?Sized>(
    valuator: &V,
    metric: SparklineMetric,
    inputs: &DcfInputs,
) -> Vec<f64> {
    let outputs = valuator.evaluate(inputs);
    match metric {
        SparklineMetric::Revenue => eased(100.0, outputs.revenue_index, REVENUE_EASING),
        SparklineMetric::Intrinsic => {
            let exponent = 1.0 + inputs.valuation.discount_rate / 100.0 * 0.5;
            eased(inputs.current_price, outputs.intrinsic_value, exponent)
        }
    }
}

fn eased(start: f64, end: f64, exponent: f64) -> Vec<f64> {
    let last = (SPARKLINE_POINTS - 1) as f64;
    (0..SPARKLINE_POINTS)
        .map(|i| {
            let progress = i as f64 / last;
            start + (end - start) * progress.powf(exponent)
        })
        .collect()
}

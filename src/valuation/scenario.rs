//! Bear/base/bull assumption transforms

use super::{DcfInputs, DriverUnit, RevenueDriver};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Share of a driver's range moved per preset step
const DRIVER_RANGE_STEP: f64 = 0.20;
/// Flat step for multiple-unit drivers
const MULTIPLE_STEP: f64 = 0.05;
/// Minimum gap kept between discount rate and terminal growth
const RATE_GAP: f64 = 0.5;
const RATE_GAP_RESET: f64 = 0.6;

/// Scenario preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioPreset {
    Bear,
    Base,
    Bull,
}

impl ScenarioPreset {
    /// All presets, pessimistic first
    pub const ALL: [ScenarioPreset; 3] = [Self::Bear, Self::Base, Self::Bull];

    /// Apply this preset to a copy of the inputs
    pub fn apply(self, base: &DcfInputs) -> DcfInputs {
        scenario_inputs(base, self)
    }
}

impl fmt::Display for ScenarioPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bear => "bear",
            Self::Base => "base",
            Self::Bull => "bull",
        };
        f.write_str(name)
    }
}

impl FromStr for ScenarioPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bear" => Ok(Self::Bear),
            "base" => Ok(Self::Base),
            "bull" => Ok(Self::Bull),
            other => Err(format!("unknown scenario preset: {other}")),
        }
    }
}

/// Produce adjusted inputs for a preset. `Base` returns an unchanged copy.
pub fn scenario_inputs(base: &DcfInputs, preset: ScenarioPreset) -> DcfInputs {
    let direction = match preset {
        ScenarioPreset::Base => return base.clone(),
        ScenarioPreset::Bear => -1.0,
        ScenarioPreset::Bull => 1.0,
    };

    let mut inputs = base.clone();
    for driver in &mut inputs.revenue_drivers {
        shift_driver(driver, direction);
    }

    let op = &mut inputs.operating;
    let v = &mut inputs.valuation;
    if direction < 0.0 {
        op.operating_margin = (op.operating_margin - 3.0).max(5.0);
        op.capex_percent = (op.capex_percent + 1.0).min(15.0);
        op.working_capital_percent = (op.working_capital_percent + 0.5).min(5.0);
        v.discount_rate = (v.discount_rate + 1.0).min(20.0);
        v.terminal_growth = (v.terminal_growth - 0.3).max(1.0);
    } else {
        op.operating_margin = (op.operating_margin + 3.0).min(40.0);
        op.capex_percent = (op.capex_percent - 1.0).max(0.0);
        op.working_capital_percent = (op.working_capital_percent - 0.5).max(0.0);
        v.discount_rate = (v.discount_rate - 1.0).max(5.0);
        v.terminal_growth = (v.terminal_growth + 0.3).min(4.0);
    }

    if v.terminal_growth > v.discount_rate - RATE_GAP {
        tracing::debug!(
            preset = %preset,
            discount_rate = v.discount_rate,
            terminal_growth = v.terminal_growth,
            "Terminal growth reset below discount rate"
        );
        v.terminal_growth = v.discount_rate - RATE_GAP_RESET;
    }

    inputs
}

/// Move a driver toward its floor (direction < 0) or ceiling (direction > 0)
fn shift_driver(driver: &mut RevenueDriver, direction: f64) {
    let step = match driver.unit {
        DriverUnit::Multiple => MULTIPLE_STEP,
        DriverUnit::Percent | DriverUnit::Number | DriverUnit::Currency => {
            driver.range() * DRIVER_RANGE_STEP
        }
    };
    let moved = driver.value + direction * step;
    driver.value = if direction < 0.0 {
        moved.max(driver.min)
    } else {
        moved.min(driver.max)
    };
}

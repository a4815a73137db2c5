//! Valuation value objects

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a revenue driver's value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverUnit {
    /// Growth rate in percent, e.g. 8.0 for +8%
    Percent,
    /// Direct multiplier, e.g. 1.1
    Multiple,
    /// Raw count positioned within its range
    Number,
    /// Money amount positioned within its range
    Currency,
}

/// A user-adjustable assumption feeding the revenue index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueDriver {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub unit: DriverUnit,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    #[serde(default = "default_true")]
    pub impacts_revenue: bool,
}

fn default_true() -> bool {
    true
}

impl RevenueDriver {
    /// Create a revenue-impacting driver with a unit step
    pub fn new(title: impl Into<String>, unit: DriverUnit, value: f64, min: f64, max: f64) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            unit,
            value,
            min,
            max,
            step: 1.0,
            impacts_revenue: true,
        }
    }

    /// Width of the allowed range
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Position of the value within its range, `None` for an empty range
    pub fn position(&self) -> Option<f64> {
        let range = self.range();
        (range > 0.0).then(|| (self.value - self.min) / range)
    }

    /// Copy of this driver with `value` clamped into `[min, max]`
    pub fn with_value(&self, value: f64) -> Self {
        let mut driver = self.clone();
        driver.value = value.max(self.min).min(self.max);
        driver
    }
}

/// Operating assumptions, all percentages on a 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingAssumptions {
    pub gross_margin: f64,
    pub operating_margin: f64,
    pub tax_rate: f64,
    pub capex_percent: f64,
    pub working_capital_percent: f64,
}

impl Default for OperatingAssumptions {
    fn default() -> Self {
        Self {
            gross_margin: 45.0,
            operating_margin: 18.0,
            tax_rate: 21.0,
            capex_percent: 4.0,
            working_capital_percent: 2.0,
        }
    }
}

/// Terminal value method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalMethod {
    #[default]
    Perpetuity,
    /// Accepted but valued with the perpetuity formula
    ExitMultiple,
}

/// Discounting assumptions in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationAssumptions {
    pub discount_rate: f64,
    pub terminal_growth: f64,
    #[serde(default)]
    pub terminal_method: TerminalMethod,
}

impl Default for ValuationAssumptions {
    fn default() -> Self {
        Self {
            discount_rate: 10.0,
            terminal_growth: 2.0,
            terminal_method: TerminalMethod::Perpetuity,
        }
    }
}

/// Complete input set for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcfInputs {
    #[serde(default)]
    pub revenue_drivers: Vec<RevenueDriver>,
    #[serde(default)]
    pub operating: OperatingAssumptions,
    #[serde(default)]
    pub valuation: ValuationAssumptions,
    pub horizon_years: u32,
    pub current_price: f64,
}

impl Default for DcfInputs {
    fn default() -> Self {
        Self {
            revenue_drivers: vec![RevenueDriver::new(
                "Revenue growth",
                DriverUnit::Percent,
                8.0,
                0.0,
                20.0,
            )],
            operating: OperatingAssumptions::default(),
            valuation: ValuationAssumptions::default(),
            horizon_years: 5,
            current_price: 100.0,
        }
    }
}

impl DcfInputs {
    /// Drivers that take part in the revenue index
    pub fn revenue_impacting(&self) -> impl Iterator<Item = &RevenueDriver> {
        self.revenue_drivers.iter().filter(|d| d.impacts_revenue)
    }

    /// Boundary validation for callers that want to reject degenerate input.
    ///
    /// The engine itself never calls this; it resolves every degenerate
    /// input to a documented default.
    pub fn validate(&self) -> Result<(), InputError> {
        for driver in &self.revenue_drivers {
            if driver.min > driver.max {
                return Err(InputError::InvertedRange {
                    title: driver.title.clone(),
                    min: driver.min,
                    max: driver.max,
                });
            }
            if driver.value < driver.min || driver.value > driver.max {
                return Err(InputError::ValueOutOfRange {
                    title: driver.title.clone(),
                    value: driver.value,
                });
            }
        }

        let v = &self.valuation;
        if v.terminal_growth >= v.discount_rate {
            return Err(InputError::TerminalGrowthTooHigh {
                terminal_growth: v.terminal_growth,
                discount_rate: v.discount_rate,
            });
        }
        if self.current_price <= 0.0 {
            return Err(InputError::NonPositivePrice(self.current_price));
        }
        if self.horizon_years == 0 {
            return Err(InputError::ZeroHorizon);
        }
        Ok(())
    }
}

/// Engine outputs for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcfOutputs {
    /// Base-100 revenue index in [30, 300]
    pub revenue_index: f64,
    /// Free cash flow margin as a fraction in [0, 0.35]
    pub fcf_margin: f64,
    /// Base-100 free cash flow index in [0, 120]
    pub fcf_index: f64,
    /// Estimated value per share in [20, 800]
    pub intrinsic_value: f64,
    pub upside_percent: f64,
    /// Implied CAGR in [-50, 50]
    pub cagr_percent: f64,
    pub terminal_share_percent: f64,
}

/// Input validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("driver '{title}' has min {min} above max {max}")]
    InvertedRange { title: String, min: f64, max: f64 },
    #[error("driver '{title}' value {value} is outside its range")]
    ValueOutOfRange { title: String, value: f64 },
    #[error("terminal growth {terminal_growth} must be below discount rate {discount_rate}")]
    TerminalGrowthTooHigh {
        terminal_growth: f64,
        discount_rate: f64,
    },
    #[error("current price must be positive, got {0}")]
    NonPositivePrice(f64),
    #[error("horizon must be at least one year")]
    ZeroHorizon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_are_valid() {
        assert!(DcfInputs::default().validate().is_ok());
    }

    #[test]
    fn test_validate_inverted_range() {
        let mut inputs = DcfInputs::default();
        inputs.revenue_drivers[0].min = 30.0;
        let err = inputs.validate().unwrap_err();
        assert!(matches!(err, InputError::InvertedRange { .. }));
    }

    #[test]
    fn test_validate_inverted_rates() {
        let mut inputs = DcfInputs::default();
        inputs.valuation.terminal_growth = 10.0;
        assert!(matches!(
            inputs.validate(),
            Err(InputError::TerminalGrowthTooHigh { .. })
        ));
    }

    #[test]
    fn test_validate_price_and_horizon() {
        let mut inputs = DcfInputs::default();
        inputs.current_price = 0.0;
        assert_eq!(inputs.validate(), Err(InputError::NonPositivePrice(0.0)));

        inputs.current_price = 10.0;
        inputs.horizon_years = 0;
        assert_eq!(inputs.validate(), Err(InputError::ZeroHorizon));
    }

    #[test]
    fn test_driver_position() {
        let driver = RevenueDriver::new("Units", DriverUnit::Number, 15.0, 10.0, 20.0);
        assert_eq!(driver.position(), Some(0.5));

        let flat = RevenueDriver::new("Flat", DriverUnit::Number, 5.0, 5.0, 5.0);
        assert_eq!(flat.position(), None);
    }

    #[test]
    fn test_with_value_clamps() {
        let driver = RevenueDriver::new("Growth", DriverUnit::Percent, 8.0, 0.0, 20.0);
        assert_eq!(driver.with_value(25.0).value, 20.0);
        assert_eq!(driver.with_value(-3.0).value, 0.0);
    }

    #[test]
    fn test_driver_unit_deserialize() {
        let unit: DriverUnit = serde_json::from_str("\"currency\"").unwrap();
        assert_eq!(unit, DriverUnit::Currency);
    }
}

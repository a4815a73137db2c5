//! Forecast value objects

use serde::{Deserialize, Serialize};

/// Assumptions for the multi-year projection, rates as fractions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastAssumptions {
    pub current_revenue: f64,
    /// Annual revenue growth, e.g. 0.08 for 8%
    pub revenue_cagr: f64,
    pub operating_margin: f64,
    pub tax_rate: f64,
    /// Enterprise value to revenue multiple applied every year
    pub exit_multiple: f64,
    pub net_debt: f64,
    pub shares_outstanding: f64,
    pub current_price: f64,
}

impl Default for ForecastAssumptions {
    fn default() -> Self {
        Self {
            current_revenue: 1_000.0,
            revenue_cagr: 0.08,
            operating_margin: 0.20,
            tax_rate: 0.21,
            exit_multiple: 3.0,
            net_debt: 200.0,
            shares_outstanding: 50.0,
            current_price: 60.0,
        }
    }
}

/// One row of the projection table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    pub year: u32,
    pub revenue: f64,
    pub operating_income: f64,
    pub after_tax_operating_income: f64,
    pub enterprise_value: f64,
    pub equity_value: f64,
    pub implied_price: f64,
}

/// Return summary at one horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonReturn {
    pub horizon: u32,
    pub implied_price: f64,
    pub total_return: f64,
    pub annualized_return: f64,
}

/// Full forecast output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub projections: Vec<YearProjection>,
    /// One entry per distinct requested horizon, ascending
    pub returns: Vec<HorizonReturn>,
    /// Implied price in the last projected year
    pub fair_value: f64,
    pub upside_percent: f64,
}

impl ForecastResult {
    /// Return summary for a horizon, if it was requested
    pub fn return_at(&self, horizon: u32) -> Option<&HorizonReturn> {
        self.returns.iter().find(|r| r.horizon == horizon)
    }
}

//! Growth x exit-multiple return grid backed by the forecast engine

use super::{SensitivityAnalyzer, SensitivityResult};
use crate::forecast::{ForecastAssumptions, MAX_HORIZON_YEARS};
use crate::valuation::Valuator;

/// Revenue CAGR offsets, one per row
pub const GROWTH_OFFSETS: [f64; 5] = [-0.02, -0.01, 0.0, 0.01, 0.02];
/// Exit multiple offsets, one per column
pub const MULTIPLE_OFFSETS: [f64; 5] = [-2.0, -1.0, 0.0, 1.0, 2.0];

const MIN_EXIT_MULTIPLE: f64 = 0.1;

impl<V: Valuator> SensitivityAnalyzer<V> {
    /// Annualized return at `horizon_years` for every growth/multiple pair.
    ///
    /// Rows follow [`GROWTH_OFFSETS`], columns [`MULTIPLE_OFFSETS`]; the axis
    /// values hold the applied CAGR and multiple. The horizon is clamped to
    /// [`MAX_HORIZON_YEARS`].
    pub fn forecast_grid(
        &self,
        assumptions: &ForecastAssumptions,
        horizon_years: u32,
    ) -> SensitivityResult {
        let horizon_years = horizon_years.min(MAX_HORIZON_YEARS);
        let row_values: Vec<f64> = GROWTH_OFFSETS
            .iter()
            .map(|offset| assumptions.revenue_cagr + offset)
            .collect();
        let column_values: Vec<f64> = MULTIPLE_OFFSETS
            .iter()
            .map(|offset| (assumptions.exit_multiple + offset).max(MIN_EXIT_MULTIPLE))
            .collect();

        let grid = row_values
            .iter()
            .map(|&revenue_cagr| {
                column_values
                    .iter()
                    .map(|&exit_multiple| {
                        let shifted = ForecastAssumptions {
                            revenue_cagr,
                            exit_multiple,
                            ..*assumptions
                        };
                        self.forecast_engine()
                            .forecast(&shifted, &[horizon_years])
                            .return_at(horizon_years)
                            .map(|r| r.annualized_return)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        tracing::debug!(horizon_years, "Computed forecast sensitivity grid");

        SensitivityResult {
            row_values,
            column_values,
            grid,
        }
    }
}

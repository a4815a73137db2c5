//! Sensitivity analysis module
//!
//! Parameter sweeps over the forecast engine (growth x exit multiple) and
//! over the canonical valuator (single-variable sweeps and 5x5 matrices).

mod grid;
mod sweep;

pub use grid::{GROWTH_OFFSETS, MULTIPLE_OFFSETS};
pub use sweep::{
    GridVariable, MatrixAxes, SweepSeries, SweepVariable, MATRIX_OFFSETS, SWEEP_OFFSETS,
};

use crate::forecast::ForecastEngine;
use crate::valuation::{ValuationEngine, Valuator};
use serde::{Deserialize, Serialize};

/// A 2D grid plus the axis values that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityResult {
    pub row_values: Vec<f64>,
    pub column_values: Vec<f64>,
    /// `grid[row][column]`
    pub grid: Vec<Vec<f64>>,
}

impl SensitivityResult {
    /// Value at the given row/column, if in bounds
    pub fn cell(&self, row: usize, column: usize) -> Option<f64> {
        self.grid.get(row)?.get(column).copied()
    }
}

/// Runs sweeps against an injected valuator
#[derive(Debug, Clone)]
pub struct SensitivityAnalyzer<V: Valuator = ValuationEngine> {
    valuator: V,
    forecast: ForecastEngine,
}

impl<V: Valuator> SensitivityAnalyzer<V> {
    /// Create an analyzer over the given valuator
    pub fn new(valuator: V) -> Self {
        Self {
            valuator,
            forecast: ForecastEngine::new(),
        }
    }

    pub fn valuator(&self) -> &V {
        &self.valuator
    }

    pub fn forecast_engine(&self) -> &ForecastEngine {
        &self.forecast
    }
}

impl Default for SensitivityAnalyzer<ValuationEngine> {
    fn default() -> Self {
        Self::new(ValuationEngine::new())
    }
}

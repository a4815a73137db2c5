//! One- and two-variable intrinsic value sweeps

use super::{SensitivityAnalyzer, SensitivityResult};
use crate::valuation::{DcfInputs, Valuator};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Offsets for one-variable sweeps
pub const SWEEP_OFFSETS: [f64; 5] = [-20.0, -10.0, 0.0, 10.0, 20.0];
/// Offsets for two-variable matrices
pub const MATRIX_OFFSETS: [f64; 5] = [-2.0, -1.0, 0.0, 1.0, 2.0];

/// Rate sweeps move in tenths of a point
const RATE_OFFSET_SCALE: f64 = 0.1;
/// Margin steps in a matrix are twice the rate steps
const MARGIN_MATRIX_SCALE: f64 = 2.0;

/// Variable swept in a one-dimensional sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepVariable {
    /// Revenue driver at the given index, clamped into its range
    RevenueDriver(usize),
    OperatingMargin,
    DiscountRate,
    TerminalGrowth,
}

impl FromStr for SweepVariable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if let Some(index) = lower.strip_prefix("driver:") {
            return index
                .parse()
                .map(Self::RevenueDriver)
                .map_err(|_| format!("invalid driver index: {index}"));
        }
        match lower.as_str() {
            "driver" => Ok(Self::RevenueDriver(0)),
            "operating-margin" => Ok(Self::OperatingMargin),
            "discount-rate" => Ok(Self::DiscountRate),
            "terminal-growth" => Ok(Self::TerminalGrowth),
            other => Err(format!("unknown sweep variable: {other}")),
        }
    }
}

/// Variable on one axis of a two-dimensional matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridVariable {
    DiscountRate,
    OperatingMargin,
}

impl FromStr for GridVariable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "discount-rate" => Ok(Self::DiscountRate),
            "operating-margin" => Ok(Self::OperatingMargin),
            other => Err(format!("unknown grid variable: {other}")),
        }
    }
}

/// Ordered pair of distinct matrix axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixAxes {
    rows: GridVariable,
    columns: GridVariable,
}

impl MatrixAxes {
    /// `None` when both axes name the same variable
    pub fn new(rows: GridVariable, columns: GridVariable) -> Option<Self> {
        (rows != columns).then_some(Self { rows, columns })
    }

    pub fn rows(&self) -> GridVariable {
        self.rows
    }

    pub fn columns(&self) -> GridVariable {
        self.columns
    }
}

/// Result of a one-variable sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSeries {
    pub variable: SweepVariable,
    pub offsets: Vec<f64>,
    /// Value the swept variable took at each offset
    pub applied_values: Vec<f64>,
    pub intrinsic_values: Vec<f64>,
}

/// Apply a sweep offset, returning the adjusted inputs and the applied value
fn apply_sweep(inputs: &DcfInputs, variable: SweepVariable, offset: f64) -> (DcfInputs, f64) {
    let mut shifted = inputs.clone();
    let applied = match variable {
        SweepVariable::RevenueDriver(index) => match shifted.revenue_drivers.get_mut(index) {
            Some(driver) => {
                *driver = driver.with_value(driver.value + offset);
                driver.value
            }
            None => 0.0,
        },
        SweepVariable::OperatingMargin => {
            shift_margin(&mut shifted, offset);
            shifted.operating.operating_margin
        }
        SweepVariable::DiscountRate => {
            shifted.valuation.discount_rate += offset * RATE_OFFSET_SCALE;
            shifted.valuation.discount_rate
        }
        SweepVariable::TerminalGrowth => {
            shifted.valuation.terminal_growth += offset * RATE_OFFSET_SCALE;
            shifted.valuation.terminal_growth
        }
    };
    (shifted, applied)
}

/// Move operating margin by `points`, kept within 0..100
fn shift_margin(inputs: &mut DcfInputs, points: f64) {
    let op = &mut inputs.operating;
    op.operating_margin = (op.operating_margin + points).clamp(0.0, 100.0);
}

fn apply_matrix(inputs: &mut DcfInputs, variable: GridVariable, offset: f64) {
    match variable {
        GridVariable::DiscountRate => inputs.valuation.discount_rate += offset,
        GridVariable::OperatingMargin => shift_margin(inputs, offset * MARGIN_MATRIX_SCALE),
    }
}

fn base_value(inputs: &DcfInputs, variable: GridVariable) -> f64 {
    match variable {
        GridVariable::DiscountRate => inputs.valuation.discount_rate,
        GridVariable::OperatingMargin => inputs.operating.operating_margin,
    }
}

impl<V: Valuator> SensitivityAnalyzer<V> {
    /// Intrinsic value at each of [`SWEEP_OFFSETS`] applied to one variable.
    ///
    /// A driver index with no matching driver leaves the inputs unchanged.
    pub fn sweep(&self, inputs: &DcfInputs, variable: SweepVariable) -> SweepSeries {
        let (applied_values, intrinsic_values) = SWEEP_OFFSETS
            .iter()
            .map(|&offset| {
                let (shifted, applied) = apply_sweep(inputs, variable, offset);
                (applied, self.valuator().evaluate(&shifted).intrinsic_value)
            })
            .unzip();

        SweepSeries {
            variable,
            offsets: SWEEP_OFFSETS.to_vec(),
            applied_values,
            intrinsic_values,
        }
    }

    /// Intrinsic value over a 5x5 grid of [`MATRIX_OFFSETS`].
    ///
    /// Operating margin offsets are doubled. Axis values hold the value each
    /// variable actually took, after clamping.
    pub fn matrix(&self, inputs: &DcfInputs, axes: MatrixAxes) -> SensitivityResult {
        let (rows, columns) = (axes.rows(), axes.columns());
        let axis = |variable: GridVariable| -> Vec<f64> {
            MATRIX_OFFSETS
                .iter()
                .map(|&offset| {
                    let mut shifted = inputs.clone();
                    apply_matrix(&mut shifted, variable, offset);
                    base_value(&shifted, variable)
                })
                .collect()
        };

        let grid = MATRIX_OFFSETS
            .iter()
            .map(|&row_offset| {
                MATRIX_OFFSETS
                    .iter()
                    .map(|&column_offset| {
                        let mut shifted = inputs.clone();
                        apply_matrix(&mut shifted, rows, row_offset);
                        apply_matrix(&mut shifted, columns, column_offset);
                        self.valuator().evaluate(&shifted).intrinsic_value
                    })
                    .collect()
            })
            .collect();

        tracing::debug!(?rows, ?columns, "Computed valuation sensitivity matrix");

        SensitivityResult {
            row_values: axis(rows),
            column_values: axis(columns),
            grid,
        }
    }
}

//! Integration tests for sensitivity analysis

use intrinsic_sim::forecast::{ForecastAssumptions, ForecastEngine, DEFAULT_HORIZON_YEARS};
use intrinsic_sim::sensitivity::{GridVariable, MatrixAxes, SensitivityAnalyzer, SweepVariable};
use intrinsic_sim::valuation::{DcfInputs, DcfOutputs, ValuationEngine, Valuator};

#[test]
fn test_grid_is_five_by_five_with_forecast_center() {
    let analyzer = SensitivityAnalyzer::new(ValuationEngine::new());
    let assumptions = ForecastAssumptions::default();

    for horizon in [1, DEFAULT_HORIZON_YEARS, 12] {
        let result = analyzer.forecast_grid(&assumptions, horizon);
        assert_eq!(result.row_values.len(), 5);
        assert_eq!(result.column_values.len(), 5);
        assert_eq!(result.grid.len(), 5);
        assert!(result.grid.iter().all(|row| row.len() == 5));

        let expected = ForecastEngine::new()
            .forecast(&assumptions, &[horizon])
            .return_at(horizon)
            .map(|r| r.annualized_return);
        assert_eq!(result.cell(2, 2), expected);
    }
}

/// Valuator that counts calls, to check sweeps go through the injected seam
struct CountingValuator {
    inner: ValuationEngine,
    calls: std::sync::atomic::AtomicUsize,
}

impl Valuator for CountingValuator {
    fn evaluate(&self, inputs: &DcfInputs) -> DcfOutputs {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.inner.evaluate(inputs)
    }
}

#[test]
fn test_sweeps_use_injected_valuator() {
    let analyzer = SensitivityAnalyzer::new(CountingValuator {
        inner: ValuationEngine::new(),
        calls: Default::default(),
    });
    let inputs = DcfInputs::default();

    analyzer.sweep(&inputs, SweepVariable::OperatingMargin);
    let axes = MatrixAxes::new(GridVariable::DiscountRate, GridVariable::OperatingMargin).unwrap();
    analyzer.matrix(&inputs, axes);

    let calls = analyzer
        .valuator()
        .calls
        .load(std::sync::atomic::Ordering::SeqCst);
    assert_eq!(calls, 5 + 25);
}

#[test]
fn test_sweep_matches_direct_evaluation() {
    let engine = ValuationEngine::new();
    let analyzer = SensitivityAnalyzer::new(engine);
    let inputs = DcfInputs::default();
    let series = analyzer.sweep(&inputs, SweepVariable::TerminalGrowth);

    for (applied, value) in series.applied_values.iter().zip(&series.intrinsic_values) {
        let mut shifted = inputs.clone();
        shifted.valuation.terminal_growth = *applied;
        assert_eq!(engine.evaluate(&shifted).intrinsic_value, *value);
    }
}

#[test]
fn test_matrix_axes_produce_grid() {
    let engine = ValuationEngine::new();
    let analyzer = SensitivityAnalyzer::new(engine);
    let inputs = DcfInputs::default();
    let axes = MatrixAxes::new(GridVariable::DiscountRate, GridVariable::OperatingMargin).unwrap();
    let result = analyzer.matrix(&inputs, axes);

    let mut corner = inputs.clone();
    corner.valuation.discount_rate = result.row_values[0];
    corner.operating.operating_margin = result.column_values[4];
    assert_eq!(result.grid[0][4], engine.evaluate(&corner).intrinsic_value);
}

#[test]
fn test_same_axis_matrix_rejected() {
    assert!(MatrixAxes::new(GridVariable::DiscountRate, GridVariable::DiscountRate).is_none());
    assert!(MatrixAxes::new(GridVariable::OperatingMargin, GridVariable::OperatingMargin).is_none());
}

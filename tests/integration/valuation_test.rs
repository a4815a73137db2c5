//! Integration tests for the valuation engine

use intrinsic_sim::valuation::{
    aggressiveness_score, confidence_label, ConfidenceLevel, DcfInputs, DriverUnit,
    OperatingAssumptions, RevenueDriver, ScenarioPreset, TargetStyle, TerminalMethod,
    ValuationAssumptions, ValuationEngine,
};
use proptest::prelude::*;

fn fixture() -> DcfInputs {
    DcfInputs {
        revenue_drivers: vec![RevenueDriver::new(
            "Growth",
            DriverUnit::Percent,
            8.0,
            0.0,
            20.0,
        )],
        operating: OperatingAssumptions {
            gross_margin: 40.0,
            operating_margin: 18.0,
            tax_rate: 21.0,
            capex_percent: 4.0,
            working_capital_percent: 2.0,
        },
        valuation: ValuationAssumptions {
            discount_rate: 10.0,
            terminal_growth: 2.0,
            terminal_method: TerminalMethod::Perpetuity,
        },
        horizon_years: 5,
        current_price: 100.0,
    }
}

#[test]
fn test_fixture_golden_outputs() {
    let out = ValuationEngine::new().evaluate(&fixture());
    assert!((out.revenue_index - 108.0).abs() < 1e-9);
    assert!((out.fcf_margin - 0.0822).abs() < 1e-9);
    assert!((out.fcf_index - 8.8776).abs() < 1e-9);
    assert!((out.intrinsic_value - 175.77648).abs() < 1e-9);
}

#[test]
fn test_fixture_scenario_ordering() {
    let engine = ValuationEngine::new();
    let inputs = fixture();
    let bear = engine.evaluate(&ScenarioPreset::Bear.apply(&inputs));
    let base = engine.evaluate(&ScenarioPreset::Base.apply(&inputs));
    let bull = engine.evaluate(&ScenarioPreset::Bull.apply(&inputs));

    assert!(bear.intrinsic_value <= base.intrinsic_value);
    assert!(base.intrinsic_value <= bull.intrinsic_value);
}

#[test]
fn test_scenarios_raise_or_lower_score() {
    let inputs = fixture();
    let base = aggressiveness_score(&inputs);
    assert!(aggressiveness_score(&ScenarioPreset::Bear.apply(&inputs)) < base);
    assert!(aggressiveness_score(&ScenarioPreset::Bull.apply(&inputs)) > base);
}

#[test]
fn test_confidence_label_boundaries() {
    let cases = [
        (33.0, ConfidenceLevel::Conservative),
        (34.0, ConfidenceLevel::Balanced),
        (66.0, ConfidenceLevel::Balanced),
        (67.0, ConfidenceLevel::Aggressive),
    ];
    for (score, expected) in cases {
        assert_eq!(confidence_label(score, TargetStyle::Base).label, expected);
    }
    assert_eq!(ConfidenceLevel::Conservative.to_string(), "Conservative");

    assert!(confidence_label(37.0, TargetStyle::Conservative).is_aligned);
    assert!(!confidence_label(38.0, TargetStyle::Conservative).is_aligned);
    assert!(confidence_label(87.0, TargetStyle::Aggressive).is_aligned);
    assert!(!confidence_label(88.0, TargetStyle::Aggressive).is_aligned);
}

#[test]
fn test_inverted_rate_pair_is_finite() {
    let mut inputs = fixture();
    inputs.valuation.discount_rate = 3.0;
    inputs.valuation.terminal_growth = 6.0;
    let out = ValuationEngine::new().evaluate(&inputs);
    assert!(out.intrinsic_value.is_finite());
    assert!(out.intrinsic_value <= 800.0);
    assert!(inputs.validate().is_err());
}

fn unit_strategy() -> impl Strategy<Value = DriverUnit> {
    prop_oneof![
        Just(DriverUnit::Percent),
        Just(DriverUnit::Multiple),
        Just(DriverUnit::Number),
        Just(DriverUnit::Currency),
    ]
}

prop_compose! {
    fn driver_strategy()(
        unit in unit_strategy(),
        min in 0.0f64..50.0,
        width in 0.0f64..100.0,
        position in 0.0f64..=1.0,
        impacts_revenue in any::<bool>(),
    ) -> RevenueDriver {
        let max = min + width;
        let mut driver = RevenueDriver::new("Driver", unit, min + position * width, min, max);
        driver.impacts_revenue = impacts_revenue;
        driver
    }
}

prop_compose! {
    fn inputs_strategy()(
        revenue_drivers in prop::collection::vec(driver_strategy(), 0..5),
        operating_margin in 0.0f64..60.0,
        tax_rate in 0.0f64..50.0,
        capex_percent in 0.0f64..20.0,
        working_capital_percent in 0.0f64..10.0,
        discount_rate in 1.0f64..25.0,
        terminal_growth in 0.0f64..6.0,
        horizon_years in 0u32..30,
        current_price in 0.0f64..1_000.0,
    ) -> DcfInputs {
        DcfInputs {
            revenue_drivers,
            operating: OperatingAssumptions {
                gross_margin: 50.0,
                operating_margin,
                tax_rate,
                capex_percent,
                working_capital_percent,
            },
            valuation: ValuationAssumptions {
                discount_rate,
                terminal_growth,
                terminal_method: TerminalMethod::Perpetuity,
            },
            horizon_years,
            current_price,
        }
    }
}

proptest! {
    #[test]
    fn outputs_stay_within_bounds(inputs in inputs_strategy()) {
        let out = ValuationEngine::new().evaluate(&inputs);
        prop_assert!((30.0..=300.0).contains(&out.revenue_index));
        prop_assert!((0.0..=0.35).contains(&out.fcf_margin));
        prop_assert!((0.0..=120.0).contains(&out.fcf_index));
        prop_assert!((20.0..=800.0).contains(&out.intrinsic_value));
        prop_assert!((-50.0..=50.0).contains(&out.cagr_percent));
        prop_assert!(out.upside_percent.is_finite());
    }

    #[test]
    fn scenarios_keep_drivers_in_range(inputs in inputs_strategy()) {
        for preset in ScenarioPreset::ALL {
            let adjusted = preset.apply(&inputs);
            for driver in &adjusted.revenue_drivers {
                prop_assert!(driver.value >= driver.min && driver.value <= driver.max);
            }
        }
    }

    #[test]
    fn bear_and_bull_enforce_rate_gap(inputs in inputs_strategy()) {
        for preset in [ScenarioPreset::Bear, ScenarioPreset::Bull] {
            let v = preset.apply(&inputs).valuation;
            prop_assert!(v.terminal_growth <= v.discount_rate - 0.5);
        }
    }

    #[test]
    fn score_within_bounds(inputs in inputs_strategy()) {
        let score = aggressiveness_score(&inputs);
        prop_assert!((0.0..=100.0).contains(&score));
    }
}

//! Valuation module
//!
//! Evaluates user-adjustable business assumptions into a bounded
//! intrinsic value estimate, plus scenario presets, an aggressiveness
//! score and sparkline curves built on the same evaluator.

mod engine;
mod scenario;
mod score;
mod sparkline;
mod types;

pub use engine::{ValuationEngine, TERMINAL_SHARE_PERCENT};
pub use scenario::{scenario_inputs, ScenarioPreset};
pub use score::{
    aggressiveness_score, confidence_label, ConfidenceLabel, ConfidenceLevel, TargetStyle,
};
pub use sparkline::{sparkline_data, SparklineMetric, SPARKLINE_POINTS};
pub use types::{
    DcfInputs, DcfOutputs, DriverUnit, InputError, OperatingAssumptions, RevenueDriver,
    TerminalMethod, ValuationAssumptions,
};

/// Trait for intrinsic value evaluators
///
/// Every sweep and derived view goes through this seam so there is exactly
/// one valuation formula in the crate.
pub trait Valuator: Send + Sync {
    /// Evaluate a full input set. Must be total.
    fn evaluate(&self, inputs: &DcfInputs) -> DcfOutputs;
}

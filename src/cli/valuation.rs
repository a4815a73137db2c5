//! Valuation command implementations

use super::{emit, OutputFormat};
use crate::config::Config;
use crate::valuation::{
    aggressiveness_score, confidence_label, sparkline_data, DcfInputs, DcfOutputs,
    ScenarioPreset, SparklineMetric, TargetStyle, ValuationEngine,
};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Scenario preset applied before evaluation
    #[arg(short, long, default_value = "base")]
    pub preset: ScenarioPreset,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Style the assumptions are compared against
    #[arg(short, long, default_value = "base")]
    pub style: TargetStyle,
}

#[derive(Args, Debug)]
pub struct SparklineArgs {
    /// Metric to draw: revenue or intrinsic
    pub metric: SparklineMetric,
}

/// Log validation problems without blocking evaluation
fn warn_if_invalid(inputs: &DcfInputs) {
    if let Err(e) = inputs.validate() {
        tracing::warn!(error = %e, "Assumptions failed validation, evaluating anyway");
    }
}

fn format_outputs(preset: ScenarioPreset, out: &DcfOutputs) -> String {
    format!(
        r#"
══════════════════════════════════════════════════════
               VALUATION ({preset})
══════════════════════════════════════════════════════
Revenue Index:    {:.2}
FCF Margin:       {:.2}%
FCF Index:        {:.2}
Intrinsic Value:  {:.2}
Upside:           {:+.2}%
Implied CAGR:     {:+.2}%
Terminal Share:   {:.1}%
══════════════════════════════════════════════════════"#,
        out.revenue_index,
        out.fcf_margin * 100.0,
        out.fcf_index,
        out.intrinsic_value,
        out.upside_percent,
        out.cagr_percent,
        out.terminal_share_percent,
    )
}

impl EvaluateArgs {
    pub fn execute(&self, config: &Config, format: OutputFormat) -> anyhow::Result<()> {
        warn_if_invalid(&config.valuation);
        let inputs = self.preset.apply(&config.valuation);
        let outputs = ValuationEngine::new().evaluate(&inputs);
        tracing::info!(
            preset = %self.preset,
            intrinsic_value = outputs.intrinsic_value,
            "Evaluated assumptions"
        );
        emit(format, &outputs, || format_outputs(self.preset, &outputs))
    }
}

#[derive(Serialize)]
struct ScenarioRow {
    preset: ScenarioPreset,
    outputs: DcfOutputs,
}

/// Evaluate every preset side by side
pub fn execute_scenarios(config: &Config, format: OutputFormat) -> anyhow::Result<()> {
    warn_if_invalid(&config.valuation);
    let engine = ValuationEngine::new();
    let rows: Vec<ScenarioRow> = ScenarioPreset::ALL
        .iter()
        .map(|&preset| ScenarioRow {
            preset,
            outputs: engine.evaluate(&preset.apply(&config.valuation)),
        })
        .collect();

    emit(format, &rows, || {
        let mut out = format!(
            "{:<6}{:>12}{:>12}{:>10}{:>10}\n",
            "", "revenue", "intrinsic", "upside", "cagr"
        );
        for row in &rows {
            out.push_str(&format!(
                "{:<6}{:>12.2}{:>12.2}{:>9.1}%{:>9.1}%\n",
                row.preset.to_string(),
                row.outputs.revenue_index,
                row.outputs.intrinsic_value,
                row.outputs.upside_percent,
                row.outputs.cagr_percent,
            ));
        }
        out
    })
}

#[derive(Serialize)]
struct ScoreReport {
    score: f64,
    label: String,
    is_aligned: bool,
    target_score: f64,
}

impl ScoreArgs {
    pub fn execute(&self, config: &Config, format: OutputFormat) -> anyhow::Result<()> {
        let score = aggressiveness_score(&config.valuation);
        let label = confidence_label(score, self.style);
        let report = ScoreReport {
            score,
            label: label.label.to_string(),
            is_aligned: label.is_aligned,
            target_score: label.target_score,
        };
        emit(format, &report, || {
            format!(
                "Aggressiveness: {:.1} ({})\nTarget:         {:.0} ({})",
                report.score,
                report.label,
                report.target_score,
                if report.is_aligned { "aligned" } else { "off target" },
            )
        })
    }
}

impl SparklineArgs {
    pub fn execute(&self, config: &Config, format: OutputFormat) -> anyhow::Result<()> {
        let points = sparkline_data(&ValuationEngine::new(), self.metric, &config.valuation);
        emit(format, &points, || {
            points
                .iter()
                .map(|p| format!("{p:.2}"))
                .collect::<Vec<_>>()
                .join("  ")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_outputs_contains_values() {
        let outputs = ValuationEngine::new().evaluate(&DcfInputs::default());
        let table = format_outputs(ScenarioPreset::Base, &outputs);
        assert!(table.contains("VALUATION (base)"));
        assert!(table.contains("175.78"));
        assert!(table.contains("Terminal Share:   65.0%"));
    }
}

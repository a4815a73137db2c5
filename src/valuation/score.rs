//! Assumption aggressiveness scoring

use super::DcfInputs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const REVENUE_WEIGHT: f64 = 0.45;
const MARGIN_WEIGHT: f64 = 0.30;
const VALUATION_WEIGHT: f64 = 0.25;

/// Scores within this distance of the target count as aligned
const ALIGNMENT_TOLERANCE: f64 = 12.0;

/// The posture a user is aiming their assumptions at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetStyle {
    Conservative,
    Base,
    Aggressive,
}

impl TargetStyle {
    /// Score a perfectly aligned assumption set would have
    pub fn target_score(self) -> f64 {
        match self {
            Self::Conservative => 25.0,
            Self::Base => 50.0,
            Self::Aggressive => 75.0,
        }
    }
}

impl FromStr for TargetStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "conservative" => Ok(Self::Conservative),
            "base" => Ok(Self::Base),
            "aggressive" => Ok(Self::Aggressive),
            other => Err(format!("unknown target style: {other}")),
        }
    }
}

/// Label bucket for an aggressiveness score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Conservative,
    Balanced,
    Aggressive,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score <= 33.0 {
            Self::Conservative
        } else if score <= 66.0 {
            Self::Balanced
        } else {
            Self::Aggressive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Balanced => "Balanced",
            Self::Aggressive => "Aggressive",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of comparing a score against a target style
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceLabel {
    pub label: ConfidenceLevel,
    pub is_aligned: bool,
    pub target_score: f64,
}

/// How far the assumptions sit toward the optimistic end of their ranges, 0-100
pub fn aggressiveness_score(inputs: &DcfInputs) -> f64 {
    let positions: Vec<f64> = inputs
        .revenue_impacting()
        .filter_map(|d| d.position())
        .collect();
    let revenue_avg = if positions.is_empty() {
        0.5
    } else {
        positions.iter().sum::<f64>() / positions.len() as f64
    };

    let margin_pos = ((inputs.operating.operating_margin - 5.0) / 35.0).clamp(0.0, 1.0);

    // A lower discount rate is the more aggressive choice
    let v = &inputs.valuation;
    let discount_pos = (1.0 - (v.discount_rate - 5.0) / 15.0).clamp(0.0, 1.0);
    let terminal_pos = ((v.terminal_growth - 1.0) / 3.0).clamp(0.0, 1.0);
    let valuation_pos = (discount_pos + terminal_pos) / 2.0;

    let score = 100.0
        * (REVENUE_WEIGHT * revenue_avg
            + MARGIN_WEIGHT * margin_pos
            + VALUATION_WEIGHT * valuation_pos);
    score.clamp(0.0, 100.0)
}

/// Label a score and check it against the requested style
pub fn confidence_label(score: f64, style: TargetStyle) -> ConfidenceLabel {
    let target_score = style.target_score();
    ConfidenceLabel {
        label: ConfidenceLevel::from_score(score),
        is_aligned: (score - target_score).abs() <= ALIGNMENT_TOLERANCE,
        target_score,
    }
}

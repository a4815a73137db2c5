//! Market simulation types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Chart range a price series is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "5Y")]
    FiveYears,
}

impl PriceRange {
    pub const ALL: [PriceRange; 6] = [
        Self::OneDay,
        Self::OneWeek,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::OneYear,
        Self::FiveYears,
    ];

    /// Short label, also the seed source for this range
    pub fn label(&self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::OneYear => "1Y",
            Self::FiveYears => "5Y",
        }
    }

    /// Number of points in a series for this range
    pub fn point_count(&self) -> usize {
        match self {
            Self::OneDay => 24, // hourly
            Self::OneWeek => 35, // 5 sessions x 7
            Self::OneMonth => 30, // daily
            Self::ThreeMonths => 65, // trading days
            Self::OneYear => 52, // weekly
            Self::FiveYears => 60, // monthly
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PriceRange {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| MarketError::UnknownRange(s.to_string()))
    }
}

/// Intraday change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayChange {
    pub absolute: Decimal,
    pub percent: Decimal,
}

/// Intraday high and low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    pub high: Decimal,
    pub low: Decimal,
}

/// Synthetic quote for one symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: Decimal,
    pub change: DayChange,
    pub day_range: DayRange,
}

/// Synthetic price path ending at the current price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    pub range: PriceRange,
    pub prices: Vec<Decimal>,
}

impl PriceSeries {
    pub fn last(&self) -> Option<Decimal> {
        self.prices.last().copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Market simulation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    #[error("unknown price range '{0}', expected one of 1D, 1W, 1M, 3M, 1Y, 5Y")]
    UnknownRange(String),
}

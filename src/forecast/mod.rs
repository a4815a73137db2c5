//! Forecast module
//!
//! Multi-year revenue / operating income / equity value projection and
//! horizon return summaries.

mod engine;
mod types;

pub use engine::{ForecastEngine, MAX_HORIZON_YEARS};
pub use types::{ForecastAssumptions, ForecastResult, HorizonReturn, YearProjection};

/// Horizon used when a caller does not pick one
pub const DEFAULT_HORIZON_YEARS: u32 = 5;

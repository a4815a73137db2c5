//! intrinsic-sim: deterministic valuation and scenario simulation engine
//!
//! This library provides:
//! - An index-based intrinsic value evaluator with bounded outputs
//! - Bear/base/bull scenario presets and an aggressiveness score
//! - Multi-year forecast projections and horizon returns
//! - Sensitivity sweeps and grids over both models
//! - Reproducible synthetic market prices from a seeded generator
//!
//! Every engine function is pure and synchronous. Nothing holds state
//! between calls, so all of it is safe to call from any thread.

pub mod cli;
pub mod config;
pub mod forecast;
pub mod market;
pub mod sensitivity;
pub mod telemetry;
pub mod valuation;

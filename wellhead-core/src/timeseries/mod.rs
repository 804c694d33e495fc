//! Time-series utilities shared by the feature calculators and orchestrator.
//!
//! Modules include:
//! - `window`: lagged changes, rolling statistics, EMA, forward-fill
//! - `resample`: densify a low-cadence table to daily cadence
//! - `align`: outer-join tables onto a unified daily calendar
/// Outer join onto a daily calendar with forward-fill.
pub mod align;
/// Daily calendars and forward-fill resampling.
pub mod resample;
/// Column-level window and fill transforms.
pub mod window;

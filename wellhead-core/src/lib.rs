//! wellhead-core
//!
//! Tables, transforms, and calculators shared across the wellhead engine.
//!
//! - `table`: date-indexed, column-oriented `f64` tables with `NaN` as the
//!   missing-cell marker.
//! - `timeseries`: windowed transforms, daily resampling, and calendar
//!   alignment.
//! - `features`: price, inventory, and anomaly feature calculators.
//! - `indicators`: moving averages, Bollinger bands, RSI, and MACD.
//!
//! Every calculator takes a table by value and returns it with derived
//! columns appended. Calculators never remove or rename input columns.
#![warn(missing_docs)]

/// Feature calculators for price and inventory tables.
pub mod features;
/// Technical indicators over a single price column.
pub mod indicators;
/// Derived column naming.
pub mod names;
/// Date-indexed tables.
pub mod table;
/// Time-series utilities for windowing, resampling, and alignment.
pub mod timeseries;
/// Precondition checks shared by the calculators.
pub mod validate;

pub use features::anomaly::{add_zscore, zscore};
pub use features::inventory::{add_inventory_changes, inventory_daily_features};
pub use features::price::{add_price_features, price_spread};
pub use indicators::add_technical_indicators;
pub use table::{Column, MISSING, Sources, Table, is_missing};
pub use timeseries::align::align_daily;
pub use timeseries::resample::{daily_calendar, resample_daily_ffill};
pub use wellhead_types::{
    FeatureConfig, IndicatorParams, PriceFeatureParams, SourceKind, SpreadPair, WellheadError,
};

//! Feature calculators for the price and inventory providers.
//!
//! - `price`: returns, momentum, volatility, rolling mean, cross-symbol spread
//! - `inventory`: period-over-period changes and daily densification
//! - `anomaly`: batch z-score
/// Batch z-score anomaly scoring.
pub mod anomaly;
/// Inventory change features and daily densification.
pub mod inventory;
/// Close-price derived features.
pub mod price;

//! Wellhead fuses commodity-market provider tables into one daily feature table.
//!
//! Overview
//! - Takes a map of provider tables (`PRICE`, `INVENTORY`, optionally
//!   `RIG_COUNT`) that an ingestion layer has already fetched.
//! - Derives price features on the trading-day price table and inventory
//!   changes on the native weekly samples.
//! - Aligns both onto one daily calendar with forward-fill only, so no value
//!   is interpolated and nothing is back-filled.
//! - Adds technical indicators on the aligned history and a batch z-score of
//!   the inventory level.
//! - Reshapes results into row structs for a relational store, and optionally
//!   into a polars `DataFrame`.
//!
//! Key behaviors and trade-offs
//! - Fail fast: a missing or empty required source, an absent column, or a
//!   table shorter than an indicator window aborts the whole run. No
//!   partially built table is ever returned.
//! - Inventory changes are computed before densifying to daily cadence;
//!   the other order would yield daily deltas that are zero six days a week.
//! - The inventory z-score is a batch statistic over the full merged history,
//!   so re-running with more history changes past scores.
//! - RSI uses IEEE division: a window without losses scores exactly 100.
//!
//! Examples
//! ```
//! use wellhead::{FeatureEngine, FeatureGroup};
//! use wellhead_mock::MockProvider;
//!
//! let sources = MockProvider::new().sources().unwrap();
//! let engine = FeatureEngine::builder().build().unwrap();
//! let features = engine.generate_features(&sources).unwrap();
//!
//! assert!(features.column("WTI_rsi").is_some());
//! assert!(features.features(FeatureGroup::Inventory).count() >= 3);
//! ```
//!
//! See the `demos` crate for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
#[cfg(feature = "dataframe")]
mod dataframe;
mod output;
mod pipeline;
pub mod storage;

pub use core::{FeatureEngine, FeatureEngineBuilder};
#[cfg(feature = "dataframe")]
pub use dataframe::ToDataFrame;
pub use output::{FeatureColumn, FeatureGroup, FeatureTable};
pub use pipeline::{INVENTORY_SYMBOL, generate_features};
pub use storage::{
    FeatureRow, IndicatorRow, InventoryRow, PriceRow, RigCountRecord, feature_rows,
    indicator_rows, inventory_rows, price_rows, rig_count_record,
};

// Re-export core types for convenience
pub use wellhead_core::{
    Column, FeatureConfig, IndicatorParams, MISSING, PriceFeatureParams, SourceKind, Sources,
    SpreadPair, Table, WellheadError, is_missing,
};

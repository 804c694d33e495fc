// Re-export helpers so tests can `use helpers::*;`
#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use wellhead::{Column, FeatureEngine, FeatureTable, SourceKind, Sources, Table};
use wellhead_mock::MockProvider;

pub use wellhead_mock::{INVENTORY_COLUMN, TRADING_DAYS};

/// Construct a `NaiveDate` from components for readability in tests.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Consecutive days starting at `start`, `step` days apart.
pub fn days(start: NaiveDate, n: usize, step: u64) -> Vec<NaiveDate> {
    (0..n as u64).map(|i| start + Days::new(i * step)).collect()
}

/// Full mock sources map.
pub fn mock_sources() -> Sources {
    MockProvider::new().sources().expect("fixtures build")
}

/// Run the default engine over the full mock sources.
pub fn default_features() -> FeatureTable {
    FeatureEngine::builder()
        .build()
        .expect("default config is valid")
        .generate_features(&mock_sources())
        .expect("pipeline runs on fixtures")
}

/// Small hand-built sources: a daily price table and a weekly inventory table.
pub fn tiny_sources(price_days: usize) -> Sources {
    let price_index = days(date(2024, 1, 1), price_days, 1);
    let wti: Vec<f64> = (0..price_days).map(|i| 70.0 + (i % 9) as f64).collect();
    let brent: Vec<f64> = wti.iter().map(|v| v + 3.0).collect();
    let price = Table::new(
        price_index,
        vec![Column::new("WTI", wti), Column::new("Brent", brent)],
    )
    .expect("valid price table");

    let weeks = price_days / 7 + 1;
    let levels: Vec<f64> = (0..weeks).map(|w| 400.0 + (w % 4) as f64 * 2.5).collect();
    let inventory = Table::new(
        days(date(2024, 1, 3), weeks, 7),
        vec![Column::new("stocks", levels)],
    )
    .expect("valid inventory table");

    let mut sources = Sources::new();
    sources.insert(SourceKind::Price, price);
    sources.insert(SourceKind::Inventory, inventory);
    sources
}

/// Count leading undefined cells.
pub fn leading_missing(values: &[f64]) -> usize {
    values.iter().take_while(|v| v.is_nan()).count()
}

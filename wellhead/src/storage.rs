//! Row shapes for a relational persistence collaborator.
//!
//! Every function here is a pure reshape: undefined cells become `None` so
//! they land as SQL `NULL`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wellhead_core::validate::require_column;
use wellhead_core::{Column, SourceKind, Table, is_missing};
use wellhead_types::WellheadError;

use crate::output::{FeatureGroup, FeatureTable};

/// One derived value in long form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Calendar date.
    pub date: NaiveDate,
    /// Price symbol, spread label, or `inventory`.
    pub symbol: String,
    /// Feature label without the symbol prefix.
    pub feature_name: String,
    /// Value, `None` when undefined.
    pub feature_value: Option<f64>,
}

/// Technical indicators of one symbol on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    /// Calendar date.
    pub date: NaiveDate,
    /// Price symbol.
    pub symbol: String,
    /// Indicator label (`ma50`, `rsi`, ...) to value.
    pub values: BTreeMap<String, Option<f64>>,
}

/// One OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    /// Trading date.
    pub date: NaiveDate,
    /// Price symbol.
    pub symbol: String,
    /// Opening price.
    pub open: Option<f64>,
    /// Session high.
    pub high: Option<f64>,
    /// Session low.
    pub low: Option<f64>,
    /// Close (settlement) price.
    pub close: Option<f64>,
    /// Traded volume in contracts.
    pub volume: Option<u64>,
}

/// One inventory report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    /// Report date.
    pub date: NaiveDate,
    /// Product label, e.g. `crude_oil`.
    pub product: String,
    /// Stock level.
    pub inventory: Option<f64>,
}

/// Point-in-time rig-count record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RigCountRecord {
    /// Date of the count.
    pub date: NaiveDate,
    /// Active rigs.
    pub total_rigs: u32,
    /// Change from the prior count.
    pub weekly_change: i32,
    /// Change from the count a year earlier.
    pub yoy_change: i32,
    /// Oil-directed rigs; not in the snapshot.
    pub oil_rigs: Option<u32>,
    /// Gas-directed rigs; not in the snapshot.
    pub gas_rigs: Option<u32>,
    /// Other rigs; not in the snapshot.
    pub misc_rigs: Option<u32>,
}

fn defined(v: f64) -> Option<f64> {
    (!is_missing(v)).then_some(v)
}

/// Every catalogued derived column of `features` in long form, one column
/// after another.
#[must_use]
pub fn feature_rows(features: &FeatureTable) -> Vec<FeatureRow> {
    let index = features.index();
    let mut out = Vec::with_capacity(index.len() * features.catalog().len());
    for entry in features.catalog() {
        let Some(column) = features.column(&entry.column) else {
            continue;
        };
        out.extend(index.iter().zip(column.values()).map(|(date, v)| FeatureRow {
            date: *date,
            symbol: entry.symbol.clone(),
            feature_name: entry.feature.clone(),
            feature_value: defined(*v),
        }));
    }
    out
}

/// Technical indicators pivoted to one row per `(date, symbol)`, ordered by
/// date and then by symbol.
#[must_use]
pub fn indicator_rows(features: &FeatureTable) -> Vec<IndicatorRow> {
    let mut by_symbol: BTreeMap<&str, Vec<(&str, &Column)>> = BTreeMap::new();
    for entry in features.features(FeatureGroup::Indicator) {
        if let Some(column) = features.column(&entry.column) {
            by_symbol
                .entry(entry.symbol.as_str())
                .or_default()
                .push((entry.feature.as_str(), column));
        }
    }

    let mut out = Vec::with_capacity(features.len() * by_symbol.len());
    for (i, date) in features.index().iter().enumerate() {
        for (symbol, columns) in &by_symbol {
            let values = columns
                .iter()
                .map(|(feature, c)| ((*feature).to_string(), defined(c.values()[i])))
                .collect();
            out.push(IndicatorRow {
                date: *date,
                symbol: (*symbol).to_string(),
                values,
            });
        }
    }
    out
}

/// OHLCV bars per symbol from a price table.
///
/// The close is the symbol's own column; `{symbol}_open`, `_high`, `_low`
/// and `_volume` are optional. Rows with no defined field are dropped.
/// Volume is rounded to whole contracts.
///
/// # Errors
/// Returns `ColumnNotFound` if a symbol's close column is absent.
pub fn price_rows(table: &Table, symbols: &[String]) -> Result<Vec<PriceRow>, WellheadError> {
    let mut out = Vec::new();
    for symbol in symbols {
        let close = require_column(table, symbol)?.values();
        let field = |suffix: &str| {
            table
                .column(&format!("{symbol}_{suffix}"))
                .map(Column::values)
        };
        let (open, high, low, volume) = (field("open"), field("high"), field("low"), field("volume"));
        let at = |c: Option<&[f64]>, i: usize| c.and_then(|v| defined(v[i]));

        for (i, date) in table.index().iter().enumerate() {
            let row = PriceRow {
                date: *date,
                symbol: symbol.clone(),
                open: at(open, i),
                high: at(high, i),
                low: at(low, i),
                close: defined(close[i]),
                volume: at(volume, i).filter(|v| *v >= 0.0).map(|v| v.round() as u64),
            };
            let empty = row.open.is_none()
                && row.high.is_none()
                && row.low.is_none()
                && row.close.is_none()
                && row.volume.is_none();
            if !empty {
                out.push(row);
            }
        }
    }
    Ok(out)
}

/// Inventory reports tagged with a product label.
///
/// # Errors
/// Returns `ColumnNotFound` if `column` is absent.
pub fn inventory_rows(
    table: &Table,
    column: &str,
    product: &str,
) -> Result<Vec<InventoryRow>, WellheadError> {
    let level = require_column(table, column)?.values();
    Ok(table
        .index()
        .iter()
        .zip(level)
        .map(|(date, v)| InventoryRow {
            date: *date,
            product: product.to_string(),
            inventory: defined(*v),
        })
        .collect())
}

/// Rig-count record from the first row of a snapshot table with `count`,
/// `weekly_change`, and `yearly_change` columns.
///
/// # Errors
/// - `EmptySource` if the snapshot has no rows.
/// - `ColumnNotFound` if a required column is absent.
/// - `Data` if a count is undefined, fractional, or out of range.
pub fn rig_count_record(snapshot: &Table) -> Result<RigCountRecord, WellheadError> {
    let Some(date) = snapshot.first_date() else {
        return Err(WellheadError::EmptySource {
            kind: SourceKind::RigCount,
        });
    };
    let first = |name: &str| -> Result<f64, WellheadError> {
        Ok(require_column(snapshot, name)?.values()[0])
    };
    let total = whole(first("count")?, "count")?;
    let weekly = whole(first("weekly_change")?, "weekly_change")?;
    let yearly = whole(first("yearly_change")?, "yearly_change")?;

    let total_rigs = u32::try_from(total)
        .map_err(|_| WellheadError::Data(format!("rig count out of range: {total}")))?;
    let as_i32 = |v: i64, name: &str| {
        i32::try_from(v).map_err(|_| WellheadError::Data(format!("{name} out of range: {v}")))
    };

    Ok(RigCountRecord {
        date,
        total_rigs,
        weekly_change: as_i32(weekly, "weekly_change")?,
        yoy_change: as_i32(yearly, "yearly_change")?,
        oil_rigs: None,
        gas_rigs: None,
        misc_rigs: None,
    })
}

fn whole(v: f64, name: &str) -> Result<i64, WellheadError> {
    if !v.is_finite() || v.fract() != 0.0 || v.abs() > i64::MAX as f64 {
        return Err(WellheadError::Data(format!(
            "{name} is not a whole number: {v}"
        )));
    }
    Ok(v as i64)
}

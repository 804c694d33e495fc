use crate::WellheadError;
use crate::names;
use crate::table::{Column, Table};
use crate::timeseries::resample::resample_daily_ffill;
use crate::timeseries::window::{diff, pct_change};
use crate::validate::require_column;

/// Append period-over-period change features to a native-cadence inventory table.
///
/// - `{col}_weekly_change`: current minus previous sample; first row undefined.
/// - `{col}_weekly_pct_change`: fractional change from the previous sample.
///
/// # Errors
/// Returns `Err(WellheadError::ColumnNotFound)` if `column` is absent.
pub fn add_inventory_changes(mut table: Table, column: &str) -> Result<Table, WellheadError> {
    let level = require_column(&table, column)?.values();
    let change = diff(level, 1);
    let pct = pct_change(level, 1);
    table.put_column(Column::new(names::feature(column, names::WEEKLY_CHANGE), change))?;
    table.put_column(Column::new(names::feature(column, names::WEEKLY_PCT_CHANGE), pct))?;
    Ok(table)
}

/// Derive inventory change features and densify them to daily cadence.
///
/// The changes are computed on the native weekly samples first, then every
/// calendar day from the first to the last sample carries the most recent
/// sample's level and changes. Densifying first would turn the changes into
/// daily deltas that are zero on all but one day per week.
///
/// ```
/// use chrono::NaiveDate;
/// use wellhead_core::{Column, Table};
/// use wellhead_core::features::inventory::inventory_daily_features;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let weekly = Table::new(
///     vec![d(1), d(8), d(15)],
///     vec![Column::new("inventory", vec![100.0, 105.0, 95.0])],
/// ).unwrap();
/// let daily = inventory_daily_features(weekly, "inventory").unwrap();
/// let change = daily.column("inventory_weekly_change").unwrap().values();
/// assert!(change[0].is_nan());
/// assert!(change[7..14].iter().all(|v| *v == 5.0));
/// assert_eq!(change[14], -10.0);
/// ```
///
/// # Errors
/// - `WellheadError::ColumnNotFound` if `column` is absent.
/// - `WellheadError::Data` if the index is not strictly increasing.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "wellhead::features",
        skip(table),
        fields(rows = table.len()),
    )
)]
pub fn inventory_daily_features(table: Table, column: &str) -> Result<Table, WellheadError> {
    let weekly = add_inventory_changes(table, column)?;
    resample_daily_ffill(&weekly)
}

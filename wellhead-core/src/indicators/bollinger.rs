use crate::WellheadError;
use crate::names;
use crate::table::{Column, Table};
use crate::timeseries::window::{rolling_mean, rolling_std};
use crate::validate::{require_column, require_history, require_positive};

/// Upper and lower Bollinger bands: rolling mean ± `k` rolling sample stddevs.
///
/// Both bands are undefined until a full window of observations exists.
#[must_use]
pub fn bollinger_bands(values: &[f64], window: usize, k: f64) -> (Vec<f64>, Vec<f64>) {
    let mean = rolling_mean(values, window, window);
    let std = rolling_std(values, window, window);
    mean.iter()
        .zip(&std)
        .map(|(m, s)| (m + k * s, m - k * s))
        .unzip()
}

/// Append `{column}_bb_upper` and `{column}_bb_lower`.
///
/// # Errors
/// - `WellheadError::ColumnNotFound` if `column` is absent.
/// - `WellheadError::InvalidArg` if `window` is zero.
/// - `WellheadError::InsufficientHistory` if the table has fewer rows than `window`.
pub fn add_bollinger_bands(
    mut table: Table,
    column: &str,
    window: usize,
    k: f64,
) -> Result<Table, WellheadError> {
    require_positive("bollinger window", window)?;
    let source = require_column(&table, column)?.values();
    require_history(&table, &names::feature(column, names::BB_UPPER), window)?;
    let (upper, lower) = bollinger_bands(source, window, k);
    table.put_column(Column::new(names::feature(column, names::BB_UPPER), upper))?;
    table.put_column(Column::new(names::feature(column, names::BB_LOWER), lower))?;
    Ok(table)
}

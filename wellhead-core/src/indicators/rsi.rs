//! Relative Strength Index (RSI).

use crate::WellheadError;
use crate::names;
use crate::table::{Column, Table};
use crate::timeseries::window::{diff, rolling_mean};
use crate::validate::{require_column, require_history, require_positive};

/// Relative Strength Index over a simple rolling window.
///
/// - `delta` is the row-over-row difference; `gain = max(delta, 0)` and
///   `loss = max(-delta, 0)`, with undefined deltas staying undefined.
/// - Average gain and loss are rolling means that need a full window of
///   defined deltas, so the first `window` rows are undefined.
/// - `RS = avg_gain / avg_loss` uses IEEE division: a zero average loss gives
///   `RS = +inf` and the RSI saturates at exactly 100. A window with neither
///   gains nor losses (0/0) stays undefined.
///
/// Values lie in `[0, 100]`.
///
/// ```
/// use wellhead_core::indicators::rsi::rsi;
/// let rising: Vec<f64> = (0..20).map(f64::from).collect();
/// let out = rsi(&rising, 14);
/// assert!(out[..14].iter().all(|v| v.is_nan()));
/// assert!(out[14..].iter().all(|v| *v == 100.0));
/// ```
#[must_use]
pub fn rsi(values: &[f64], window: usize) -> Vec<f64> {
    let delta = diff(values, 1);
    let gain: Vec<f64> = delta.iter().map(|&d| clip_below_zero(d)).collect();
    let loss: Vec<f64> = delta.iter().map(|&d| clip_below_zero(-d)).collect();
    let avg_gain = rolling_mean(&gain, window, window);
    let avg_loss = rolling_mean(&loss, window, window);
    avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(g, l)| {
            let rs = g / l;
            100.0 - 100.0 / (1.0 + rs)
        })
        .collect()
}

// NaN-preserving `max(v, 0)`; `f64::max` would turn NaN into 0.
fn clip_below_zero(v: f64) -> f64 {
    if v < 0.0 { 0.0 } else { v }
}

/// Append `{column}_rsi`.
///
/// # Errors
/// - `WellheadError::ColumnNotFound` if `column` is absent.
/// - `WellheadError::InvalidArg` if `window` is zero.
/// - `WellheadError::InsufficientHistory` if the table has fewer rows than `window`.
pub fn add_rsi(mut table: Table, column: &str, window: usize) -> Result<Table, WellheadError> {
    require_positive("rsi window", window)?;
    let source = require_column(&table, column)?.values();
    let name = names::feature(column, names::RSI);
    require_history(&table, &name, window)?;
    let out = rsi(source, window);
    table.put_column(Column::new(name, out))?;
    Ok(table)
}

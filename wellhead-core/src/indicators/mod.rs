//! Technical indicators over a single price column.
//!
//! Every `add_*` function takes the table by value, validates before it
//! computes, and returns the table with the indicator columns appended. On
//! error nothing is appended.

/// Bollinger bands.
pub mod bollinger;
/// Moving-average convergence/divergence.
pub mod macd;
/// Simple moving averages.
pub mod moving_average;
/// Relative Strength Index.
pub mod rsi;

use wellhead_types::IndicatorParams;

use crate::WellheadError;
use crate::table::Table;
use crate::validate::require_column;

/// Apply moving averages, Bollinger bands, RSI, and MACD to `column`.
///
/// Each indicator checks its own window, so the error names the first
/// indicator the table is too short for.
///
/// # Errors
/// - `WellheadError::InvalidArg` if `params` fails validation.
/// - `WellheadError::ColumnNotFound` if `column` is absent.
/// - `WellheadError::InsufficientHistory` if the table is shorter than any
///   configured window.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "wellhead::indicators",
        skip(table, params),
        fields(rows = table.len(), max_window = params.max_window()),
    )
)]
pub fn add_technical_indicators(
    table: Table,
    column: &str,
    params: &IndicatorParams,
) -> Result<Table, WellheadError> {
    params.validate()?;
    require_column(&table, column)?;

    let table = moving_average::add_moving_averages(table, column, &params.ma_windows)?;
    let table = bollinger::add_bollinger_bands(
        table,
        column,
        params.bollinger_window,
        params.bollinger_k,
    )?;
    let table = rsi::add_rsi(table, column, params.rsi_window)?;
    let table = macd::add_macd(
        table,
        column,
        params.macd_fast,
        params.macd_slow,
        params.macd_signal,
    )?;
    #[cfg(feature = "tracing")]
    tracing::debug!(target: "wellhead::indicators", column, "indicators applied");
    Ok(table)
}

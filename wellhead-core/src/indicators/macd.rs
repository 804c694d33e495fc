use crate::WellheadError;
use crate::names;
use crate::table::{Column, Table};
use crate::timeseries::window::ewm_mean;
use crate::validate::{require_column, require_history, require_positive};

/// MACD line and its signal line.
///
/// `macd = ema(fast) - ema(slow)` and `signal = ema(macd, signal)`, all
/// exponential means with `adjust = false` seeded by the first defined
/// observation. Rows before the first defined input stay undefined.
#[must_use]
pub fn macd(values: &[f64], fast: usize, slow: usize, signal: usize) -> (Vec<f64>, Vec<f64>) {
    let ema_fast = ewm_mean(values, fast);
    let ema_slow = ewm_mean(values, slow);
    let line: Vec<f64> = ema_fast.iter().zip(&ema_slow).map(|(f, s)| f - s).collect();
    let sig = ewm_mean(&line, signal);
    (line, sig)
}

/// Append `{column}_macd` and `{column}_macd_signal`.
///
/// # Errors
/// - `WellheadError::ColumnNotFound` if `column` is absent.
/// - `WellheadError::InvalidArg` if a span is zero or `fast >= slow`.
/// - `WellheadError::InsufficientHistory` if the table has fewer rows than `slow`.
pub fn add_macd(
    mut table: Table,
    column: &str,
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<Table, WellheadError> {
    require_positive("macd fast span", fast)?;
    require_positive("macd slow span", slow)?;
    require_positive("macd signal span", signal)?;
    if fast >= slow {
        return Err(WellheadError::InvalidArg(format!(
            "macd fast span ({fast}) must be shorter than slow span ({slow})"
        )));
    }
    let source = require_column(&table, column)?.values();
    let line_name = names::feature(column, names::MACD);
    require_history(&table, &line_name, slow)?;
    let (line, sig) = macd(source, fast, slow, signal);
    table.put_column(Column::new(line_name, line))?;
    table.put_column(Column::new(names::feature(column, names::MACD_SIGNAL), sig))?;
    Ok(table)
}

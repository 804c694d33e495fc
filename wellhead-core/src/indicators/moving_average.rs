use crate::WellheadError;
use crate::names;
use crate::table::{Column, Table};
use crate::timeseries::window::rolling_mean;
use crate::validate::{require_column, require_history, require_positive};

/// Simple moving average over a full window: the first `window - 1` rows are
/// undefined.
///
/// ```
/// use wellhead_core::indicators::moving_average::moving_average;
/// let ma = moving_average(&[10.0, 11.0, 9.0, 12.0, 13.0], 5);
/// assert!(ma[..4].iter().all(|v| v.is_nan()));
/// assert_eq!(ma[4], 11.0);
/// ```
#[must_use]
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    rolling_mean(values, window, window)
}

/// Append one `{column}_ma{w}` column per window.
///
/// # Errors
/// - `WellheadError::ColumnNotFound` if `column` is absent.
/// - `WellheadError::InvalidArg` if a window is zero.
/// - `WellheadError::InsufficientHistory` if the table has fewer rows than the
///   largest window. No column is added in that case.
pub fn add_moving_averages(
    mut table: Table,
    column: &str,
    windows: &[usize],
) -> Result<Table, WellheadError> {
    for &w in windows {
        require_positive("moving average window", w)?;
    }
    let source = require_column(&table, column)?.values();
    if let Some(&largest) = windows.iter().max() {
        require_history(
            &table,
            &names::feature(column, &names::moving_average(largest)),
            largest,
        )?;
    }

    let averages: Vec<Column> = windows
        .iter()
        .map(|&w| {
            Column::new(
                names::feature(column, &names::moving_average(w)),
                moving_average(source, w),
            )
        })
        .collect();
    for c in averages {
        table.put_column(c)?;
    }
    Ok(table)
}

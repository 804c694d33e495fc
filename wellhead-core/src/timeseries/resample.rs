use chrono::NaiveDate;

use crate::WellheadError;
use crate::table::{Column, Table};

/// Every calendar day from `start` to `end`, inclusive. Empty if `start > end`.
#[must_use]
pub fn daily_calendar(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Densify a low-cadence table to daily cadence by forward-filling rows.
///
/// Every calendar day from the first to the last observed date takes the
/// whole row of the most recent observation on or before that day. Values
/// are copied as observed, including undefined cells: a day inherits its
/// source row verbatim and nothing is interpolated.
///
/// Derived quantities that compare consecutive observations (diffs, percent
/// changes) must be computed on the native series *before* calling this,
/// otherwise the repeated daily rows turn them into mostly-zero deltas.
///
/// ```
/// use chrono::NaiveDate;
/// use wellhead_core::{Column, Table};
/// use wellhead_core::timeseries::resample::resample_daily_ffill;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let weekly = Table::new(vec![d(1), d(8)], vec![Column::new("inv", vec![100.0, 105.0])]).unwrap();
/// let daily = resample_daily_ffill(&weekly).unwrap();
/// assert_eq!(daily.len(), 8);
/// assert_eq!(daily.column("inv").unwrap().values()[6], 100.0);
/// assert_eq!(daily.column("inv").unwrap().values()[7], 105.0);
/// ```
///
/// # Errors
/// Returns `Err(WellheadError::Data)` if the index is not strictly increasing.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "wellhead::timeseries",
        skip(table),
        fields(rows = table.len()),
    )
)]
pub fn resample_daily_ffill(table: &Table) -> Result<Table, WellheadError> {
    if !table.is_normalized() {
        return Err(WellheadError::Data(
            "resample requires a strictly increasing index".into(),
        ));
    }
    let (Some(start), Some(end)) = (table.first_date(), table.last_date()) else {
        return Ok(table.clone());
    };

    let calendar = daily_calendar(start, end);
    let index = table.index();

    // Source row for each calendar day: the latest observation on or before it.
    let mut rows: Vec<usize> = Vec::with_capacity(calendar.len());
    let mut j = 0;
    for day in &calendar {
        while j + 1 < index.len() && index[j + 1] <= *day {
            j += 1;
        }
        rows.push(j);
    }

    let columns = table
        .columns()
        .iter()
        .map(|c| {
            let values = c.values();
            Column::new(c.name(), rows.iter().map(|&r| values[r]).collect())
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "wellhead::timeseries",
        days = calendar.len(),
        %start,
        %end,
        "densified to daily cadence"
    );

    Table::new(calendar, columns)
}

use crate::WellheadError;
use crate::table::{Column, Table};
use crate::timeseries::resample::daily_calendar;
use crate::timeseries::window::forward_fill;

/// Outer-join two tables onto one daily calendar and forward-fill every column.
///
/// - The calendar is every day from the earliest first date to the latest
///   last date across both tables, so the row count equals the number of
///   calendar days in that range.
/// - Each column is placed on its own dates, then forward-filled in time
///   order. Rows before a source reports its first value stay undefined;
///   nothing is back-filled.
/// - Column order: every column of `left` in its order, then every column of
///   `right` in its order.
///
/// An empty table contributes its columns but no dates. Two empty tables
/// yield an empty table carrying both sets of columns.
///
/// # Errors
/// - `WellheadError::Data` if either index is not strictly increasing.
/// - `WellheadError::InvalidArg` if both tables carry a column of the same name.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        target = "wellhead::timeseries",
        skip(left, right),
        fields(left_rows = left.len(), right_rows = right.len()),
    )
)]
pub fn align_daily(left: &Table, right: &Table) -> Result<Table, WellheadError> {
    for t in [left, right] {
        if !t.is_normalized() {
            return Err(WellheadError::Data(
                "alignment requires strictly increasing indices".into(),
            ));
        }
    }
    if let Some(name) = left.column_names().find(|n| right.contains(n)) {
        return Err(WellheadError::InvalidArg(format!(
            "column {name} exists on both sides of the join"
        )));
    }

    let start = [left.first_date(), right.first_date()].into_iter().flatten().min();
    let end = [left.last_date(), right.last_date()].into_iter().flatten().max();
    let calendar = match (start, end) {
        (Some(s), Some(e)) => daily_calendar(s, e),
        _ => Vec::new(),
    };

    let columns: Vec<Column> = [left.reindex(&calendar), right.reindex(&calendar)]
        .into_iter()
        .flat_map(|t| t.into_parts().1)
        .map(|c| {
            let (name, values) = c.into_parts();
            Column::new(name, forward_fill(&values))
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "wellhead::timeseries",
        days = calendar.len(),
        columns = columns.len(),
        "aligned onto daily calendar"
    );

    Table::new(calendar, columns)
}

use chrono::NaiveDate;
use wellhead_core::{Column, Table, WellheadError};

/// Latest U.S. rig-count snapshot.
pub fn snapshot() -> Result<Table, WellheadError> {
    let date = NaiveDate::from_ymd_opt(2024, 2, 23).unwrap_or(NaiveDate::MIN);
    Table::new(
        vec![date],
        vec![
            Column::new("count", vec![626.0]),
            Column::new("weekly_change", vec![5.0]),
            Column::new("yearly_change", vec![-134.0]),
        ],
    )
}

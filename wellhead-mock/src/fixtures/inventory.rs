use chrono::{Days, NaiveDate};
use wellhead_core::{Column, Table, WellheadError};

use super::jitter;

/// Column holding the weekly crude stock level, in thousand barrels.
pub const COLUMN: &str = "crude_oil_inventory";

/// Weekly Wednesday reports starting the week before the first trading day.
pub fn weekly(weeks: usize) -> Result<Table, WellheadError> {
    let first = NaiveDate::from_ymd_opt(2022, 12, 28).unwrap_or(NaiveDate::MIN);
    let index = (0..weeks as u64)
        .map(|w| first + Days::new(7 * w))
        .collect();
    let mut level = 418_500.0;
    let values = (0..weeks)
        .map(|w| {
            if w > 0 {
                let seasonal = 2_400.0 * (w as f64 / 8.0).sin();
                level += seasonal + 3_000.0 * jitter(w, 7);
            }
            level.round()
        })
        .collect();
    Table::new(index, vec![Column::new(COLUMN, values)])
}

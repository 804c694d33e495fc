use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use wellhead_core::validate::{require_column, require_history};
use wellhead_core::{Column, Table, WellheadError};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

#[test]
fn new_rejects_length_mismatch_and_duplicate_names() {
    let err = Table::new(vec![d(1), d(2)], vec![Column::new("a", vec![1.0])]).unwrap_err();
    assert!(matches!(err, WellheadError::Data(_)));

    let err = Table::new(
        vec![d(1)],
        vec![Column::new("a", vec![1.0]), Column::new("a", vec![2.0])],
    )
    .unwrap_err();
    assert!(matches!(err, WellheadError::InvalidArg(_)));
}

#[test]
fn normalize_sorts_and_keeps_last_row_per_date() {
    let t = Table::new(
        vec![d(3), d(1), d(3), d(2)],
        vec![Column::new("x", vec![30.0, 10.0, 31.0, 20.0])],
    )
    .unwrap()
    .normalize();
    assert_eq!(t.index(), &[d(1), d(2), d(3)]);
    assert_eq!(t.column("x").unwrap().values(), &[10.0, 20.0, 31.0]);
    assert!(t.is_normalized());
}

#[test]
fn from_timestamps_maps_to_local_calendar_date() {
    // 2024-03-02T03:00Z is still March 1st in New York.
    let ts: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 3, 2, 3, 0, 0).unwrap();
    let col = || vec![Column::new("x", vec![1.0])];

    let utc = Table::from_timestamps(&[ts], col(), None).unwrap();
    assert_eq!(utc.first_date(), Some(d(2)));

    let ny = Table::from_timestamps(&[ts], col(), Some(chrono_tz::America::New_York)).unwrap();
    assert_eq!(ny.first_date(), Some(d(1)));
}

#[test]
fn put_column_replaces_in_place() {
    let mut t = Table::new(
        vec![d(1)],
        vec![Column::new("a", vec![1.0]), Column::new("b", vec![2.0])],
    )
    .unwrap();
    t.put_column(Column::new("a", vec![9.0])).unwrap();
    let names: Vec<&str> = t.column_names().collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(t.column("a").unwrap().values(), &[9.0]);
}

#[test]
fn reindex_leaves_unmatched_days_undefined() {
    let t = Table::new(vec![d(2)], vec![Column::new("x", vec![5.0])]).unwrap();
    let r = t.reindex(&[d(1), d(2), d(3)]);
    let v = r.column("x").unwrap().values();
    assert!(v[0].is_nan());
    assert_eq!(v[1], 5.0);
    assert!(v[2].is_nan());
    assert_eq!(r.column("x").unwrap().defined_count(), 1);
}

#[test]
fn require_column_lists_available_columns() {
    let t = Table::new(
        vec![d(1)],
        vec![Column::new("WTI", vec![1.0]), Column::new("Brent", vec![2.0])],
    )
    .unwrap();
    match require_column(&t, "OVX") {
        Err(WellheadError::ColumnNotFound { name, available }) => {
            assert_eq!(name, "OVX");
            assert_eq!(available, vec!["WTI".to_string(), "Brent".to_string()]);
        }
        other => panic!("expected ColumnNotFound, got {other:?}"),
    }
}

#[test]
fn require_history_reports_counts() {
    let t = Table::new(vec![d(1), d(2)], vec![]).unwrap();
    let err = require_history(&t, "WTI_ma200", 200).unwrap_err();
    assert_eq!(err, WellheadError::insufficient_history("WTI_ma200", 200, 2));
}

use wellhead::{SourceKind, generate_features};

use crate::helpers::*;

#[test]
fn merged_calendar_spans_both_sources_daily() {
    let sources = mock_sources();
    let out = default_features();

    let price = &sources[&SourceKind::Price];
    let inventory = &sources[&SourceKind::Inventory];
    let start = price.first_date().min(inventory.first_date()).unwrap();
    let end = price.last_date().max(inventory.last_date()).unwrap();

    assert_eq!(out.index().first(), Some(&start));
    assert_eq!(out.index().last(), Some(&end));
    assert_eq!(out.len() as i64, (end - start).num_days() + 1);
    assert!(
        out.index()
            .windows(2)
            .all(|w| (w[1] - w[0]).num_days() == 1)
    );
}

#[test]
fn price_columns_precede_inventory_columns() {
    let out = default_features();
    let names: Vec<&str> = out.table().column_names().collect();
    let wti = names.iter().position(|n| *n == "WTI").unwrap();
    let level = names.iter().position(|n| *n == INVENTORY_COLUMN).unwrap();
    let spread = names.iter().position(|n| *n == "WTI-Brent_spread").unwrap();
    assert!(wti < spread && spread < level);
}

#[test]
fn weekend_rows_carry_friday_close() {
    let out = default_features();
    let wti = out.column("WTI").unwrap().values();
    // 2023-01-06 is a Friday.
    let fri = out.index().iter().position(|d| *d == date(2023, 1, 6)).unwrap();
    assert_eq!(wti[fri + 1], wti[fri]);
    assert_eq!(wti[fri + 2], wti[fri]);
}

#[test]
fn price_is_undefined_before_first_trading_day() {
    let out = default_features();
    // Inventory starts 2022-12-28, price on 2023-01-02.
    let wti = out.column("WTI").unwrap().values();
    assert_eq!(leading_missing(wti), 5);
    let level = out.column(INVENTORY_COLUMN).unwrap().values();
    assert_eq!(leading_missing(level), 0);
}

#[test]
fn inventory_changes_hold_for_the_whole_week() {
    let sources = tiny_sources(260);
    let out = generate_features(&sources).unwrap();
    let weekly = &sources[&SourceKind::Inventory];
    let levels = weekly.column("stocks").unwrap().values();

    let change = out.column("stocks_weekly_change").unwrap().values();
    let second = out.index().iter().position(|d| *d == weekly.index()[1]).unwrap();
    let expected = levels[1] - levels[0];
    assert!(change[second..second + 7].iter().all(|v| *v == expected));
}

#[test]
fn inventory_zscore_is_standardized() {
    let out = default_features();
    let z: Vec<f64> = out
        .column("crude_oil_inventory_zscore")
        .unwrap()
        .values()
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .collect();
    let n = z.len() as f64;
    let mean = z.iter().sum::<f64>() / n;
    let var = z.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    assert!(mean.abs() < 1e-9);
    assert!((var.sqrt() - 1.0).abs() < 1e-9);
}

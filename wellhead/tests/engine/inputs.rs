use wellhead::{FeatureEngine, SourceKind, Sources, WellheadError, generate_features};
use wellhead_mock::MockProvider;

use crate::helpers::*;

#[test]
fn empty_sources_map_is_missing_price() {
    let err = generate_features(&Sources::new()).unwrap_err();
    assert_eq!(err, WellheadError::MissingSource { kind: SourceKind::Price });
    assert!(err.is_schema_error());
}

#[test]
fn missing_inventory_is_reported() {
    let sources = MockProvider::new()
        .without(SourceKind::Inventory)
        .sources()
        .unwrap();
    let err = generate_features(&sources).unwrap_err();
    assert_eq!(
        err,
        WellheadError::MissingSource { kind: SourceKind::Inventory }
    );
}

#[test]
fn empty_price_is_reported() {
    let sources = MockProvider::new()
        .empty(SourceKind::Price)
        .sources()
        .unwrap();
    let err = generate_features(&sources).unwrap_err();
    assert_eq!(err, WellheadError::EmptySource { kind: SourceKind::Price });
}

#[test]
fn rig_count_is_optional() {
    let sources = MockProvider::new()
        .without(SourceKind::RigCount)
        .sources()
        .unwrap();
    assert!(generate_features(&sources).is_ok());
}

#[test]
fn missing_symbol_column_lists_available_columns() {
    let engine = FeatureEngine::builder()
        .symbols(["WTI", "Dubai"])
        .no_spread()
        .build()
        .unwrap();
    match engine.generate_features(&mock_sources()) {
        Err(WellheadError::ColumnNotFound { name, available }) => {
            assert_eq!(name, "Dubai");
            assert!(available.iter().any(|c| c == "WTI"));
        }
        other => panic!("expected ColumnNotFound, got {other:?}"),
    }
}

#[test]
fn multi_column_inventory_needs_a_configured_column() {
    let mut sources = tiny_sources(260);
    let mut inv = sources.remove(&SourceKind::Inventory).unwrap();
    inv.push_column(wellhead::Column::new("gasoline", vec![230.0; inv.len()]))
        .unwrap();
    sources.insert(SourceKind::Inventory, inv);

    let err = generate_features(&sources).unwrap_err();
    assert!(matches!(err, WellheadError::Data(_)));

    let engine = FeatureEngine::builder()
        .inventory_column("stocks")
        .build()
        .unwrap();
    let out = engine.generate_features(&sources).unwrap();
    assert!(out.column("stocks_zscore").is_some());
    assert!(out.column("gasoline").is_some());
    assert!(out.column("gasoline_zscore").is_none());
}

#[test]
fn short_history_fails_without_partial_output() {
    // 120 calendar days on the merged table, short of the 200-day average.
    let err = generate_features(&tiny_sources(120)).unwrap_err();
    assert!(matches!(
        err,
        WellheadError::InsufficientHistory { required: 200, .. }
    ));
}

#[test]
fn caller_tables_are_left_untouched() {
    let sources = mock_sources();
    let before = sources.clone();
    let _ = generate_features(&sources).unwrap();
    assert_eq!(sources, before);
}

#[test]
fn intraday_prices_match_daily_settlements() {
    let daily = generate_features(&mock_sources()).unwrap();
    let intraday = generate_features(&MockProvider::new().intraday(true).sources().unwrap())
        .unwrap();
    assert_eq!(daily.index(), intraday.index());
    let a = daily.column("WTI_rsi").unwrap().values();
    let b = intraday.column("WTI_rsi").unwrap().values();
    for (x, y) in a.iter().zip(b) {
        assert!(x.is_nan() && y.is_nan() || x == y);
    }
}

#[test]
fn presence_is_checked_before_emptiness() {
    let sources = MockProvider::new()
        .empty(SourceKind::Price)
        .without(SourceKind::Inventory)
        .sources()
        .unwrap();
    let err = generate_features(&sources).unwrap_err();
    assert_eq!(
        err,
        WellheadError::MissingSource { kind: SourceKind::Inventory }
    );
}

use wellhead::{Column, FeatureEngine, FeatureGroup, INVENTORY_SYMBOL, SourceKind, feature_rows};

use crate::helpers::*;

#[test]
fn catalog_covers_every_derived_column() {
    let out = default_features();
    // 5 price features x 2 symbols + spread
    assert_eq!(out.features(FeatureGroup::Price).count(), 11);
    // 2 MAs + 2 bands + RSI + 2 MACD lines, x 2 symbols
    assert_eq!(out.features(FeatureGroup::Indicator).count(), 14);
    // weekly change, weekly percent change, z-score
    assert_eq!(out.features(FeatureGroup::Inventory).count(), 3);

    for entry in out.catalog() {
        assert!(out.column(&entry.column).is_some(), "{}", entry.column);
    }
}

#[test]
fn catalog_splits_symbol_and_feature() {
    let out = default_features();
    let rsi = out.feature("Brent_rsi").unwrap();
    assert_eq!(rsi.symbol, "Brent");
    assert_eq!(rsi.feature, "rsi");
    assert_eq!(rsi.group, FeatureGroup::Indicator);

    let spread = out.feature("WTI-Brent_spread").unwrap();
    assert_eq!(spread.symbol, "WTI-Brent");
    assert_eq!(spread.feature, "spread");

    let z = out.feature("crude_oil_inventory_zscore").unwrap();
    assert_eq!(z.symbol, INVENTORY_SYMBOL);
    assert_eq!(z.feature, "zscore");
    assert_eq!(z.group, FeatureGroup::Inventory);
}

#[test]
fn source_columns_are_not_catalogued() {
    let out = default_features();
    let sources: Vec<&str> = out.source_columns().map(|c| c.name()).collect();
    for name in ["WTI", "Brent", "OVX", "WTI_open", "Brent_volume", INVENTORY_COLUMN] {
        assert!(sources.contains(&name), "{name}");
    }
    assert!(out.feature("WTI_open").is_none());
}

#[test]
fn overlapping_symbol_prefixes_keep_their_own_features() {
    let mut sources = tiny_sources(260);
    let price = sources.get_mut(&SourceKind::Price).unwrap();
    let front: Vec<f64> = price.column("WTI").unwrap().values().iter().map(|v| v + 0.5).collect();
    price.put_column(Column::new("WTI_front", front)).unwrap();

    let out = FeatureEngine::builder()
        .symbols(["WTI", "Brent", "WTI_front"])
        .build()
        .unwrap()
        .generate_features(&sources)
        .unwrap();

    let front = out.feature("WTI_front_log_return").unwrap();
    assert_eq!(front.symbol, "WTI_front");
    assert_eq!(front.feature, "log_return");
    let front_rsi = out.feature("WTI_front_rsi").unwrap();
    assert_eq!(front_rsi.symbol, "WTI_front");

    let wti = out.feature("WTI_log_return").unwrap();
    assert_eq!(wti.symbol, "WTI");
    assert_eq!(wti.feature, "log_return");

    assert!(
        feature_rows(&out)
            .iter()
            .filter(|r| r.symbol == "WTI")
            .all(|r| !r.feature_name.starts_with("front_"))
    );
}

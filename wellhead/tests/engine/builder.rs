use wellhead::{
    Column, FeatureConfig, FeatureEngine, IndicatorParams, PriceFeatureParams, SourceKind, Table,
    WellheadError,
};

use crate::helpers::*;

#[test]
fn default_builder_matches_default_config() {
    let engine = FeatureEngine::builder().build().unwrap();
    let expected = FeatureConfig {
        indicator_symbols: vec!["WTI".into(), "Brent".into()],
        ..FeatureConfig::default()
    };
    assert_eq!(engine.config(), &expected);
}

#[test]
fn json_config_without_indicator_symbols_uses_its_own_symbols() {
    let json = r#"{ "symbols": ["CL", "BZ"],
                    "spread": { "primary": "CL", "reference": "BZ" } }"#;
    let cfg: FeatureConfig = serde_json::from_str(json).unwrap();
    assert!(cfg.indicator_symbols.is_empty());

    let engine = FeatureEngine::builder().config(cfg).build().unwrap();
    assert_eq!(engine.config().indicator_symbols, vec!["CL", "BZ"]);

    let mut sources = tiny_sources(260);
    let price = &sources[&SourceKind::Price];
    let renamed = Table::new(
        price.index().to_vec(),
        vec![
            Column::new("CL", price.column("WTI").unwrap().values().to_vec()),
            Column::new("BZ", price.column("Brent").unwrap().values().to_vec()),
        ],
    )
    .unwrap();
    sources.insert(SourceKind::Price, renamed);

    let out = engine.generate_features(&sources).unwrap();
    for col in ["CL_log_return", "CL-BZ_spread", "CL_rsi", "BZ_macd", "BZ_ma200"] {
        assert!(out.column(col).is_some(), "{col}");
    }
    assert!(out.column("WTI_rsi").is_none());
}

#[test]
fn indicator_symbols_are_checked_like_price_symbols() {
    for symbols in [vec!["WTI", ""], vec!["WTI", "WTI"]] {
        let err = FeatureEngine::builder()
            .indicator_symbols(symbols)
            .build()
            .unwrap_err();
        assert!(matches!(err, WellheadError::InvalidArg(_)), "{err}");
    }
}

#[test]
fn symbols_flow_into_indicator_symbols_unless_set() {
    let engine = FeatureEngine::builder()
        .symbols(["WTI", "Brent", "OVX"])
        .build()
        .unwrap();
    assert_eq!(engine.config().indicator_symbols, vec!["WTI", "Brent", "OVX"]);

    let engine = FeatureEngine::builder()
        .symbols(["WTI", "Brent", "OVX"])
        .indicator_symbols(["WTI"])
        .build()
        .unwrap();
    assert_eq!(engine.config().indicator_symbols, vec!["WTI"]);
}

#[test]
fn build_rejects_spread_outside_symbols() {
    let err = FeatureEngine::builder()
        .symbols(["WTI"])
        .spread("WTI", "Brent")
        .build()
        .unwrap_err();
    assert!(matches!(err, WellheadError::InvalidArg(_)));

    assert!(
        FeatureEngine::builder()
            .symbols(["WTI"])
            .no_spread()
            .build()
            .is_ok()
    );
}

#[test]
fn build_rejects_bad_windows() {
    let err = FeatureEngine::builder()
        .price_params(PriceFeatureParams {
            momentum_periods: 0,
            ..PriceFeatureParams::default()
        })
        .build()
        .unwrap_err();
    assert!(matches!(err, WellheadError::InvalidArg(_)));

    let err = FeatureEngine::builder()
        .indicator_params(IndicatorParams {
            macd_fast: 30,
            ..IndicatorParams::default()
        })
        .build()
        .unwrap_err();
    assert!(matches!(err, WellheadError::InvalidArg(_)));
}

#[test]
fn config_from_json_round_trips_through_builder() {
    let json = r#"{ "symbols": ["WTI", "Brent", "OVX"], "indicator_symbols": ["WTI"],
                    "timezone": "America/New_York" }"#;
    let cfg: FeatureConfig = serde_json::from_str(json).unwrap();
    let engine = FeatureEngine::builder().config(cfg.clone()).build().unwrap();
    assert_eq!(engine.config(), &cfg);
    assert_eq!(engine.config().timezone, Some(chrono_tz::America::New_York));
}

#[test]
fn engine_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FeatureEngine>();
}

use wellhead::{FeatureEngine, IndicatorParams};

use crate::helpers::*;

#[test]
fn moving_averages_warm_up_on_the_merged_calendar() {
    let out = default_features();
    let wti = out.column("WTI").unwrap().values();
    let lead = leading_missing(wti);
    for (col, w) in [("WTI_ma50", 50), ("WTI_ma200", 200)] {
        let ma = out.column(col).unwrap().values();
        assert_eq!(leading_missing(ma), lead + w - 1, "{col}");
        assert!(ma[lead + w - 1..].iter().all(|v| v.is_finite()));
    }
}

#[test]
fn rsi_is_bounded_and_macd_defined() {
    let out = default_features();
    for s in ["WTI", "Brent"] {
        let rsi = out.column(&format!("{s}_rsi")).unwrap().values();
        assert!(rsi.iter().all(|v| v.is_nan() || (0.0..=100.0).contains(v)));
        let macd = out.column(&format!("{s}_macd")).unwrap().values();
        let signal = out.column(&format!("{s}_macd_signal")).unwrap().values();
        assert_eq!(leading_missing(macd), leading_missing(signal));
    }
}

#[test]
fn bands_straddle_the_close() {
    let out = default_features();
    let upper = out.column("WTI_bb_upper").unwrap().values();
    let lower = out.column("WTI_bb_lower").unwrap().values();
    for (u, l) in upper.iter().zip(lower) {
        assert_eq!(u.is_nan(), l.is_nan());
        if !u.is_nan() {
            assert!(u >= l);
        }
    }
}

#[test]
fn indicator_symbols_can_differ_from_price_symbols() {
    let engine = FeatureEngine::builder()
        .symbols(["WTI", "Brent"])
        .indicator_symbols(["OVX"])
        .indicator_params(IndicatorParams {
            ma_windows: vec![20],
            ..IndicatorParams::default()
        })
        .build()
        .unwrap();
    let out = engine.generate_features(&mock_sources()).unwrap();
    assert!(out.column("OVX_ma20").is_some());
    assert!(out.column("WTI_rsi").is_none());
    assert!(out.column("WTI_log_return").is_some());
}

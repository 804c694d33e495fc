use chrono::{TimeZone, Utc};
use wellhead::{FeatureEngine, IndicatorParams, PriceFeatureParams, WellheadError};
use wellhead_demos::common::{cell, sources};
use wellhead_mock::MockProvider;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Add OVX to the price symbols, use a faster indicator set, and keep
    //    indicators on the two benchmarks only.
    let engine = FeatureEngine::builder()
        .symbols(["WTI", "Brent", "OVX"])
        .indicator_symbols(["WTI", "Brent"])
        .price_params(PriceFeatureParams {
            volatility_window: 10,
            ..PriceFeatureParams::default()
        })
        .indicator_params(IndicatorParams {
            ma_windows: vec![10, 30],
            rsi_window: 9,
            ..IndicatorParams::default()
        })
        .build()?;

    let features = engine.generate_features(&sources()?)?;
    if let (Some(ovx), Some(ma)) = (
        features.column("OVX_volatility"),
        features.column("WTI_ma30"),
    ) {
        let i = features.len() - 1;
        println!(
            "latest OVX volatility: {}, WTI 30-day MA: {}",
            cell(ovx.values()[i]),
            cell(ma.values()[i])
        );
    }

    // 2. A market timezone decides which calendar date a raw print belongs to.
    let ny = FeatureEngine::builder()
        .timezone(chrono_tz::America::New_York)
        .build()?;
    let late = Utc.with_ymd_and_hms(2024, 3, 8, 2, 30, 0).single();
    if let Some(ts) = late {
        let table =
            ny.table_from_timestamps(&[ts], vec![wellhead::Column::new("WTI", vec![78.9])])?;
        if let Some(d) = table.index().first() {
            println!("print at {ts} lands on {d} in New York");
        }
    }

    // 3. Errors abort the run and say what went wrong.
    let short = MockProvider::new().trading_days(40);
    let mut tables = short.sources()?;
    if let Some(inv) = tables.get_mut(&wellhead::SourceKind::Inventory) {
        let keep = inv.len().min(8);
        let cut = wellhead::Table::new(
            inv.index()[..keep].to_vec(),
            inv.columns()
                .iter()
                .map(|c| wellhead::Column::new(c.name(), c.values()[..keep].to_vec()))
                .collect(),
        )?;
        *inv = cut;
    }
    match wellhead::generate_features(&tables) {
        Err(e @ WellheadError::InsufficientHistory { .. }) => println!("expected failure: {e}"),
        Err(e) => return Err(e.into()),
        Ok(_) => println!("unexpectedly enough history"),
    }
    Ok(())
}

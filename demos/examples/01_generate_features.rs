use wellhead::FeatureGroup;
use wellhead_demos::common::{cell, engine, sources};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = engine()?;
    let features = engine.generate_features(&sources()?)?;

    let (Some(first), Some(last)) = (features.index().first(), features.index().last()) else {
        println!("no rows");
        return Ok(());
    };
    println!(
        "Master table: {} daily rows from {first} to {last}, {} derived columns",
        features.len(),
        features.catalog().len()
    );

    for group in [FeatureGroup::Price, FeatureGroup::Indicator, FeatureGroup::Inventory] {
        let names: Vec<&str> = features.features(group).map(|f| f.column.as_str()).collect();
        println!("\n{group:?} features ({}): {}", names.len(), names.join(", "));
    }

    let shown = [
        "WTI",
        "WTI_ma50",
        "WTI_rsi",
        "WTI_macd",
        "WTI-Brent_spread",
        "crude_oil_inventory_zscore",
    ];
    println!("\n## Last 7 days");
    print!("{:<12}", "Date");
    for name in shown {
        print!(" | {name:>14}");
    }
    println!();

    let start = features.len().saturating_sub(7);
    for (i, date) in features.index().iter().enumerate().skip(start) {
        print!("{:<12}", date.format("%Y-%m-%d"));
        for name in shown {
            let v = features
                .column(name)
                .map_or(f64::NAN, |c| c.values()[i]);
            print!(" | {:>14}", cell(v));
        }
        println!();
    }
    Ok(())
}

use wellhead::{
    SourceKind, feature_rows, indicator_rows, inventory_rows, price_rows, rig_count_record,
};
use wellhead_demos::common::{engine, sources};
use wellhead_mock::INVENTORY_COLUMN;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = engine()?;
    let sources = sources()?;
    let features = engine.generate_features(&sources)?;

    let features_long = feature_rows(&features);
    let indicators = indicator_rows(&features);
    println!("commodity_features rows:    {}", features_long.len());
    println!("technical_indicators rows:  {}", indicators.len());

    if let Some(price) = sources.get(&SourceKind::Price) {
        let rows = price_rows(price, &engine.config().symbols)?;
        println!("commodity_prices rows:      {}", rows.len());
        if let Some(last) = rows.last() {
            println!("  latest: {}", serde_json::to_string(last)?);
        }
    }
    if let Some(inventory) = sources.get(&SourceKind::Inventory) {
        let rows = inventory_rows(inventory, INVENTORY_COLUMN, "crude_oil")?;
        println!("inventory_levels rows:      {}", rows.len());
    }
    if let Some(snapshot) = sources.get(&SourceKind::RigCount) {
        let record = rig_count_record(snapshot)?;
        println!("rig_counts: {}", serde_json::to_string(&record)?);
    }

    if let Some(last) = indicators.last() {
        println!("\nLatest indicator row:\n{}", serde_json::to_string_pretty(last)?);
    }
    Ok(())
}

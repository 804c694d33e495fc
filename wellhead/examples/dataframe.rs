#[cfg(feature = "dataframe")]
use wellhead::{FeatureEngine, ToDataFrame};
#[cfg(feature = "dataframe")]
use wellhead_mock::MockProvider;

#[cfg(feature = "dataframe")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sources = MockProvider::new().sources()?;
    let features = FeatureEngine::builder()
        .build()?
        .generate_features(&sources)?;

    let df = features.to_dataframe()?;
    println!(
        "DataFrame shape: {} rows x {} cols",
        df.height(),
        df.width()
    );
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .take(6)
        .map(|n| n.to_string())
        .collect();
    println!("leading columns: {}", names.join(", "));
    Ok(())
}

#[cfg(not(feature = "dataframe"))]
fn main() {
    eprintln!("This example requires the 'dataframe' feature. Skipping.");
}

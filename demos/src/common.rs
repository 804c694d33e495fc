use std::error::Error;

use wellhead::{FeatureConfig, FeatureEngine, Sources};
use wellhead_mock::MockProvider;

/// Environment variable naming an optional JSON `FeatureConfig` file.
pub const CONFIG_ENV: &str = "WELLHEAD_CONFIG";

/// Load the engine configuration: the JSON file named by `WELLHEAD_CONFIG`,
/// or the defaults when it is unset.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_config() -> Result<FeatureConfig, Box<dyn Error>> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)?;
            let cfg: FeatureConfig = serde_json::from_str(&raw)?;
            tracing::info!(path = %path.to_string_lossy(), "loaded feature config");
            Ok(cfg)
        }
        None => Ok(FeatureConfig::default()),
    }
}

/// Build an engine from [`load_config`].
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or is invalid.
pub fn engine() -> Result<FeatureEngine, Box<dyn Error>> {
    Ok(FeatureEngine::builder().config(load_config()?).build()?)
}

/// Provider tables for the demos. These come from deterministic fixtures so
/// the demos run offline.
///
/// # Errors
/// Returns an error if a fixture table fails to build.
pub fn sources() -> Result<Sources, Box<dyn Error>> {
    println!("--- (Using mock provider fixtures) ---");
    Ok(MockProvider::new().sources()?)
}

/// Format an optional value for tables.
#[must_use]
pub fn cell(v: f64) -> String {
    if v.is_nan() {
        "-".to_string()
    } else {
        format!("{v:.2}")
    }
}

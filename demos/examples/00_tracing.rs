use tracing_subscriber::fmt::format::FmtSpan;
use wellhead_demos::common::{engine, sources};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Human-friendly subscriber with env-based filtering.
    // Suggested: RUST_LOG=wellhead=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let engine = engine()?;
    let features = engine.generate_features(&sources()?)?;
    tracing::info!(
        rows = features.len(),
        features = features.catalog().len(),
        "pipeline finished"
    );
    Ok(())
}

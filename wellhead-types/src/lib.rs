//! Wellhead-specific error taxonomy, provider identities, and configuration values.
#![warn(missing_docs)]

mod config;
mod error;
mod source;

pub use config::{FeatureConfig, IndicatorParams, PriceFeatureParams, SpreadPair};
pub use error::WellheadError;
pub use source::SourceKind;

//! The feature-generation run: input checks, per-source features, the daily
//! merge, indicators, and the anomaly score, in that order.

mod inputs;

use wellhead_core::{
    SourceKind, Sources, SpreadPair, add_price_features, add_technical_indicators, add_zscore,
    align_daily, inventory_daily_features,
};
use wellhead_types::WellheadError;

use crate::core::FeatureEngine;
use crate::output::{Catalog, FeatureGroup, FeatureTable};

/// Symbol under which inventory features are catalogued.
pub const INVENTORY_SYMBOL: &str = "inventory";

impl FeatureEngine {
    /// Fuse the provider tables into one daily feature table.
    ///
    /// Steps, in order:
    /// 1. Price and inventory must be present (`MissingSource`) and non-empty
    ///    (`EmptySource`). The rig-count snapshot is ignored here.
    /// 2. Working copies are normalized: sorted by date, one row per date.
    /// 3. Price features on the trading-day price table.
    /// 4. Inventory changes on the native weekly samples, then densified to
    ///    daily cadence.
    /// 5. Outer join onto the daily calendar spanning both tables, with
    ///    forward-fill. Price columns come first.
    /// 6. Technical indicators per indicator symbol on the merged table, so
    ///    they see the full aligned history.
    /// 7. Z-score of the inventory level over the merged history.
    ///
    /// Any failure aborts the run; no partially built table is returned.
    ///
    /// # Errors
    /// Every `WellheadError` raised by a step, unchanged.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "wellhead::engine",
            skip(self, sources),
            fields(sources = sources.len()),
        )
    )]
    pub fn generate_features(&self, sources: &Sources) -> Result<FeatureTable, WellheadError> {
        let cfg = &self.cfg;
        inputs::check_required(sources)?;
        let price = inputs::working_copy(sources, SourceKind::Price)?;
        let inventory = inputs::working_copy(sources, SourceKind::Inventory)?;
        let level = inputs::inventory_column(&inventory, cfg.inventory_column.as_deref())?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "wellhead::engine",
            price_rows = price.len(),
            inventory_rows = inventory.len(),
            inventory_column = %level,
            "inputs normalized"
        );

        let mut catalog = Catalog::default();

        let width = price.columns().len();
        let price = add_price_features(price, &cfg.symbols, &cfg.price, cfg.spread.as_ref())?;
        let spread_label = cfg.spread.as_ref().map(SpreadPair::label);
        let owners: Vec<(&str, &str)> = cfg
            .symbols
            .iter()
            .chain(&spread_label)
            .map(|s| (s.as_str(), s.as_str()))
            .collect();
        catalog.record(&price, width, &owners, FeatureGroup::Price);

        let inventory = inventory_daily_features(inventory, &level)?;
        catalog.record(
            &inventory,
            0,
            &[(level.as_str(), INVENTORY_SYMBOL)],
            FeatureGroup::Inventory,
        );

        let mut merged = align_daily(&price, &inventory)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "wellhead::engine",
            days = merged.len(),
            columns = merged.columns().len(),
            "sources aligned"
        );

        for s in cfg.effective_indicator_symbols() {
            let width = merged.columns().len();
            merged = add_technical_indicators(merged, s, &cfg.indicators)?;
            catalog.record(&merged, width, &[(s.as_str(), s.as_str())], FeatureGroup::Indicator);
        }

        let width = merged.columns().len();
        let merged = add_zscore(merged, &level)?;
        catalog.record(
            &merged,
            width,
            &[(level.as_str(), INVENTORY_SYMBOL)],
            FeatureGroup::Inventory,
        );

        let out = catalog.finish(merged);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "wellhead::engine",
            rows = out.len(),
            features = out.catalog().len(),
            "feature table ready"
        );

        Ok(out)
    }
}

/// Run the pipeline with the default configuration.
///
/// # Errors
/// Same as [`FeatureEngine::generate_features`].
pub fn generate_features(sources: &Sources) -> Result<FeatureTable, WellheadError> {
    FeatureEngine::builder().build()?.generate_features(sources)
}

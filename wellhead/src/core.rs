use chrono::{DateTime, Utc};
use wellhead_core::{Column, FeatureConfig, IndicatorParams, PriceFeatureParams, SpreadPair, Table};
use wellhead_types::WellheadError;

/// Feature engine that turns provider tables into one daily feature table.
///
/// Immutable after [`FeatureEngineBuilder::build`]; one engine can serve any
/// number of runs, from any number of threads.
#[derive(Debug, Clone)]
pub struct FeatureEngine {
    pub(crate) cfg: FeatureConfig,
}

/// Builder for constructing a `FeatureEngine` with custom configuration.
#[derive(Debug, Clone)]
pub struct FeatureEngineBuilder {
    cfg: FeatureConfig,
}

impl Default for FeatureEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureEngineBuilder {
    /// Create a builder with the default configuration: WTI and Brent
    /// symbols, a WTI-Brent spread, and standard indicator windows.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: FeatureConfig::default(),
        }
    }

    /// Start from a complete configuration, e.g. one loaded from JSON.
    ///
    /// An empty `indicator_symbols` list falls back to `symbols` at build time.
    #[must_use]
    pub fn config(mut self, cfg: FeatureConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the close-price symbols that receive price features.
    ///
    /// Unless [`indicator_symbols`](Self::indicator_symbols) is also set, the
    /// same symbols receive technical indicators.
    #[must_use]
    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cfg.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Set the symbols that receive technical indicators on the merged table.
    #[must_use]
    pub fn indicator_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cfg.indicator_symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Set the benchmark pair for the spread feature.
    #[must_use]
    pub fn spread(mut self, primary: impl Into<String>, reference: impl Into<String>) -> Self {
        self.cfg.spread = Some(SpreadPair::new(primary, reference));
        self
    }

    /// Disable the spread feature.
    #[must_use]
    pub fn no_spread(mut self) -> Self {
        self.cfg.spread = None;
        self
    }

    /// Set the price feature windows.
    #[must_use]
    pub const fn price_params(mut self, params: PriceFeatureParams) -> Self {
        self.cfg.price = params;
        self
    }

    /// Set the technical indicator windows.
    #[must_use]
    pub fn indicator_params(mut self, params: IndicatorParams) -> Self {
        self.cfg.indicators = params;
        self
    }

    /// Name the inventory level column instead of relying on the inventory
    /// table having exactly one column.
    #[must_use]
    pub fn inventory_column(mut self, column: impl Into<String>) -> Self {
        self.cfg.inventory_column = Some(column.into());
        self
    }

    /// Market timezone used by [`FeatureEngine::table_from_timestamps`].
    #[must_use]
    pub const fn timezone(mut self, tz: chrono_tz::Tz) -> Self {
        self.cfg.timezone = Some(tz);
        self
    }

    /// Build the engine.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the configuration fails
    /// [`FeatureConfig::validate`].
    pub fn build(mut self) -> Result<FeatureEngine, WellheadError> {
        self.cfg.validate()?;
        self.cfg.indicator_symbols = self.cfg.effective_indicator_symbols().to_vec();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "wellhead::engine",
            symbols = ?self.cfg.symbols,
            indicator_symbols = ?self.cfg.indicator_symbols,
            "feature engine built"
        );

        Ok(FeatureEngine { cfg: self.cfg })
    }
}

impl FeatureEngine {
    /// Start building a new `FeatureEngine`.
    ///
    /// ```
    /// let engine = wellhead::FeatureEngine::builder()
    ///     .symbols(["WTI", "Brent", "OVX"])
    ///     .indicator_symbols(["WTI", "Brent"])
    ///     .spread("WTI", "Brent")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(engine.config().symbols.len(), 3);
    /// ```
    #[must_use]
    pub fn builder() -> FeatureEngineBuilder {
        FeatureEngineBuilder::new()
    }

    /// The validated configuration this engine runs with.
    #[must_use]
    pub const fn config(&self) -> &FeatureConfig {
        &self.cfg
    }

    /// Build a provider table from raw timestamps, mapping each instant onto a
    /// calendar date in the configured market timezone (UTC if unset).
    ///
    /// # Errors
    /// Propagates [`Table::from_timestamps`] errors.
    pub fn table_from_timestamps(
        &self,
        timestamps: &[DateTime<Utc>],
        columns: Vec<Column>,
    ) -> Result<Table, WellheadError> {
        Table::from_timestamps(timestamps, columns, self.cfg.timezone)
    }
}

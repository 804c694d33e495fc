//! Deterministic provider fixtures for wellhead tests and demos.
//!
//! `MockProvider` hands out a full `Sources` map built from static formulas:
//! about fourteen months of WTI/Brent/OVX settlements with OHLCV bars, weekly
//! crude inventory reports, and a single rig-count snapshot. Builder toggles
//! drop or empty a provider, or switch the price feed to intraday prints, so
//! tests can drive every orchestrator path without network access.
use std::collections::BTreeSet;

use wellhead_core::{SourceKind, Sources, Table, WellheadError};

mod fixtures;

pub use fixtures::inventory::COLUMN as INVENTORY_COLUMN;

/// Trading days in the price fixture.
pub const TRADING_DAYS: usize = 300;
/// Weekly reports in the inventory fixture.
pub const INVENTORY_WEEKS: usize = 61;
/// Close-price columns in the price fixture.
pub const PRICE_SYMBOLS: [&str; 3] = ["WTI", "Brent", "OVX"];

/// Mock provider for CI-safe tests and demos.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    omitted: BTreeSet<SourceKind>,
    emptied: BTreeSet<SourceKind>,
    intraday: bool,
    trading_days: Option<usize>,
}

impl MockProvider {
    /// Provider delivering every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave `kind` out of the sources map.
    #[must_use]
    pub fn without(mut self, kind: SourceKind) -> Self {
        self.omitted.insert(kind);
        self
    }

    /// Deliver `kind` with its columns but no rows.
    #[must_use]
    pub fn empty(mut self, kind: SourceKind) -> Self {
        self.emptied.insert(kind);
        self
    }

    /// Deliver the price feed as three unsorted prints per trading day.
    #[must_use]
    pub const fn intraday(mut self, yes: bool) -> Self {
        self.intraday = yes;
        self
    }

    /// Shorten the price history, e.g. to trigger insufficient-history paths.
    #[must_use]
    pub const fn trading_days(mut self, n: usize) -> Self {
        self.trading_days = Some(n);
        self
    }

    /// Fetch one provider's table, or `None` if it is omitted.
    ///
    /// # Errors
    /// Propagates table construction errors from the fixtures.
    pub fn fetch(&self, kind: SourceKind) -> Result<Option<Table>, WellheadError> {
        if self.omitted.contains(&kind) {
            return Ok(None);
        }
        let days = self.trading_days.unwrap_or(TRADING_DAYS);
        let table = match kind {
            SourceKind::Price if self.intraday => fixtures::price::intraday(days)?,
            SourceKind::Price => fixtures::price::daily(days)?,
            SourceKind::Inventory => fixtures::inventory::weekly(INVENTORY_WEEKS)?,
            SourceKind::RigCount => fixtures::rig_count::snapshot()?,
        };
        if self.emptied.contains(&kind) {
            return Ok(Some(strip_rows(&table)?));
        }
        Ok(Some(table))
    }

    /// Fetch every non-omitted provider.
    ///
    /// # Errors
    /// Propagates table construction errors from the fixtures.
    pub fn sources(&self) -> Result<Sources, WellheadError> {
        let mut out = Sources::new();
        for kind in SourceKind::ALL {
            if let Some(t) = self.fetch(kind)? {
                out.insert(kind, t);
            }
        }
        Ok(out)
    }
}

fn strip_rows(table: &Table) -> Result<Table, WellheadError> {
    let columns = table
        .columns()
        .iter()
        .map(|c| wellhead_core::Column::new(c.name(), Vec::new()))
        .collect();
    Table::new(Vec::new(), columns)
}

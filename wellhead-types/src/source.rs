use core::fmt;
use serde::{Deserialize, Serialize};

/// Identity of an upstream data provider feeding the feature engine.
///
/// The set is closed: each provider delivers a structurally different table
/// and the engine dispatches on the tag rather than on provider types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceKind {
    /// Daily or intraday price quotes, one close column per symbol.
    Price,
    /// Weekly inventory-stock statistic with a single value column.
    Inventory,
    /// Point-in-time drilling-rig-count snapshot (single row).
    RigCount,
}

impl SourceKind {
    /// All provider kinds, in pipeline order.
    pub const ALL: [Self; 3] = [Self::Price, Self::Inventory, Self::RigCount];

    /// Stable, upper-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Price => "PRICE",
            Self::Inventory => "INVENTORY",
            Self::RigCount => "RIG_COUNT",
        }
    }

    /// Whether `generate_features` refuses to run without this source.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Price | Self::Inventory)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

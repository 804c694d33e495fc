use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wellhead_core::{Column, Table};

/// Which calculator produced a derived column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureGroup {
    /// Return, momentum, volatility, weekly change, rolling mean, and spread.
    Price,
    /// Moving averages, Bollinger bands, RSI, and MACD on the merged table.
    Indicator,
    /// Inventory changes and the inventory z-score.
    Inventory,
}

/// Catalog entry for one derived column of a [`FeatureTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureColumn {
    /// Column name in the table, e.g. `WTI_rsi`.
    pub column: String,
    /// Symbol the feature belongs to: a price symbol, a spread label such as
    /// `WTI-Brent`, or `inventory`.
    pub symbol: String,
    /// Feature label with the symbol prefix removed, e.g. `rsi`.
    pub feature: String,
    /// Producing calculator.
    pub group: FeatureGroup,
}

/// Daily master table plus a catalog of its derived columns.
///
/// Columns not in the catalog are source columns carried through from the
/// provider tables (closes, OHLCV bars, the inventory level).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    table: Table,
    catalog: Vec<FeatureColumn>,
}

impl FeatureTable {
    pub(crate) const fn new(table: Table, catalog: Vec<FeatureColumn>) -> Self {
        Self { table, catalog }
    }

    /// The underlying table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Consume into the underlying table.
    #[must_use]
    pub fn into_table(self) -> Table {
        self.table
    }

    /// Derived columns in the order they were produced.
    #[must_use]
    pub fn catalog(&self) -> &[FeatureColumn] {
        &self.catalog
    }

    /// Derived columns produced by one calculator.
    pub fn features(&self, group: FeatureGroup) -> impl Iterator<Item = &FeatureColumn> {
        self.catalog.iter().filter(move |f| f.group == group)
    }

    /// Catalog entry for a column, if it is derived.
    #[must_use]
    pub fn feature(&self, column: &str) -> Option<&FeatureColumn> {
        self.catalog.iter().find(|f| f.column == column)
    }

    /// Source columns carried through unchanged.
    pub fn source_columns(&self) -> impl Iterator<Item = &Column> {
        self.table
            .columns()
            .iter()
            .filter(|c| self.feature(c.name()).is_none())
    }

    /// Look up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.table.column(name)
    }

    /// Daily index.
    #[must_use]
    pub fn index(&self) -> &[NaiveDate] {
        self.table.index()
    }

    /// Number of daily rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

// Catalog builder: attributes the columns a step appended to a symbol.
#[derive(Debug, Default)]
pub(crate) struct Catalog {
    entries: Vec<FeatureColumn>,
}

impl Catalog {
    /// Record every column of `table` past `from` named `{prefix}_{feature}`
    /// for one of the `(prefix, symbol)` owners. When several prefixes match,
    /// as with `WTI` and `WTI_front`, the longest one owns the column.
    pub(crate) fn record(
        &mut self,
        table: &Table,
        from: usize,
        owners: &[(&str, &str)],
        group: FeatureGroup,
    ) {
        for c in table.columns().iter().skip(from) {
            let Some((symbol, feature)) = owners
                .iter()
                .filter_map(|&(prefix, symbol)| {
                    c.name()
                        .strip_prefix(prefix)
                        .and_then(|rest| rest.strip_prefix('_'))
                        .map(|feature| (prefix.len(), symbol, feature))
                })
                .max_by_key(|&(len, ..)| len)
                .map(|(_, symbol, feature)| (symbol, feature))
            else {
                continue;
            };
            if self.entries.iter().any(|e| e.column == c.name()) {
                continue;
            }
            self.entries.push(FeatureColumn {
                column: c.name().to_string(),
                symbol: symbol.to_string(),
                feature: feature.to_string(),
                group,
            });
        }
    }

    pub(crate) fn finish(self, table: Table) -> FeatureTable {
        FeatureTable::new(table, self.entries)
    }
}

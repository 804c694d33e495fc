//! Polars export behind the `dataframe` feature.

use polars::prelude::{Column as PlColumn, DataFrame};
use wellhead_core::{Table, is_missing};
use wellhead_types::WellheadError;

use crate::output::FeatureTable;

/// Conversion into a `polars` `DataFrame`.
pub trait ToDataFrame {
    /// Build a frame with a `date` column followed by one nullable `f64`
    /// column per table column; undefined cells become nulls.
    ///
    /// # Errors
    /// Returns `Data` if polars rejects the frame.
    fn to_dataframe(&self) -> Result<DataFrame, WellheadError>;
}

impl ToDataFrame for Table {
    fn to_dataframe(&self) -> Result<DataFrame, WellheadError> {
        let mut columns = Vec::with_capacity(self.columns().len() + 1);
        columns.push(PlColumn::new("date".into(), self.index()));
        for c in self.columns() {
            let values: Vec<Option<f64>> = c
                .values()
                .iter()
                .map(|v| (!is_missing(*v)).then_some(*v))
                .collect();
            columns.push(PlColumn::new(c.name().into(), values));
        }
        DataFrame::new(columns).map_err(|e| WellheadError::Data(e.to_string()))
    }
}

impl ToDataFrame for FeatureTable {
    fn to_dataframe(&self) -> Result<DataFrame, WellheadError> {
        self.table().to_dataframe()
    }
}

//! Date-indexed, column-oriented tables of `f64` observations.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::{SourceKind, WellheadError};

/// Raw provider tables keyed by provider identity, as handed to the engine.
pub type Sources = BTreeMap<SourceKind, Table>;

/// Marker stored in a cell that carries no observation.
pub const MISSING: f64 = f64::NAN;

/// Returns true if `v` is an undefined cell.
///
/// Infinite values are defined: they arise from IEEE division and carry
/// meaning (e.g. an RSI with zero average loss).
#[inline]
#[must_use]
pub const fn is_missing(v: f64) -> bool {
    v.is_nan()
}

/// A named sequence of observations aligned to a table index.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<f64>,
}

impl Column {
    /// Build a column from a name and its values.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column values, one per index row.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the column has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of cells holding an observation.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| !is_missing(**v)).count()
    }

    /// Split into name and values.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<f64>) {
        (self.name, self.values)
    }
}

/// Ordered columns sharing one calendar-date index.
///
/// Column order is insertion order. A normalized table has a strictly
/// increasing index; see [`Table::normalize`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    index: Vec<NaiveDate>,
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from an index and columns.
    ///
    /// The index need not be sorted; call [`Table::normalize`] before handing
    /// the table to window computations.
    ///
    /// # Errors
    /// - `WellheadError::Data` if a column length differs from the index length.
    /// - `WellheadError::InvalidArg` if two columns share a name.
    pub fn new(index: Vec<NaiveDate>, columns: Vec<Column>) -> Result<Self, WellheadError> {
        let mut table = Self {
            index,
            columns: Vec::with_capacity(columns.len()),
        };
        for c in columns {
            table.push_column(c)?;
        }
        Ok(table)
    }

    /// Build a table from provider timestamps, mapping each instant to its
    /// calendar date in `tz` (UTC when `None`).
    ///
    /// Rows are reordered by instant, so feeds that deliver newest-first end
    /// up chronological. Several timestamps on the same local date are kept as
    /// separate rows until [`Table::normalize`] collapses them to the latest.
    ///
    /// # Errors
    /// Same as [`Table::new`], plus `WellheadError::Data` if the timestamp count
    /// differs from a column length.
    pub fn from_timestamps(
        timestamps: &[DateTime<Utc>],
        columns: Vec<Column>,
        tz: Option<chrono_tz::Tz>,
    ) -> Result<Self, WellheadError> {
        let mut order: Vec<usize> = (0..timestamps.len()).collect();
        order.sort_by_key(|&i| timestamps[i]);

        let index = order
            .iter()
            .map(|&i| {
                let ts = timestamps[i];
                match tz {
                    Some(tz) => ts.with_timezone(&tz).date_naive(),
                    None => ts.date_naive(),
                }
            })
            .collect();

        let mut sorted = Vec::with_capacity(columns.len());
        for c in columns {
            if c.len() != timestamps.len() {
                return Err(WellheadError::Data(format!(
                    "column {} has {} values but {} timestamps were given",
                    c.name,
                    c.len(),
                    timestamps.len()
                )));
            }
            let values = order.iter().map(|&i| c.values[i]).collect();
            sorted.push(Column { name: c.name, values });
        }
        Self::new(index, sorted)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Row dates.
    #[must_use]
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    /// First row date.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.index.first().copied()
    }

    /// Last row date.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.index.last().copied()
    }

    /// Columns in table order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in table order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    /// Look up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// True if a column with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Append a column.
    ///
    /// # Errors
    /// - `WellheadError::Data` if the column length differs from the index length.
    /// - `WellheadError::InvalidArg` if a column with the same name exists.
    pub fn push_column(&mut self, column: Column) -> Result<(), WellheadError> {
        self.check_len(&column)?;
        if self.contains(&column.name) {
            return Err(WellheadError::InvalidArg(format!(
                "duplicate column name: {}",
                column.name
            )));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Insert a column, replacing an existing column of the same name in place.
    ///
    /// # Errors
    /// Returns `WellheadError::Data` if the column length differs from the index length.
    pub fn put_column(&mut self, column: Column) -> Result<(), WellheadError> {
        self.check_len(&column)?;
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(slot) => *slot = column,
            None => self.columns.push(column),
        }
        Ok(())
    }

    fn check_len(&self, column: &Column) -> Result<(), WellheadError> {
        if column.len() == self.index.len() {
            Ok(())
        } else {
            Err(WellheadError::Data(format!(
                "column {} has {} values but the index has {} rows",
                column.name,
                column.len(),
                self.index.len()
            )))
        }
    }

    /// True if the index is strictly increasing.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.index.windows(2).all(|w| w[0] < w[1])
    }

    /// Sort rows by date and collapse rows sharing a date, keeping the latest
    /// observation of each date.
    ///
    /// "Latest" is input order among rows of the same date, so an intraday
    /// feed collapses to its last print of the day.
    #[must_use]
    pub fn normalize(self) -> Self {
        if self.is_normalized() {
            return self;
        }
        let mut order: Vec<usize> = (0..self.index.len()).collect();
        // Stable: equal dates keep input order, so the last one wins below.
        order.sort_by_key(|&i| self.index[i]);

        let mut keep: Vec<usize> = Vec::with_capacity(order.len());
        for i in order {
            let n = keep.len();
            if n > 0 && self.index[keep[n - 1]] == self.index[i] {
                keep[n - 1] = i;
            } else {
                keep.push(i);
            }
        }

        let index = keep.iter().map(|&i| self.index[i]).collect();
        let columns = self
            .columns
            .into_iter()
            .map(|c| Column {
                values: keep.iter().map(|&i| c.values[i]).collect(),
                name: c.name,
            })
            .collect();
        Self { index, columns }
    }

    /// Place every column onto `calendar`, leaving dates absent from this
    /// table undefined.
    ///
    /// Both this table and `calendar` must be strictly increasing; dates of
    /// this table not on the calendar are dropped.
    #[must_use]
    pub fn reindex(&self, calendar: &[NaiveDate]) -> Self {
        let mut rows: Vec<Option<usize>> = Vec::with_capacity(calendar.len());
        let mut j = 0;
        for day in calendar {
            while j < self.index.len() && self.index[j] < *day {
                j += 1;
            }
            rows.push((j < self.index.len() && self.index[j] == *day).then_some(j));
        }
        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                values: rows
                    .iter()
                    .map(|r| r.map_or(MISSING, |i| c.values[i]))
                    .collect(),
            })
            .collect();
        Self {
            index: calendar.to_vec(),
            columns,
        }
    }

    /// Split into index and columns.
    #[must_use]
    pub fn into_parts(self) -> (Vec<NaiveDate>, Vec<Column>) {
        (self.index, self.columns)
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SourceKind;

/// Unified error type for the wellhead workspace.
///
/// Every variant is fatal for the call that produced it: the engine performs
/// no retries and never returns a partially populated table.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WellheadError {
    /// A required provider key is absent from the sources map.
    #[error("missing required source: {kind}")]
    MissingSource {
        /// Provider that was expected.
        kind: SourceKind,
    },

    /// A provider delivered a table with zero rows.
    #[error("source delivered no rows: {kind}")]
    EmptySource {
        /// Provider whose table was empty.
        kind: SourceKind,
    },

    /// A requested column is absent from a table.
    #[error("column '{name}' not found; available columns: {available:?}")]
    ColumnNotFound {
        /// Column that was requested.
        name: String,
        /// Column names present in the table, in table order.
        available: Vec<String>,
    },

    /// A table holds fewer rows than an indicator window requires.
    #[error("insufficient history for {indicator}: need {required} rows, have {available}")]
    InsufficientHistory {
        /// Indicator label, e.g. "WTI_ma200".
        indicator: String,
        /// Rows required by the largest window.
        required: usize,
        /// Rows present in the table.
        available: usize,
    },

    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Malformed table data (length mismatches, unparseable snapshots, etc.).
    #[error("data issue: {0}")]
    Data(String),
}

impl WellheadError {
    /// Helper: build a `ColumnNotFound` error from a name and the available columns.
    pub fn column_not_found<I, S>(name: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ColumnNotFound {
            name: name.into(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    /// Helper: build an `InsufficientHistory` error.
    pub fn insufficient_history(
        indicator: impl Into<String>,
        required: usize,
        available: usize,
    ) -> Self {
        Self::InsufficientHistory {
            indicator: indicator.into(),
            required,
            available,
        }
    }

    /// Returns true if the error signals a mismatch between what a provider
    /// delivered and what the engine expects.
    ///
    /// Schema errors point at the ingestion side; the rest point at the
    /// configuration or the amount of history requested.
    #[must_use]
    pub const fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::MissingSource { .. } | Self::EmptySource { .. } | Self::ColumnNotFound { .. }
        )
    }
}

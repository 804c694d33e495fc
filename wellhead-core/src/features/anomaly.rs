use crate::WellheadError;
use crate::names;
use crate::table::{Column, MISSING, Table, is_missing};
use crate::timeseries::window::{mean, sample_std};
use crate::validate::require_column;

/// Standardize a sequence against its own batch mean and sample stddev.
///
/// `z = (x - mean) / std` with `ddof = 1`, both taken over every defined
/// observation. This is a batch statistic: extending the history changes
/// every past score. Undefined inputs stay undefined, and a sequence with
/// fewer than two observations or zero spread yields all-undefined scores.
#[must_use]
pub fn zscore(values: &[f64]) -> Vec<f64> {
    let (Some(mu), Some(sigma)) = (mean(values), sample_std(values)) else {
        return vec![MISSING; values.len()];
    };
    if sigma == 0.0 {
        return vec![MISSING; values.len()];
    }
    values
        .iter()
        .map(|&v| if is_missing(v) { MISSING } else { (v - mu) / sigma })
        .collect()
}

/// Append `{column}_zscore` computed over the table's full history.
///
/// # Errors
/// Returns `Err(WellheadError::ColumnNotFound)` if `column` is absent.
pub fn add_zscore(mut table: Table, column: &str) -> Result<Table, WellheadError> {
    let z = zscore(require_column(&table, column)?.values());
    table.put_column(Column::new(names::feature(column, names::ZSCORE), z))?;
    Ok(table)
}

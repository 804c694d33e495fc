use crate::WellheadError;
use crate::table::{Column, Table};

/// Ensure `name` is a column of `table` and return it.
///
/// # Errors
/// Returns `Err(WellheadError::ColumnNotFound)` carrying the requested name and
/// every available column name (in table order) if the column is absent.
pub fn require_column<'a>(table: &'a Table, name: &str) -> Result<&'a Column, WellheadError> {
    table
        .column(name)
        .ok_or_else(|| WellheadError::column_not_found(name, table.column_names()))
}

/// Ensure a window or period is non-zero.
///
/// # Errors
/// Returns `Err(WellheadError::InvalidArg)` naming `label` if `value == 0`.
pub fn require_positive(label: &str, value: usize) -> Result<(), WellheadError> {
    if value == 0 {
        return Err(WellheadError::InvalidArg(format!("{label} must be > 0")));
    }
    Ok(())
}

/// Ensure a table has at least `required` rows for `indicator`.
///
/// # Errors
/// Returns `Err(WellheadError::InsufficientHistory)` if `table.len() < required`.
pub fn require_history(table: &Table, indicator: &str, required: usize) -> Result<(), WellheadError> {
    if table.len() < required {
        return Err(WellheadError::insufficient_history(
            indicator,
            required,
            table.len(),
        ));
    }
    Ok(())
}

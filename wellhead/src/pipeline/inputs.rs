use wellhead_core::validate::require_column;
use wellhead_core::{SourceKind, Sources, Table};
use wellhead_types::WellheadError;

/// Check that every required provider is present, then that none is empty.
///
/// # Errors
/// - `MissingSource` for the first required kind absent from `sources`.
/// - `EmptySource` for the first required kind with no rows.
pub(crate) fn check_required(sources: &Sources) -> Result<(), WellheadError> {
    let required = || SourceKind::ALL.into_iter().filter(|k| k.is_required());
    for kind in required() {
        if !sources.contains_key(&kind) {
            return Err(WellheadError::MissingSource { kind });
        }
    }
    for kind in required() {
        if sources.get(&kind).is_some_and(Table::is_empty) {
            return Err(WellheadError::EmptySource { kind });
        }
    }
    Ok(())
}

/// Working copy of a provider table with a normalized index.
///
/// # Errors
/// Returns `MissingSource` if `kind` is absent.
pub(crate) fn working_copy(sources: &Sources, kind: SourceKind) -> Result<Table, WellheadError> {
    sources
        .get(&kind)
        .map(|t| t.clone().normalize())
        .ok_or(WellheadError::MissingSource { kind })
}

/// Resolve the inventory level column: the configured name, or the table's
/// only column.
///
/// # Errors
/// - `ColumnNotFound` if the configured column is absent.
/// - `Data` if no column is configured and the table does not have exactly
///   one column.
pub(crate) fn inventory_column(
    table: &Table,
    configured: Option<&str>,
) -> Result<String, WellheadError> {
    if let Some(name) = configured {
        return Ok(require_column(table, name)?.name().to_string());
    }
    match table.columns() {
        [only] => Ok(only.name().to_string()),
        cols => Err(WellheadError::Data(format!(
            "inventory table has {} columns; configure inventory_column to pick one",
            cols.len()
        ))),
    }
}

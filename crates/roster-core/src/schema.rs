#![deny(unsafe_code)]

use roster_model::{ColumnConfig, RosterTable, SchemaError};

/// Check that every configured column index exists in the table.
///
/// Runs before any filtering; on violation the error carries all offending
/// indices and the table's actual column count.
pub fn validate_schema(table: &RosterTable, columns: &ColumnConfig) -> Result<(), SchemaError> {
    let column_count = table.column_count();
    let indices: Vec<usize> = columns
        .required_indices()
        .into_iter()
        .filter(|&index| index >= column_count)
        .collect();
    if indices.is_empty() {
        Ok(())
    } else {
        Err(SchemaError {
            indices,
            column_count,
        })
    }
}

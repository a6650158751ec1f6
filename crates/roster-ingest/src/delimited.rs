#![deny(unsafe_code)]

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use roster_model::RosterTable;

use crate::error::LoadError;

/// Read a `.csv` file as a roster table.
///
/// The reader runs headerless and flexible: every line is a data row, and
/// short rows are padded to the widest row by the table constructor.
pub fn read_delimited_table(path: &Path) -> Result<RosterTable, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut raw: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        raw.push(record.iter().map(normalize_cell).collect());
    }

    let table = RosterTable::from_cells(raw);
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "csv loaded"
    );
    Ok(table)
}

/// Strip a UTF-8 BOM marker; whitespace is preserved (predicates and the
/// output projection do their own trimming).
fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

#![deny(unsafe_code)]

use std::path::Path;

use tracing::info;

use roster_model::RosterTable;

use crate::delimited::read_delimited_table;
use crate::error::LoadError;
use crate::excel::read_workbook_table;

/// Load a roster file, dispatching on the file extension.
///
/// There is no header-row assumption: every source row, including any
/// header present in the file, is a data row addressed by positional
/// column index.
pub fn load_table(path: &Path) -> Result<RosterTable, LoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let table = match extension.as_deref() {
        Some("xls" | "xlsx") => read_workbook_table(path)?,
        Some("csv") => read_delimited_table(path)?,
        _ => {
            return Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "roster loaded"
    );
    Ok(table)
}

#![deny(unsafe_code)]

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use roster_model::RosterTable;

use crate::error::LoadError;

/// Read the first worksheet of an `.xls`/`.xlsx` workbook as a roster table.
///
/// Every cell is rendered to its text form; empty cells become empty
/// strings. Leading unused rows and columns of the sheet are kept as empty
/// cells so positional indices stay aligned with the sheet layout.
pub fn read_workbook_table(path: &Path) -> Result<RosterTable, LoadError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?
        .map_err(|source| LoadError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

    let (start_row, start_col) = range
        .start()
        .map_or((0, 0), |(row, col)| (row as usize, col as usize));
    let width = start_col + range.width();

    let mut raw: Vec<Vec<String>> = Vec::with_capacity(start_row + range.height());
    for _ in 0..start_row {
        raw.push(vec![String::new(); width]);
    }
    for cells in range.rows() {
        let mut row = vec![String::new(); start_col];
        row.extend(cells.iter().map(cell_to_string));
        raw.push(row);
    }

    let table = RosterTable::from_cells(raw);
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "workbook loaded"
    );
    Ok(table)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(value) => value.clone(),
        Data::Float(value) => render_float(*value),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => render_float(value.as_f64()),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
    }
}

/// Integral floats render without a decimal point so numeric identity
/// columns (DNI) keep their digit-only form.
fn render_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

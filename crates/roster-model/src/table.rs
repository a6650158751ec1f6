#![deny(unsafe_code)]

/// One spreadsheet row: its 0-based position in the source file plus the
/// cell values as text.
///
/// The position is assigned once at load time and is stable across every
/// later transformation; keep-first deduplication depends on it. Cells are
/// never missing: absent values normalize to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterRow {
    pub position: usize,
    pub cells: Vec<String>,
}

impl RosterRow {
    pub fn new(position: usize, cells: Vec<String>) -> Self {
        Self { position, cells }
    }

    /// Cell value at `index`, or the empty string when out of range.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map_or("", String::as_str)
    }
}

/// A rectangular, all-string table of roster rows.
///
/// Every row has exactly `column_count` cells; ragged source rows are padded
/// with empty strings at construction. The table is read once per run and
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterTable {
    column_count: usize,
    rows: Vec<RosterRow>,
}

impl RosterTable {
    /// Build a table from raw rows, tagging each with its 0-based position
    /// and padding every row to the widest row's cell count.
    pub fn from_cells(raw: Vec<Vec<String>>) -> Self {
        let column_count = raw.iter().map(Vec::len).max().unwrap_or(0);
        let rows = raw
            .into_iter()
            .enumerate()
            .map(|(position, mut cells)| {
                cells.resize(column_count, String::new());
                RosterRow::new(position, cells)
            })
            .collect();
        Self { column_count, rows }
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[RosterRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cells_pads_ragged_rows() {
        let table = RosterTable::from_cells(vec![
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["d".to_string()],
        ]);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.rows()[1].cells, vec!["d", "", ""]);
    }

    #[test]
    fn positions_follow_source_order() {
        let table = RosterTable::from_cells(vec![vec!["x".to_string()], vec!["y".to_string()]]);
        assert_eq!(table.rows()[0].position, 0);
        assert_eq!(table.rows()[1].position, 1);
    }

    #[test]
    fn cell_out_of_range_is_empty() {
        let row = RosterRow::new(0, vec!["only".to_string()]);
        assert_eq!(row.cell(0), "only");
        assert_eq!(row.cell(5), "");
    }
}

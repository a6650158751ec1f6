//! Integration tests for the file loaders.

use std::fs;
use std::path::PathBuf;

use roster_ingest::{LoadError, load_table, read_delimited_table};

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn csv_rows_are_position_tagged_and_padded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(
        &dir,
        "roster.csv",
        "id,Alumne,extra\n1,alumne\n2,professor,x\n",
    );

    let table = read_delimited_table(&path).expect("load csv");
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.column_count(), 3);
    // The header line is just another data row.
    assert_eq!(table.rows()[0].cell(1), "Alumne");
    assert_eq!(table.rows()[0].position, 0);
    // Short rows pad with empty cells.
    assert_eq!(table.rows()[1].cell(2), "");
    assert_eq!(table.rows()[2].position, 2);
}

#[test]
fn csv_preserves_cell_whitespace() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "roster.csv", "a, alumne ,b\n");

    let table = read_delimited_table(&path).expect("load csv");
    assert_eq!(table.rows()[0].cell(1), " alumne ");
}

#[test]
fn csv_strips_leading_bom() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "roster.csv", "\u{feff}x,y\n1,2\n");

    let table = read_delimited_table(&path).expect("load csv");
    assert_eq!(table.rows()[0].cell(0), "x");
}

#[test]
fn quoted_cells_keep_embedded_separators() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "roster.csv", "\"Puig, Anna\",G1A\n");

    let table = read_delimited_table(&path).expect("load csv");
    assert_eq!(table.rows()[0].cell(0), "Puig, Anna");
}

#[test]
fn load_table_dispatches_on_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = write_fixture(&dir, "roster.csv", "a,b\n");
    assert!(load_table(&csv_path).is_ok());

    let odd_path = write_fixture(&dir, "roster.ods", "a,b\n");
    let error = load_table(&odd_path).expect_err("ods must be rejected");
    assert!(matches!(error, LoadError::UnsupportedFormat { .. }));

    let bare_path = write_fixture(&dir, "roster", "a,b\n");
    let error = load_table(&bare_path).expect_err("extensionless must be rejected");
    assert!(matches!(error, LoadError::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.csv");
    let error = load_table(&path).expect_err("missing file must fail");
    assert!(matches!(error, LoadError::Csv { .. }));
}

#[test]
fn workbook_parse_failure_is_a_load_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Not a zip container, so the xlsx reader must reject it.
    let path = write_fixture(&dir, "roster.xlsx", "definitely not a workbook");
    let error = load_table(&path).expect_err("bogus xlsx must fail");
    assert!(matches!(error, LoadError::Workbook { .. }));
}

#[test]
fn empty_csv_yields_empty_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "roster.csv", "");

    let table = read_delimited_table(&path).expect("load csv");
    assert!(table.is_empty());
    assert_eq!(table.column_count(), 0);
}

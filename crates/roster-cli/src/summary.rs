use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_model::{ColumnConfig, RosterTable, SecondaryOutcome};

use crate::types::SplitResult;

/// Rows shown in the input preview.
const PREVIEW_ROWS: usize = 5;

/// Print the load caption and a preview of the configured columns for the
/// first rows, before schema validation runs.
pub fn print_preview(table: &RosterTable, columns: &ColumnConfig) {
    println!(
        "Loaded roster: {} rows x {} columns",
        table.row_count(),
        table.column_count()
    );
    if table.is_empty() {
        return;
    }
    let mut preview = Table::new();
    preview.set_header(vec![
        header_cell("Row"),
        header_cell("Student flag"),
        header_cell("Group"),
        header_cell("Given name"),
        header_cell("Surname 1"),
        header_cell("Surname 2"),
        header_cell("DNI"),
        header_cell("Email"),
    ]);
    apply_table_style(&mut preview);
    for row in table.rows().iter().take(PREVIEW_ROWS) {
        preview.add_row(vec![
            Cell::new(row.position).fg(Color::DarkGrey),
            Cell::new(row.cell(columns.student_flag)),
            Cell::new(row.cell(columns.group)),
            Cell::new(row.cell(columns.given_name)),
            Cell::new(row.cell(columns.surname1)),
            Cell::new(row.cell(columns.surname2)),
            Cell::new(row.cell(columns.national_id)),
            Cell::new(row.cell(columns.email)),
        ]);
    }
    println!("{preview}");
}

pub fn print_summary(result: &SplitResult) {
    println!(
        "Source: {} ({} rows x {} columns)",
        result.source.display(),
        result.rows,
        result.columns
    );
    if let Some(path) = &result.principal_path {
        println!(
            "List 1 (valid group): {} ({} students)",
            path.display(),
            result.principal.len()
        );
    }
    if let Some(path) = &result.secondary_path {
        println!(
            "List 2 (no valid group): {} ({} students)",
            path.display(),
            result.secondary.len()
        );
    }

    let summary = &result.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows loaded"), Cell::new(summary.total_rows)]);
    table.add_row(vec![
        Cell::new("Student flag matches"),
        count_cell(summary.student_rows),
    ]);
    table.add_row(vec![
        Cell::new("Valid group matches"),
        count_cell(summary.valid_group_rows),
    ]);
    table.add_row(vec![
        Cell::new("(1) Student + valid group"),
        count_cell(summary.principal_candidates),
    ]);
    table.add_row(vec![
        Cell::new("(1) After dedup (first occurrence)"),
        emphasis_cell(summary.principal_rows),
    ]);
    table.add_row(vec![
        Cell::new("(2) Student, no valid group"),
        count_cell(summary.secondary_candidates),
    ]);
    table.add_row(vec![
        Cell::new("(2) After excluding list 1"),
        count_cell(summary.secondary_after_exclusion),
    ]);
    table.add_row(vec![
        Cell::new("(2) After dedup (first occurrence)"),
        emphasis_cell(summary.secondary_rows),
    ]);
    println!("{table}");

    if summary.principal_candidates == 0 {
        eprintln!("warning: no rows matched student + valid group; list 1 is empty");
    }
    match summary.secondary_outcome() {
        SecondaryOutcome::NoCandidates => {
            println!("Note: no student rows without a valid group; list 2 is empty.");
        }
        SecondaryOutcome::AllExcluded => {
            println!(
                "Note: every student without a valid group already appears in list 1; \
                 list 2 is empty."
            );
        }
        SecondaryOutcome::Listed => {}
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize) -> Cell {
    if value == 0 {
        Cell::new(value).fg(Color::DarkGrey)
    } else {
        Cell::new(value)
    }
}

fn emphasis_cell(value: usize) -> Cell {
    if value == 0 {
        Cell::new(value).fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value).fg(Color::Green).add_attribute(Attribute::Bold)
    }
}

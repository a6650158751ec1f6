use anyhow::Result;
use comfy_table::Table;
use tracing::{info_span, warn};

use roster_cli::pipeline::{default_output_dir, load, split, write_outputs, write_summary_json};
use roster_model::{ColumnConfig, GroupCodeSet};

use crate::cli::SplitArgs;
use crate::summary::{apply_table_style, print_preview};
use crate::types::SplitResult;

pub fn run_groups() -> Result<()> {
    let groups = GroupCodeSet::default();
    let mut table = Table::new();
    table.set_header(vec!["Group code"]);
    apply_table_style(&mut table);
    for code in groups.iter() {
        table.add_row(vec![code]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_split(args: &SplitArgs) -> Result<SplitResult> {
    let split_span = info_span!("split", roster_file = %args.roster_file.display());
    let _split_guard = split_span.enter();

    let columns = ColumnConfig::default();
    let groups = GroupCodeSet::default();

    let table = load(&args.roster_file)?;
    print_preview(&table, &columns);

    let result = split(&table, &columns, &groups)?;
    if result.summary.principal_rows == 0 {
        warn!("principal list is empty");
    }

    let (principal_path, secondary_path) = if args.dry_run {
        (None, None)
    } else {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&args.roster_file));
        let (principal_path, secondary_path) = write_outputs(&output_dir, &result)?;
        (Some(principal_path), Some(secondary_path))
    };

    if let Some(path) = &args.summary_json {
        write_summary_json(path, &result.summary)?;
    }

    Ok(SplitResult {
        source: args.roster_file.clone(),
        rows: table.row_count(),
        columns: table.column_count(),
        principal: result.principal,
        secondary: result.secondary,
        summary: result.summary,
        principal_path,
        secondary_path,
    })
}

//! Roster processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: Read the roster file into an all-string table
//! 2. **Partition**: Validate the schema, classify rows, build both lists
//! 3. **Output**: Write the two CSV artifacts (skipped on dry runs)
//!
//! Each stage takes the output of the previous stage and returns typed
//! results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use roster_core::{PartitionResult, partition};
use roster_ingest::load_table;
use roster_model::{ColumnConfig, GroupCodeSet, PartitionSummary, RosterTable};
use roster_report::write_list_outputs;

/// Load the roster file into a table.
pub fn load(roster_file: &Path) -> Result<RosterTable> {
    let load_span = info_span!("load", path = %roster_file.display());
    let _load_guard = load_span.enter();
    let load_start = Instant::now();
    let table = load_table(roster_file)
        .with_context(|| format!("load {}", roster_file.display()))?;
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );
    Ok(table)
}

/// Validate the schema and split the table into the two lists.
pub fn split(
    table: &RosterTable,
    columns: &ColumnConfig,
    groups: &GroupCodeSet,
) -> Result<PartitionResult> {
    let split_span = info_span!("partition");
    let _split_guard = split_span.enter();
    let split_start = Instant::now();
    let result = partition(table, columns, groups)?;
    info!(
        principal_rows = result.summary.principal_rows,
        secondary_rows = result.summary.secondary_rows,
        duration_ms = split_start.elapsed().as_millis(),
        "partition complete"
    );
    Ok(result)
}

/// Write both list artifacts and return their paths.
pub fn write_outputs(output_dir: &Path, result: &PartitionResult) -> Result<(PathBuf, PathBuf)> {
    let output_span = info_span!("output", output_dir = %output_dir.display());
    let _output_guard = output_span.enter();
    let output_start = Instant::now();
    let paths = write_list_outputs(output_dir, &result.principal, &result.secondary)
        .context("write list outputs")?;
    info!(
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );
    Ok(paths)
}

/// Write the partition summary as JSON for machine consumption.
pub fn write_summary_json(path: &Path, summary: &PartitionSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("serialize summary")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Default output directory: next to the input file.
pub fn default_output_dir(roster_file: &Path) -> PathBuf {
    roster_file
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

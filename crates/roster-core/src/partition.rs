#![deny(unsafe_code)]

use std::collections::BTreeSet;

use tracing::{debug, info};

use roster_model::{
    ColumnConfig, GroupCodeSet, PartitionSummary, RosterRecord, RosterTable, SchemaError,
};

use crate::classify::classify;
use crate::dedupe::dedupe_first_occurrence;
use crate::identity::student_key;
use crate::schema::validate_schema;

/// The two deduplicated output lists plus the per-stage counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionResult {
    /// Students with a valid group, first occurrence per identity.
    pub principal: Vec<RosterRecord>,
    /// Students without a valid group, excluding principal identities.
    pub secondary: Vec<RosterRecord>,
    pub summary: PartitionSummary,
}

/// Split the roster into the principal and secondary lists.
///
/// Validates the schema, classifies every row, then builds:
/// 1. the principal list (student AND valid group, deduplicated),
/// 2. the exclusion set of principal identity keys,
/// 3. the secondary list (student AND no valid group, minus excluded
///    identities, deduplicated).
///
/// Empty lists are ordinary outcomes; the only failure is a schema
/// violation.
pub fn partition(
    table: &RosterTable,
    columns: &ColumnConfig,
    groups: &GroupCodeSet,
) -> Result<PartitionResult, SchemaError> {
    validate_schema(table, columns)?;

    let classification = classify(table, columns, groups);
    debug!(
        total_rows = table.row_count(),
        student_rows = classification.student_count(),
        valid_group_rows = classification.valid_group_count(),
        "classification complete"
    );

    let principal_candidates: Vec<RosterRecord> = table
        .rows()
        .iter()
        .enumerate()
        .filter(|&(idx, _)| classification.is_student[idx] && classification.has_valid_group[idx])
        .map(|(_, row)| RosterRecord::project(row, columns))
        .collect();
    let principal = dedupe_first_occurrence(principal_candidates);

    let exclude_keys: BTreeSet<String> = principal.iter().map(student_key).collect();

    let secondary_candidates: Vec<RosterRecord> = table
        .rows()
        .iter()
        .enumerate()
        .filter(|&(idx, _)| {
            classification.is_student[idx] && !classification.has_valid_group[idx]
        })
        .map(|(_, row)| RosterRecord::project(row, columns))
        .collect();
    let retained: Vec<RosterRecord> = secondary_candidates
        .into_iter()
        .filter(|record| !exclude_keys.contains(&student_key(record)))
        .collect();
    let retained_count = retained.len();
    let secondary = dedupe_first_occurrence(retained);

    let summary = PartitionSummary {
        total_rows: table.row_count(),
        student_rows: classification.student_count(),
        valid_group_rows: classification.valid_group_count(),
        principal_candidates: classification.principal_count(),
        principal_rows: principal.len(),
        secondary_candidates: classification.secondary_count(),
        secondary_after_exclusion: retained_count,
        secondary_rows: secondary.len(),
    };
    info!(
        principal_rows = summary.principal_rows,
        secondary_rows = summary.secondary_rows,
        excluded = summary.secondary_candidates - summary.secondary_after_exclusion,
        "partition complete"
    );

    Ok(PartitionResult {
        principal,
        secondary,
        summary,
    })
}

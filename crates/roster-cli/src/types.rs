use std::path::PathBuf;

use roster_model::{PartitionSummary, RosterRecord};

#[derive(Debug)]
pub struct SplitResult {
    pub source: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub principal: Vec<RosterRecord>,
    pub secondary: Vec<RosterRecord>,
    pub summary: PartitionSummary,
    pub principal_path: Option<PathBuf>,
    pub secondary_path: Option<PathBuf>,
}

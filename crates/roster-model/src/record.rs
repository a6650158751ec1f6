#![deny(unsafe_code)]

use crate::config::ColumnConfig;
use crate::table::RosterRow;

/// Projection of a roster row onto the student output fields.
///
/// All values are trimmed of surrounding whitespace at projection time. The
/// verification field is blank and reserved for manual annotation after
/// download. `position` is the source row's original index; it drives stable
/// ordering and is never exported.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterRecord {
    pub given_name: String,
    pub surname1: String,
    pub surname2: String,
    pub dni: String,
    pub email: String,
    pub group: String,
    pub verification: String,
    #[serde(skip)]
    pub position: usize,
}

impl RosterRecord {
    /// Project `row` onto the output fields named by `columns`.
    pub fn project(row: &RosterRow, columns: &ColumnConfig) -> Self {
        Self {
            given_name: row.cell(columns.given_name).trim().to_string(),
            surname1: row.cell(columns.surname1).trim().to_string(),
            surname2: row.cell(columns.surname2).trim().to_string(),
            dni: row.cell(columns.national_id).trim().to_string(),
            email: row.cell(columns.email).trim().to_string(),
            group: row.cell(columns.group).trim().to_string(),
            verification: String::new(),
            position: row.position,
        }
    }
}

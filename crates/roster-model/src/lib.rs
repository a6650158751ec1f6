//! Data model for the roster splitter.
//!
//! Everything here is plain data: the all-string table loaded from a
//! spreadsheet, the positional column configuration, the valid group code
//! set, the projected output records, and the per-stage count summary. The
//! pipeline logic lives in `roster-core`.

pub mod config;
pub mod error;
pub mod record;
pub mod summary;
pub mod table;

pub use config::{ColumnConfig, GroupCodeSet};
pub use error::SchemaError;
pub use record::RosterRecord;
pub use summary::{PartitionSummary, SecondaryOutcome};
pub use table::{RosterRow, RosterTable};

//! Roster classification, deduplication and partitioning.
//!
//! Single-pass pipeline over one in-memory table: schema validation, the
//! two row predicates, identity key derivation, keep-first deduplication,
//! and the set partition that produces the principal and secondary lists.
//! Everything here is pure and synchronous; loading and output writing
//! live in their own crates.

pub mod classify;
pub mod dedupe;
pub mod identity;
pub mod partition;
pub mod schema;

pub use classify::{Classification, classify, has_valid_group, is_student_flag};
pub use dedupe::dedupe_first_occurrence;
pub use identity::student_key;
pub use partition::{PartitionResult, partition};
pub use schema::validate_schema;

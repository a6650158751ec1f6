#![deny(unsafe_code)]

/// A configured column index falls outside the loaded table.
///
/// Fatal: the run halts before any filtering. The message enumerates every
/// offending index together with the table's actual column bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "column indices out of range: {indices:?}; the file has {column_count} columns (0..{bound})",
    bound = .column_count.saturating_sub(1)
)]
pub struct SchemaError {
    /// Offending configured indices, in semantic field order.
    pub indices: Vec<usize>,
    /// Actual column count of the loaded table.
    pub column_count: usize,
}

#![deny(unsafe_code)]

use std::path::PathBuf;

/// The input file could not be parsed as a table in a supported format.
///
/// Fatal: the run halts before schema validation.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("workbook {path} has no worksheets")]
    EmptyWorkbook { path: PathBuf },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("unsupported file format: {path} (expected .xls, .xlsx or .csv)")]
    UnsupportedFormat { path: PathBuf },
}

//! Output artifacts for the roster splitter.
//!
//! Both lists download as UTF-8 CSV with a fixed Catalan header row; the
//! file names match the reference deployment so existing operator habits
//! keep working.

pub mod csv_out;

pub use csv_out::{
    OUTPUT_HEADERS, PRINCIPAL_FILE_NAME, SECONDARY_FILE_NAME, render_roster_csv,
    write_list_outputs, write_roster_csv,
};

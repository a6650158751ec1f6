//! CLI argument definitions for the roster splitter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster-split",
    version,
    about = "Split a roster spreadsheet into valid-group and no-valid-group student lists",
    long_about = "Split a roster spreadsheet into two deduplicated student lists.\n\n\
                  List 1 holds students assigned to a valid group; list 2 holds\n\
                  students without a valid group, excluding anyone already in list 1.\n\
                  Supports .xls, .xlsx and .csv inputs addressed by fixed column indices."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a roster file into the two student lists.
    Split(SplitArgs),

    /// List the valid group codes.
    Groups,
}

#[derive(Parser)]
pub struct SplitArgs {
    /// Path to the roster file (.xls, .xlsx or .csv).
    #[arg(value_name = "ROSTER_FILE")]
    pub roster_file: PathBuf,

    /// Output directory for the two CSV lists (default: next to the input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Classify and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write the partition summary as JSON to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

//! CLI argument definitions for leadclean.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "leadclean",
    version,
    about = "Clean, deduplicate, and distribute customer contact sheets",
    long_about = "Normalize contact sheets (names, phone numbers, emails, registration dates).\n\n\
                  Drops duplicate rows within the batch and against a reference dataset,\n\
                  then spreads the surviving rows across TV and CS staff."
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

    /// Allow row-level contact values (names, phones, emails) in logs.
    ///
    /// Off by default: row values are personal data and are replaced by a
    /// redaction token unless this flag is given.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a contact sheet: normalize, deduplicate, filter, assign.
    Clean(CleanArgs),

    /// Distribute an item count across staff in balanced blocks.
    Distribute(DistributeArgs),

    /// List the bundled country calling-code table.
    Countries,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the new-batch CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Reference ("master") CSV with SĐT and Email columns; rows already
    /// present there are dropped from the batch.
    #[arg(long = "reference", value_name = "PATH")]
    pub reference: Option<PathBuf>,

    /// Comma-separated TV staff names.
    #[arg(long = "advisors", value_name = "NAMES", default_value = "")]
    pub advisors: String,

    /// Comma-separated CS staff names.
    #[arg(long = "care", value_name = "NAMES", default_value = "")]
    pub care: String,

    /// Start of the registration-date window, DD/MM/YYYY (inclusive).
    #[arg(long = "from", value_name = "DATE", requires = "to")]
    pub from: Option<String>,

    /// End of the registration-date window, DD/MM/YYYY (inclusive).
    #[arg(long = "to", value_name = "DATE", requires = "from")]
    pub to: Option<String>,

    /// Output directory for generated sheets (default: <INPUT dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Process and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Column offset of the sequence number.
    #[arg(long = "col-seq", value_name = "INDEX", default_value_t = 0)]
    pub col_seq: usize,

    /// Column offset of the registration date.
    #[arg(long = "col-date", value_name = "INDEX", default_value_t = 1)]
    pub col_date: usize,

    /// Column offset of the contact name.
    #[arg(long = "col-name", value_name = "INDEX", default_value_t = 2)]
    pub col_name: usize,

    /// Column offset of the phone number.
    #[arg(long = "col-phone", value_name = "INDEX", default_value_t = 3)]
    pub col_phone: usize,

    /// Column offset of the email address.
    #[arg(long = "col-email", value_name = "INDEX", default_value_t = 4)]
    pub col_email: usize,
}

#[derive(Parser)]
pub struct DistributeArgs {
    /// Number of items to distribute.
    #[arg(long = "count", value_name = "N")]
    pub count: usize,

    /// Comma-separated staff names.
    #[arg(long = "names", value_name = "NAMES")]
    pub names: String,

    /// Write the full STT,Staff sheet to this path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
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

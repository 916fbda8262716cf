//! CLI argument definitions for the inventory cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "inv-clean",
    version,
    about = "Clean and normalize IT inventory records",
    long_about = "Validate and normalize IT inventory records (IP, hostname, FQDN, MAC,\n\
                  owner, device type, site) into a canonical CSV table plus a JSON\n\
                  anomaly log."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Clean an inventory CSV and write the clean table and anomaly log.
    Clean(CleanArgs),

    /// Print the lookup tables in effect.
    Tables(TablesArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Raw inventory CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory (default: the input file's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML file overriding the built-in lookup tables.
    #[arg(long = "tables", value_name = "FILE")]
    pub tables: Option<PathBuf>,

    /// Process and summarize without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with status 1 when any error-severity anomaly is recorded.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct TablesArgs {
    /// TOML file overriding the built-in lookup tables.
    #[arg(long = "tables", value_name = "FILE")]
    pub tables: Option<PathBuf>,
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

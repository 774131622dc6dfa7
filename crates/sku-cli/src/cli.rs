//! CLI argument definitions for the SKU generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "skugen",
    version,
    about = "SKU generator - derive and validate composite SKU codes",
    long_about = "Derive composite SKU codes from per-row specification selections.\n\n\
                  Migrates a Specification/Value/SKU Code catalog table, recalculates\n\
                  every data sheet's code column, and reports missing values and\n\
                  duplicate SKUs."
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
    /// Recalculate and validate every data sheet in a folder.
    Check(CheckArgs),

    /// Migrate a catalog table and print the resulting specifications.
    Catalog(CatalogArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Folder containing catalog.csv and data-sheet CSV files.
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Catalog table path (default: <FOLDER>/catalog.csv).
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Delimiter placed between SKU fragments.
    #[arg(long = "delimiter", default_value = "-")]
    pub delimiter: String,

    /// Prefix prepended to every non-empty SKU.
    #[arg(long = "prefix", default_value = "")]
    pub prefix: String,

    /// Suffix appended to every non-empty SKU.
    #[arg(long = "suffix", default_value = "")]
    pub suffix: String,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Catalog table path (Specification, Value, SKU Code columns).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

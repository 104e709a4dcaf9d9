//! CLI argument definitions for the XPT inspector.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "xptview",
    version,
    about = "Inspect SAS XPORT transport files",
    long_about = "Inspect the contents of SAS XPORT transport files (.xpt/.xport):\n\
                  the datasets they contain, each dataset's variable schema, and a\n\
                  preview of its observation rows."
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

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show datasets, schemas, and a row preview.
    Inspect(InspectArgs),

    /// Emit the decoded file as a JSON payload on stdout.
    Dump(DumpArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the transport file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Show only the named dataset.
    #[arg(long = "dataset", value_name = "NAME")]
    pub dataset: Option<String>,

    /// Maximum preview rows to render per dataset.
    ///
    /// The decoder materializes at most 100 rows per dataset; values above
    /// that render everything available.
    #[arg(long = "rows", value_name = "N", default_value_t = 10)]
    pub rows: usize,

    /// Show variable schemas only, without row previews.
    #[arg(long = "schema-only")]
    pub schema_only: bool,
}

#[derive(Parser)]
pub struct DumpArgs {
    /// Path to the transport file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

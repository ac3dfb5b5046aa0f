//! CLI argument definitions for the SEO response validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use seo_model::QueryKind;

#[derive(Parser)]
#[command(
    name = "seo-validator",
    version,
    about = "Validate SEO data provider responses",
    long_about = "Validate raw keyword-research responses from the SEO data provider.\n\n\
                  Checks envelope structure and task status, extracts the normalized\n\
                  payload per query kind, and reports errors and warnings."
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

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a single provider response.
    Check(CheckArgs),

    /// Validate an overview bundle (one response per query kind).
    Overview(OverviewArgs),

    /// List the supported query kinds.
    Kinds,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Query kind the response belongs to (searchVolume, difficulty,
    /// trends, demographics, relatedKeywords; kebab and snake case work too).
    #[arg(long = "kind")]
    pub kind: QueryKind,

    /// Path to the raw response JSON ("-" for stdin).
    #[arg(value_name = "RESPONSE")]
    pub response: PathBuf,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Parser)]
pub struct OverviewArgs {
    /// Path to the bundle JSON ("-" for stdin).
    ///
    /// The bundle is an object with optional keys searchVolume, difficulty,
    /// trends, demographics and related, each holding a raw response.
    #[arg(value_name = "BUNDLE")]
    pub bundle: PathBuf,

    /// Keyword label (overrides the bundle's "keyword" field).
    #[arg(long = "keyword")]
    pub keyword: Option<String>,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
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

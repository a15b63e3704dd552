//! CLI argument definitions for BoardMedic.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "boardmedic",
    version,
    about = "BoardMedic - symptom-driven electronics repair assistant",
    long_about = "Diagnose board failures from observed symptoms and manage the\n\
                  repair case history: similarity search, success-rate analytics,\n\
                  and shareable case packages."
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
    /// Diagnose a board from a JSON symptom file.
    Diagnose(DiagnoseArgs),

    /// Find historical cases similar to a new symptom set.
    Similar(SimilarArgs),

    /// Show success-rate and failure analytics over a casebank.
    Stats(StatsArgs),

    /// List failure patterns and their knowledge coverage.
    Patterns,

    /// Bundle cases from a casebank into a shareable package.
    Package(PackageArgs),

    /// Import a shared case package into a casebank.
    ImportPackage(ImportPackageArgs),
}

#[derive(Parser)]
pub struct DiagnoseArgs {
    /// Path to a JSON array of symptoms.
    #[arg(value_name = "SYMPTOMS_FILE")]
    pub symptoms_file: PathBuf,

    /// Board type under repair (used for case records and similarity).
    #[arg(long = "board-type", default_value = "unknown")]
    pub board_type: String,

    /// Optional board identifier recorded on the case.
    #[arg(long = "board-id")]
    pub board_id: Option<String>,

    /// Casebank file to record the diagnosis into (created if absent).
    #[arg(long = "casebank", value_name = "FILE")]
    pub casebank: Option<PathBuf>,

    /// Print the raw diagnostic result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SimilarArgs {
    /// Path to a JSON array of symptoms.
    #[arg(value_name = "SYMPTOMS_FILE")]
    pub symptoms_file: PathBuf,

    /// Casebank file holding the history to search.
    #[arg(long = "casebank", value_name = "FILE")]
    pub casebank: PathBuf,

    /// Board type to match against.
    #[arg(long = "board-type")]
    pub board_type: String,

    /// Maximum number of matches to surface.
    #[arg(long = "limit", default_value_t = 5)]
    pub limit: usize,

    /// Print matches as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Casebank file to analyze.
    #[arg(long = "casebank", value_name = "FILE")]
    pub casebank: PathBuf,
}

#[derive(Parser)]
pub struct PackageArgs {
    /// Casebank file to bundle cases from.
    #[arg(long = "casebank", value_name = "FILE")]
    pub casebank: PathBuf,

    /// Output path for the package JSON.
    #[arg(long = "out", value_name = "FILE")]
    pub out: PathBuf,

    /// Case ids to include (default: every case in the bank).
    #[arg(long = "case", value_name = "CASE_ID")]
    pub cases: Vec<String>,

    /// Package author recorded in the metadata.
    #[arg(long = "author")]
    pub author: Option<String>,

    /// Free-form package description.
    #[arg(long = "description")]
    pub description: Option<String>,
}

#[derive(Parser)]
pub struct ImportPackageArgs {
    /// Path to the package JSON.
    #[arg(value_name = "PACKAGE_FILE")]
    pub package_file: PathBuf,

    /// Casebank file to import into (created if absent).
    #[arg(long = "casebank", value_name = "FILE")]
    pub casebank: PathBuf,
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

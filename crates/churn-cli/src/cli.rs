//! CLI argument definitions for churn-prep.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use churn_report::ReportFormat;

#[derive(Parser)]
#[command(
    name = "churn-prep",
    version,
    about = "Churn data preparation - clean and encode customer tables for modeling",
    long_about = "Clean and encode a customer churn table into a model-ready table.\n\n\
                  Coerces charges to numbers, drops unusable rows and the identifier,\n\
                  maps Yes/No columns to 1/0 and one-hot encodes categorical columns."
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
    /// Clean a raw churn table and write the model-ready table.
    Clean(CleanArgs),

    /// Summarise a raw churn table (churn distribution, charges and tenure by churn).
    Describe(DescribeArgs),

    /// List the cleaning steps that `clean` would run.
    Plan(PlanArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the raw delimited customer table.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path for the cleaned table (default: cleaned_telco_churn.csv next to INPUT).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON file overriding column names and token mappings.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also write the cleaning report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Report format (default: json for a .json path, otherwise text).
    #[arg(long = "report-format", value_enum, requires = "report")]
    pub report_format: Option<ReportFormatArg>,

    /// Field delimiter for both input and output.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,
}

#[derive(Parser)]
pub struct DescribeArgs {
    /// Path to the raw delimited customer table.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON file overriding column names.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Field delimiter.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// Print the summary as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PlanArgs {
    /// JSON file overriding column names and token mappings.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the plan as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI report format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Json,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(value: ReportFormatArg) -> Self {
        match value {
            ReportFormatArg::Text => Self::Text,
            ReportFormatArg::Json => Self::Json,
        }
    }
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

//! Command-line argument definitions - Cli, Command, and argument structs

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Estimar: Sprint-History Effort Estimation
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "estimar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(
    about = "Learn per-developer effort formulas from sprint history and predict planned hours"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Fit formulas from a sprint history CSV and write the trained table
    Train(TrainArgs),

    /// Predict planned hours from a trained table
    Predict(PredictArgs),

    /// Validate a sprint history CSV without training
    Validate(ValidateArgs),

    /// Display information about a trained table
    Info(InfoArgs),
}

/// Arguments for the train command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TrainArgs {
    /// Path to the sprint history CSV file
    #[arg(value_name = "HISTORY")]
    pub history: PathBuf,

    /// Output path for the trained table
    #[arg(short, long, default_value = "trained.csv")]
    pub output: PathBuf,

    /// Dry run (validate and report coverage but don't write)
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the predict command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PredictArgs {
    /// Path to the trained table CSV file
    #[arg(value_name = "TRAINED", default_value = "trained.csv")]
    pub trained: PathBuf,

    /// Output path for the prediction table
    #[arg(short, long, default_value = "prediction.csv")]
    pub output: PathBuf,

    /// Output path for the text report
    #[arg(short, long, default_value = "report.txt")]
    pub report: PathBuf,

    /// Monthly availability per developer, as name=hours pairs
    #[arg(long, value_name = "NAME=HOURS", value_delimiter = ',')]
    pub available_hours: Vec<String>,

    /// Hourly rate per developer, as name=rate pairs
    #[arg(long, value_name = "NAME=RATE", value_delimiter = ',')]
    pub hourly_rates: Vec<String>,

    /// Collect availability and rates by prompting per developer
    #[arg(long, conflicts_with_all = ["available_hours", "hourly_rates"])]
    pub interactive: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to the sprint history CSV file
    #[arg(value_name = "HISTORY")]
    pub history: PathBuf,

    /// Show per-group coverage details
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to the trained table CSV file
    #[arg(value_name = "TRAINED", default_value = "trained.csv")]
    pub trained: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for the info command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

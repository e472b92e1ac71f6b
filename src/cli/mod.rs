//! CLI module for estimar
//!
//! This module contains all CLI command handlers and utilities.

mod args;
mod commands;
mod logging;
mod prompt;

pub use args::{
    parse_args, Cli, Command, InfoArgs, OutputFormat, PredictArgs, TrainArgs, ValidateArgs,
};
pub use commands::run_command;
pub use logging::LogLevel;
pub use prompt::prompt_float;

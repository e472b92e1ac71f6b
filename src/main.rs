//! Estimar CLI
//!
//! Sprint-history effort estimation entry point.
//!
//! # Usage
//!
//! ```bash
//! # Fit formulas from historical sprint data
//! estimar train sprints.csv --output trained.csv
//!
//! # Predict planned hours from the trained table
//! estimar predict trained.csv --output prediction.csv --report report.txt
//!
//! # Predict with duration/cost roll-ups
//! estimar predict trained.csv --available-hours alice=160,bob=120 --hourly-rates alice=70
//!
//! # Validate a history file
//! estimar validate sprints.csv --detailed
//!
//! # Inspect a trained table
//! estimar info trained.csv --format json
//! ```

use clap::Parser;
use estimar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

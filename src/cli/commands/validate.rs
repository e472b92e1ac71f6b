//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, ValidateArgs};
use crate::io::read_history;
use crate::regression::MIN_SAMPLES;

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let history = read_history(&args.history).map_err(|e| format!("History error: {e}"))?;

    let developers = history.developers();
    let categories = history.categories();
    let trainable = developers
        .iter()
        .flat_map(|d| categories.iter().map(move |c| (d, c)))
        .filter(|(d, c)| history.samples(d, c).len() >= MIN_SAMPLES)
        .count();

    log(
        level,
        LogLevel::Normal,
        &format!(
            "{}: {} records, {} developers, {} categories, {trainable} trainable pair(s)",
            args.history.display(),
            history.len(),
            developers.len(),
            categories.len()
        ),
    );

    if args.detailed {
        for developer in &developers {
            for category in &categories {
                let samples = history.samples(developer, category).len();
                let status = if samples >= MIN_SAMPLES { "ok" } else { "sparse" };
                log(
                    level,
                    LogLevel::Normal,
                    &format!("  {developer}/{category}: {samples} sample(s) [{status}]"),
                );
            }
        }
    }

    Ok(())
}

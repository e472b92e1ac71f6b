//! Predict command implementation

use std::collections::HashMap;
use std::io::BufRead;

use crate::cli::logging::log;
use crate::cli::prompt::prompt_float;
use crate::cli::{LogLevel, PredictArgs};
use crate::io::{read_model_table, write_prediction, write_report, ReportSummary};
use crate::model::ModelTable;
use crate::predict::{duration_months, predict, total_cost, Prediction};

pub fn run_predict(args: PredictArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Estimar: Predicting from {}", args.trained.display()),
    );

    let table = read_model_table(&args.trained).map_err(|e| format!("Trained table error: {e}"))?;
    let prediction = predict(&table);

    // Per-cell parse failures degrade to empty cells; surface every one.
    for skip in &prediction.skipped {
        eprintln!(
            "Warning: skipping {}/{}: cannot parse formula {:?}: {}",
            skip.employee, skip.category, skip.cell, skip.error
        );
    }

    write_prediction(&args.output, &table.categories, &prediction)
        .map_err(|e| format!("Write error: {e}"))?;
    log(
        level,
        LogLevel::Normal,
        &format!("Predictions saved in '{}'", args.output.display()),
    );

    let (available, rates) = if args.interactive {
        collect_interactive(&table, level)
    } else {
        let availability = parse_assignments(&args.available_hours, "--available-hours");
        let rate_map = parse_assignments(&args.hourly_rates, "--hourly-rates");
        warn_unknown_developers(&table, &availability, "--available-hours");
        warn_unknown_developers(&table, &rate_map, "--hourly-rates");
        (values_in_table_order(&table, &availability), values_in_table_order(&table, &rate_map))
    };

    let duration = duration_months(prediction.total_hours, &available);
    let cost = total_cost(prediction.total_hours, &rates, table.rows.len());

    report_totals(&prediction, duration, cost, level);

    let summary = ReportSummary {
        total_hours: prediction.total_hours,
        duration_months: duration,
        total_cost: cost,
        skipped_cells: prediction.skipped.len(),
    };
    write_report(&args.report, &summary).map_err(|e| format!("Report error: {e}"))?;
    log(
        level,
        LogLevel::Normal,
        &format!("Report saved as '{}'", args.report.display()),
    );
    Ok(())
}

/// Parse `name=value` roll-up entries; invalid entries are reported to the
/// operator and skipped, never fatal.
fn parse_assignments(entries: &[String], flag: &str) -> HashMap<String, f64> {
    let mut map = HashMap::new();
    for entry in entries {
        match entry.split_once('=').map(|(name, v)| (name.trim(), v.trim().parse::<f64>())) {
            Some((name, Ok(value))) if !name.is_empty() => {
                map.insert(name.to_string(), value);
            }
            _ => eprintln!("Warning: invalid {flag} entry {entry:?}, skipping"),
        }
    }
    map
}

fn warn_unknown_developers(table: &ModelTable, map: &HashMap<String, f64>, flag: &str) {
    for name in map.keys() {
        if !table.rows.iter().any(|r| r.employee == *name) {
            eprintln!("Warning: {flag} names unknown developer {name:?}");
        }
    }
}

/// Align a name→value map with the table's row order; absent developers
/// get 0, which the roll-ups skip.
fn values_in_table_order(table: &ModelTable, map: &HashMap<String, f64>) -> Vec<f64> {
    table.rows.iter().map(|r| map.get(&r.employee).copied().unwrap_or(0.0)).collect()
}

/// Prompt per developer for availability then rate, on stdin/stdout.
fn collect_interactive(table: &ModelTable, level: LogLevel) -> (Vec<f64>, Vec<f64>) {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    log(
        level,
        LogLevel::Normal,
        "Enter available hours per month for each developer (blank to skip):",
    );
    let available = prompt_per_developer(table, &mut stdin.lock(), &mut stdout);

    log(
        level,
        LogLevel::Normal,
        "Enter cost per hour for each developer (blank to skip):",
    );
    let rates = prompt_per_developer(table, &mut stdin.lock(), &mut stdout);

    (available, rates)
}

fn prompt_per_developer(
    table: &ModelTable,
    input: &mut impl BufRead,
    output: &mut impl std::io::Write,
) -> Vec<f64> {
    table
        .rows
        .iter()
        .map(|row| {
            prompt_float(&row.employee, input, output)
                .unwrap_or_default()
                .unwrap_or(0.0)
        })
        .collect()
}

fn report_totals(prediction: &Prediction, duration: Option<f64>, cost: Option<f64>, level: LogLevel) {
    log(
        level,
        LogLevel::Normal,
        &format!("Project estimated hours: {:.2}", prediction.total_hours),
    );
    if let Some(months) = duration {
        log(level, LogLevel::Normal, &format!("Estimated project duration: {months:.2} months"));
    }
    if let Some(cost) = cost {
        log(level, LogLevel::Normal, &format!("Estimated total cost: ${cost:.2}"));
    }
    if !prediction.skipped.is_empty() {
        log(
            level,
            LogLevel::Normal,
            &format!("Skipped {} unparseable cell(s)", prediction.skipped.len()),
        );
    }
}

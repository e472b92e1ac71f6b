//! Train command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, TrainArgs};
use crate::io::{read_history, write_model_table};
use crate::model::ModelTable;

pub fn run_train(args: TrainArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Estimar: Training from {}", args.history.display()),
    );

    let history = read_history(&args.history).map_err(|e| format!("History error: {e}"))?;
    let table = ModelTable::fit(&history);

    let pair_count = table.rows.len() * table.categories.len();
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Fitted {} of {} developer/category pairs ({} records, {} developers, {} categories)",
            table.fitted_cells(),
            pair_count,
            history.len(),
            table.rows.len(),
            table.categories.len()
        ),
    );

    if args.dry_run {
        log(level, LogLevel::Normal, "Dry run - no table written");
        for row in &table.rows {
            let fitted = row.cells.iter().filter(|c| !c.is_empty()).count();
            log(
                level,
                LogLevel::Verbose,
                &format!("  {}: {fitted} of {} categories fitted", row.employee, row.cells.len()),
            );
        }
        return Ok(());
    }

    write_model_table(&args.output, &table).map_err(|e| format!("Write error: {e}"))?;

    log(
        level,
        LogLevel::Normal,
        &format!("Training complete. Results saved in '{}'", args.output.display()),
    );
    Ok(())
}

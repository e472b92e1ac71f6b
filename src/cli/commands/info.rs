//! Info command implementation

use serde::Serialize;

use crate::cli::logging::log;
use crate::cli::{InfoArgs, LogLevel, OutputFormat};
use crate::io::read_model_table;

#[derive(Serialize)]
struct TableSummary {
    path: String,
    developers: Vec<String>,
    categories: Vec<String>,
    fitted_cells: usize,
    empty_cells: usize,
    unparseable_cells: usize,
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let table = read_model_table(&args.trained).map_err(|e| format!("Trained table error: {e}"))?;

    let cell_count = table.rows.len() * table.categories.len();
    let summary = TableSummary {
        path: args.trained.display().to_string(),
        developers: table.rows.iter().map(|r| r.employee.clone()).collect(),
        categories: table.categories.clone(),
        fitted_cells: table.fitted_cells(),
        empty_cells: cell_count - table.fitted_cells() - table.unparseable_cells(),
        unparseable_cells: table.unparseable_cells(),
    };

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Trained table info:");
            println!("Table: {}", summary.path);
            println!("Developers: {}", summary.developers.join(", "));
            println!("Categories: {}", summary.categories.join(", "));
            println!("Fitted cells: {}", summary.fitted_cells);
            println!("Empty cells: {}", summary.empty_cells);
            if summary.unparseable_cells > 0 {
                println!("Unparseable cells: {}", summary.unparseable_cells);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}

//! Trained-model and prediction table CSV storage.
//!
//! The trained table carries a leading `#` column as a 1-based row index
//! for human readability. It is regenerated on every write and its values
//! are ignored on read; only the column's presence is required.

use std::path::Path;

use crate::error::{Error, Result};
use crate::formula::format_2dp;
use crate::model::{ModelRow, ModelTable};
use crate::predict::Prediction;

const INDEX_COLUMN: &str = "#";
const EMPLOYEE_COLUMN: &str = "Employee";

/// Write a trained table: `#, Employee, <category...>`.
pub fn write_model_table(path: impl AsRef<Path>, table: &ModelTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    let mut header = vec![INDEX_COLUMN.to_string(), EMPLOYEE_COLUMN.to_string()];
    header.extend(table.categories.iter().cloned());
    writer.write_record(&header)?;

    for (i, row) in table.rows.iter().enumerate() {
        let mut record = vec![(i + 1).to_string(), row.employee.clone()];
        record.extend(row.cells.iter().cloned());
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Read a trained table back. `#` and `Employee` must be present; every
/// other column is a category, in file order.
pub fn read_model_table(path: impl AsRef<Path>) -> Result<ModelTable> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let employee_idx = headers.iter().position(|h| h == EMPLOYEE_COLUMN);

    let mut missing: Vec<String> = Vec::new();
    if !headers.iter().any(|h| h == INDEX_COLUMN) {
        missing.push(INDEX_COLUMN.to_string());
    }
    if employee_idx.is_none() {
        missing.push(EMPLOYEE_COLUMN.to_string());
    }
    let employee_idx = match employee_idx {
        Some(i) if missing.is_empty() => i,
        _ => return Err(Error::Schema { path: path.to_path_buf(), missing }),
    };
    let category_columns: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| *h != INDEX_COLUMN && *h != EMPLOYEE_COLUMN)
        .map(|(i, h)| (i, h.to_string()))
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let employee = record.get(employee_idx).unwrap_or("").to_string();
        let cells = category_columns
            .iter()
            .map(|(i, _)| record.get(*i).unwrap_or("").to_string())
            .collect();
        rows.push(ModelRow { employee, cells });
    }

    let categories = category_columns.into_iter().map(|(_, c)| c).collect();
    Ok(ModelTable::new(categories, rows))
}

/// Write a prediction table: `Employee, <category...>` with estimated
/// hours or empty cells.
pub fn write_prediction(
    path: impl AsRef<Path>,
    categories: &[String],
    prediction: &Prediction,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    let mut header = vec![EMPLOYEE_COLUMN.to_string()];
    header.extend(categories.iter().cloned());
    writer.write_record(&header)?;

    for row in &prediction.rows {
        let mut record = vec![row.employee.clone()];
        record.extend(
            row.estimates
                .iter()
                .map(|estimate| estimate.map(format_2dp).unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

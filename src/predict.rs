//! Prediction: decode a trained table and aggregate hour estimates.
//!
//! Each non-empty cell is decoded back into a [`Formula`] and evaluated at
//! the fixed average task size. A cell that fails to decode contributes
//! nothing and is recorded on the skip list; one bad cell never aborts the
//! run. The grand total is a plain sum over cells, so it is invariant
//! under row and column reordering.

use serde::Serialize;

use crate::formula::{round2, Formula, FormulaError};
use crate::model::ModelTable;

/// Fixed average-task-size assumption applied at prediction time, standing
/// in for the true expected hours that are unknown until planning.
pub const AVG_TASK_HOURS: f64 = 10.0;

/// One developer's predicted hours, aligned with the table's category
/// order. `None` marks a cell that was empty or unparseable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRow {
    pub employee: String,
    pub estimates: Vec<Option<f64>>,
}

/// A cell whose formula could not be decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedCell {
    pub employee: String,
    pub category: String,
    pub cell: String,
    #[serde(skip)]
    pub error: FormulaError,
}

/// The prediction output: one row per developer plus the grand total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub rows: Vec<PredictionRow>,
    pub total_hours: f64,
    pub skipped: Vec<SkippedCell>,
}

/// Decode every cell of the table and evaluate it at [`AVG_TASK_HOURS`].
pub fn predict(table: &ModelTable) -> Prediction {
    let mut rows = Vec::with_capacity(table.rows.len());
    let mut skipped = Vec::new();
    let mut total_hours = 0.0;

    for row in &table.rows {
        let mut estimates = Vec::with_capacity(table.categories.len());
        for (category, cell) in table.categories.iter().zip(&row.cells) {
            if cell.trim().is_empty() {
                estimates.push(None);
                continue;
            }
            match cell.parse::<Formula>() {
                Ok(formula) => {
                    let hours = formula.estimate(AVG_TASK_HOURS);
                    total_hours += hours;
                    estimates.push(Some(hours));
                }
                Err(error) => {
                    skipped.push(SkippedCell {
                        employee: row.employee.clone(),
                        category: category.clone(),
                        cell: cell.clone(),
                        error,
                    });
                    estimates.push(None);
                }
            }
        }
        rows.push(PredictionRow { employee: row.employee.clone(), estimates });
    }

    Prediction { rows, total_hours: round2(total_hours), skipped }
}

/// Project duration in months: total hours over the summed monthly
/// availability of all developers. Non-positive availabilities are
/// skipped; returns `None` when nothing positive remains.
pub fn duration_months(total_hours: f64, available_hours: &[f64]) -> Option<f64> {
    let capacity: f64 = available_hours.iter().filter(|&&h| h > 0.0).sum();
    (capacity > 0.0).then(|| total_hours / capacity)
}

/// Total cost: each positive hourly rate billed for an equal share of the
/// total hours across `developer_count` developers. Non-positive rates are
/// skipped; returns `None` when nothing positive remains.
pub fn total_cost(total_hours: f64, rates: &[f64], developer_count: usize) -> Option<f64> {
    if developer_count == 0 {
        return None;
    }
    let cost: f64 = rates
        .iter()
        .filter(|&&r| r > 0.0)
        .map(|r| r * total_hours / developer_count as f64)
        .sum();
    (cost > 0.0).then_some(cost)
}

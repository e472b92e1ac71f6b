//! Trained-model table: the artifact carried from training to prediction.
//!
//! One row per developer, one column per category, each cell holding an
//! encoded formula or the empty string. Training fully rebuilds the table;
//! prediction only reads it. Nothing else crosses between the two
//! pipelines.
//!
//! # Example
//!
//! ```
//! use estimar::history::{SprintLog, SprintRecord};
//! use estimar::model::ModelTable;
//!
//! let log = SprintLog::new(vec![
//!     SprintRecord {
//!         sprint: 1,
//!         task: "T-1".into(),
//!         category: "Backend".into(),
//!         developer: "alice".into(),
//!         expected_hours: 1.0,
//!         actual_hours: 12.0,
//!         comment: String::new(),
//!     },
//!     SprintRecord {
//!         sprint: 1,
//!         task: "T-2".into(),
//!         category: "Backend".into(),
//!         developer: "alice".into(),
//!         expected_hours: 2.0,
//!         actual_hours: 22.0,
//!         comment: String::new(),
//!     },
//! ]);
//!
//! let table = ModelTable::fit(&log);
//! assert_eq!(table.cell(0, 0), "e10.0+2.0");
//! ```

use serde::{Deserialize, Serialize};

use crate::formula::Formula;
use crate::history::SprintLog;
use crate::regression::fit_linear;

/// One developer's row of encoded formulas, aligned with the table's
/// category order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRow {
    pub employee: String,
    pub cells: Vec<String>,
}

/// The trained-model table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelTable {
    pub categories: Vec<String>,
    pub rows: Vec<ModelRow>,
}

impl ModelTable {
    pub fn new(categories: Vec<String>, rows: Vec<ModelRow>) -> Self {
        Self { categories, rows }
    }

    /// Train a table from historical records: fit every developer against
    /// every category, encoding each fit and leaving sparse groups empty.
    pub fn fit(log: &SprintLog) -> Self {
        let categories = log.categories();
        let rows = log
            .developers()
            .into_iter()
            .map(|developer| {
                let cells = categories
                    .iter()
                    .map(|category| {
                        fit_linear(&log.samples(&developer, category))
                            .map(|f| f.encode())
                            .unwrap_or_default()
                    })
                    .collect();
                ModelRow { employee: developer, cells }
            })
            .collect();
        Self { categories, rows }
    }

    /// Raw cell contents for (row, category column); empty string when the
    /// group had no estimator.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Count of non-empty cells that decode cleanly.
    pub fn fitted_cells(&self) -> usize {
        self.formulas().filter(|(_, _, f)| f.is_some()).count()
    }

    /// Count of non-empty cells that fail to decode.
    pub fn unparseable_cells(&self) -> usize {
        self.formulas().filter(|(_, _, f)| f.is_none()).count()
    }

    fn formulas(&self) -> impl Iterator<Item = (usize, usize, Option<Formula>)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| !cell.trim().is_empty())
                .map(move |(j, cell)| (i, j, cell.parse().ok()))
        })
    }
}

//! # estimar
//!
//! Sprint-history effort estimation. Two pipelines share one artifact:
//!
//! - **Training**: historical sprint records → one simple linear fit per
//!   (developer, category) pair → a [`model::ModelTable`] of compact
//!   formula strings, persisted as CSV.
//! - **Prediction**: the trained table → decoded [`formula::Formula`]s →
//!   per-cell hour estimates at a fixed average task size → a total, plus
//!   optional duration and cost roll-ups.
//!
//! Training is a pure function of the history
//! ([`model::ModelTable::fit`]), prediction a pure function of the table
//! ([`predict::predict`]); the persisted CSV is the only hand-off between
//! the two runs. Nothing guards concurrent train and predict runs racing
//! on the same table file; last writer wins.
//!
//! # Example
//!
//! ```
//! use estimar::history::{SprintLog, SprintRecord};
//! use estimar::model::ModelTable;
//! use estimar::predict::predict;
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
//! let prediction = predict(&table);
//! assert_eq!(prediction.total_hours, 102.0);
//! ```

pub mod cli;
pub mod error;
pub mod formula;
pub mod history;
pub mod io;
pub mod model;
pub mod predict;
pub mod regression;

pub use error::{Error, Result};
pub use formula::{Formula, FormulaError};
pub use model::{ModelRow, ModelTable};
pub use predict::{predict, Prediction, AVG_TASK_HOURS};

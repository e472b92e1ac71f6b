//! Crate-level error types
//!
//! Only failures that abort an entire run live here. Per-cell formula
//! parse failures are recovered at the cell boundary (see
//! [`crate::predict`]) and never surface as an [`Error`].

use std::path::PathBuf;

/// Errors that abort a training or prediction run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{}: missing required column(s): {}", path.display(), missing.join(", "))]
    Schema { path: PathBuf, missing: Vec<String> },
}

/// Result alias for run-level operations
pub type Result<T> = std::result::Result<T, Error>;

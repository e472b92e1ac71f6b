//! Historical sprint CSV reader.

use std::path::Path;

use crate::error::{Error, Result};
use crate::history::{SprintLog, SprintRecord};

/// Columns a sprint export must carry, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Sprint Number",
    "Task",
    "Category",
    "Developer",
    "Expected Time (Hours)",
    "Actual Time (Hours)",
    "Performance Comment",
];

/// Read a sprint history CSV, validating the header before any row is
/// deserialized. A missing column aborts the run with every absent name
/// listed; no partial data is returned.
pub fn read_history(path: impl AsRef<Path>) -> Result<SprintLog> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == **required))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::Schema { path: path.to_path_buf(), missing });
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<SprintRecord>() {
        records.push(row?);
    }
    Ok(SprintLog::new(records))
}

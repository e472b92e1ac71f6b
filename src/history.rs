//! Historical sprint data model.
//!
//! [`SprintRecord`] mirrors one row of the sprint export; field names are
//! bound to the export's column headers via serde renames. [`SprintLog`]
//! wraps the full set of records and answers the grouping questions the
//! trainer asks: which developers, which categories, and which
//! `(expected, actual)` samples belong to a (developer, category) pair.

use serde::{Deserialize, Serialize};

/// One observed task from a historical sprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintRecord {
    #[serde(rename = "Sprint Number")]
    pub sprint: u32,

    #[serde(rename = "Task")]
    pub task: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Developer")]
    pub developer: String,

    #[serde(rename = "Expected Time (Hours)")]
    pub expected_hours: f64,

    #[serde(rename = "Actual Time (Hours)")]
    pub actual_hours: f64,

    #[serde(rename = "Performance Comment")]
    pub comment: String,
}

/// Immutable collection of historical records for one training run.
#[derive(Debug, Clone, Default)]
pub struct SprintLog {
    records: Vec<SprintRecord>,
}

impl SprintLog {
    pub fn new(records: Vec<SprintRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SprintRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Distinct developers in first-seen order.
    pub fn developers(&self) -> Vec<String> {
        first_seen(self.records.iter().map(|r| r.developer.as_str()))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        first_seen(self.records.iter().map(|r| r.category.as_str()))
    }

    /// `(expected, actual)` samples for one (developer, category) group,
    /// in record order.
    pub fn samples(&self, developer: &str, category: &str) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .filter(|r| r.developer == developer && r.category == category)
            .map(|r| (r.expected_hours, r.actual_hours))
            .collect()
    }
}

fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if !out.iter().any(|seen| seen == v) {
            out.push(v.to_string());
        }
    }
    out
}

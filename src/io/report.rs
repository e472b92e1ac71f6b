//! Human-readable estimation report.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::error::Result;

/// The figures a finished prediction run reports.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReportSummary {
    pub total_hours: f64,
    pub duration_months: Option<f64>,
    pub total_cost: Option<f64>,
    pub skipped_cells: usize,
}

/// Write the summary as plain text, one figure per line. Optional figures
/// are omitted when they were not computed.
pub fn write_report(path: impl AsRef<Path>, summary: &ReportSummary) -> Result<()> {
    let mut file = File::create(path.as_ref())?;
    file.write_all(render(summary).as_bytes())?;
    Ok(())
}

fn render(summary: &ReportSummary) -> String {
    let mut lines = vec![
        "Project estimation report".to_string(),
        format!("Generated: {}", Local::now().format("%Y-%m-%d %H:%M")),
        String::new(),
        format!("Project estimated hours: {:.2} hours", summary.total_hours),
    ];
    if let Some(months) = summary.duration_months {
        lines.push(format!("Estimated duration: {months:.2} months"));
    }
    if let Some(cost) = summary.total_cost {
        lines.push(format!("Estimated total cost: ${cost:.2}"));
    }
    if summary.skipped_cells > 0 {
        lines.push(format!("Skipped unparseable cells: {}", summary.skipped_cells));
    }
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn report_includes_only_computed_figures() {
        let text = render(&ReportSummary {
            total_hours: 26.0,
            duration_months: None,
            total_cost: None,
            skipped_cells: 0,
        });
        assert!(text.contains("Project estimated hours: 26.00 hours"));
        assert!(!text.contains("Estimated duration"));
        assert!(!text.contains("Estimated total cost"));
        assert!(!text.contains("Skipped"));
    }

    #[test]
    fn report_includes_rollups_and_skips_when_present() {
        let text = render(&ReportSummary {
            total_hours: 120.0,
            duration_months: Some(2.5),
            total_cost: Some(8400.0),
            skipped_cells: 3,
        });
        assert!(text.contains("Estimated duration: 2.50 months"));
        assert!(text.contains("Estimated total cost: $8400.00"));
        assert!(text.contains("Skipped unparseable cells: 3"));
    }

    #[test]
    fn report_is_written_to_disk() {
        let dir = TempDir::new().expect("temp dir creation should succeed");
        let path = dir.path().join("report.txt");

        write_report(&path, &ReportSummary { total_hours: 26.0, ..Default::default() }).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Project estimation report"));
    }
}

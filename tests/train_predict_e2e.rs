//! End-to-end pipeline tests: history CSV → trained table CSV → prediction
//! CSV + report, through the same library calls the CLI makes.

use estimar::history::SprintLog;
use estimar::io::{
    read_history, read_model_table, write_model_table, write_prediction, write_report,
    ReportSummary,
};
use estimar::model::{ModelRow, ModelTable};
use estimar::predict::{duration_months, predict, total_cost};
use tempfile::TempDir;

const HISTORY_HEADER: &str = "Sprint Number,Task,Category,Developer,Expected Time (Hours),Actual Time (Hours),Performance Comment";

fn write_history_csv(dir: &TempDir, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("sprints.csv");
    let mut content = String::from(HISTORY_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    std::fs::write(&path, content).expect("file write should succeed");
    path
}

#[test]
fn full_pipeline_over_files() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let history_path = write_history_csv(
        &dir,
        &[
            "1,T-1,Backend,alice,1.0,12.0,slow",
            "1,T-2,Backend,alice,2.0,22.0,slow",
            "2,T-3,Backend,alice,3.0,32.0,slow",
            "2,T-4,Frontend,bob,2.0,3.0,ok",
            "3,T-5,Frontend,bob,4.0,5.0,ok",
            "3,T-6,Backend,bob,6.0,6.0,ok",
        ],
    );

    // Train
    let history = read_history(&history_path).unwrap();
    let table = ModelTable::fit(&history);
    let trained_path = dir.path().join("trained.csv");
    write_model_table(&trained_path, &table).unwrap();

    // The persisted artifact is the only hand-off: reload and predict
    let loaded = read_model_table(&trained_path).unwrap();
    assert_eq!(loaded, table);

    // alice/Backend is an exact 10x+2 line; bob/Frontend an exact x+1 line
    assert_eq!(loaded.cell(0, 0), "e10.0+2.0");
    assert_eq!(loaded.cell(1, 1), "e1.0+1.0");
    // single-sample groups stay empty
    assert_eq!(loaded.cell(0, 1), "");
    assert_eq!(loaded.cell(1, 0), "");

    let prediction = predict(&loaded);
    // 10*10+2 = 102, 1*10+1 = 11
    assert_eq!(prediction.rows[0].estimates, vec![Some(102.0), None]);
    assert_eq!(prediction.rows[1].estimates, vec![None, Some(11.0)]);
    assert_eq!(prediction.total_hours, 113.0);
    assert!(prediction.skipped.is_empty());

    // Prediction table keeps the model table's column shape
    let prediction_path = dir.path().join("prediction.csv");
    write_prediction(&prediction_path, &loaded.categories, &prediction).unwrap();
    let content = std::fs::read_to_string(&prediction_path).unwrap();
    assert_eq!(content, "Employee,Backend,Frontend\nalice,102.0,\nbob,,11.0\n");
}

#[test]
fn single_formula_table_predicts_at_average_task_size() {
    // One developer, one category, formula e2.5+1.0 in her cell.
    let table = ModelTable::new(
        vec!["Backend".to_string()],
        vec![ModelRow { employee: "Alice".to_string(), cells: vec!["e2.5+1.0".to_string()] }],
    );

    let prediction = predict(&table);
    assert_eq!(prediction.rows[0].estimates, vec![Some(26.0)]);
    assert_eq!(prediction.total_hours, 26.0);
}

#[test]
fn sparse_history_trains_an_all_empty_table() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let history_path = write_history_csv(
        &dir,
        &["1,T-1,Backend,alice,1.0,2.0,", "1,T-2,Frontend,bob,3.0,4.0,"],
    );

    let table = ModelTable::fit(&read_history(&history_path).unwrap());
    assert!(table.rows.iter().all(|r| r.cells.iter().all(String::is_empty)));

    let prediction = predict(&table);
    assert_eq!(prediction.total_hours, 0.0);
}

#[test]
fn negative_intercept_survives_persistence() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    // Actual hours consistently below expected: slope 1.5, intercept -2.3
    let history_path = write_history_csv(
        &dir,
        &["1,T-1,Backend,alice,2.0,0.7,fast", "1,T-2,Backend,alice,4.0,3.7,fast"],
    );

    let table = ModelTable::fit(&read_history(&history_path).unwrap());
    assert_eq!(table.cell(0, 0), "e1.5-2.3");

    let trained_path = dir.path().join("trained.csv");
    write_model_table(&trained_path, &table).unwrap();
    let prediction = predict(&read_model_table(&trained_path).unwrap());
    // 1.5 * 10 - 2.3
    assert_eq!(prediction.rows[0].estimates, vec![Some(12.7)]);
}

#[test]
fn rollups_and_report_from_a_prediction() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let table = ModelTable::new(
        vec!["Backend".to_string()],
        vec![
            ModelRow { employee: "alice".to_string(), cells: vec!["e2.5+1.0".to_string()] },
            ModelRow { employee: "bob".to_string(), cells: vec!["e1.0+0.0".to_string()] },
        ],
    );

    let prediction = predict(&table);
    assert_eq!(prediction.total_hours, 36.0);

    let duration = duration_months(prediction.total_hours, &[12.0, 6.0]);
    let cost = total_cost(prediction.total_hours, &[100.0, 0.0], table.rows.len());
    assert_eq!(duration, Some(2.0));
    assert_eq!(cost, Some(1800.0));

    let report_path = dir.path().join("report.txt");
    write_report(
        &report_path,
        &ReportSummary {
            total_hours: prediction.total_hours,
            duration_months: duration,
            total_cost: cost,
            skipped_cells: prediction.skipped.len(),
        },
    )
    .unwrap();

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("Project estimated hours: 36.00 hours"));
    assert!(report.contains("Estimated duration: 2.00 months"));
    assert!(report.contains("Estimated total cost: $1800.00"));
}

#[test]
fn empty_history_file_trains_an_empty_table() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let history_path = write_history_csv(&dir, &[]);

    let history = read_history(&history_path).unwrap();
    assert!(history.is_empty());

    let table = ModelTable::fit(&history);
    assert!(table.is_empty());
    assert_eq!(predict(&table).total_hours, 0.0);
}

#[test]
fn first_seen_order_is_preserved_through_persistence() {
    let dir = TempDir::new().expect("temp dir creation should succeed");
    let history_path = write_history_csv(
        &dir,
        &[
            "1,T-1,Testing,carol,1.0,1.0,",
            "1,T-2,Backend,alice,1.0,1.0,",
            "1,T-3,Testing,carol,2.0,2.0,",
            "1,T-4,Backend,alice,2.0,2.0,",
        ],
    );

    let table = ModelTable::fit(&read_history(&history_path).unwrap());
    assert_eq!(table.categories, vec!["Testing", "Backend"]);
    assert_eq!(
        table.rows.iter().map(|r| r.employee.as_str()).collect::<Vec<_>>(),
        vec!["carol", "alice"]
    );

    let trained_path = dir.path().join("trained.csv");
    write_model_table(&trained_path, &table).unwrap();
    let loaded = read_model_table(&trained_path).unwrap();
    assert_eq!(loaded.categories, table.categories);

    let log: SprintLog = read_history(&history_path).unwrap();
    assert_eq!(log.developers(), vec!["carol", "alice"]);
}

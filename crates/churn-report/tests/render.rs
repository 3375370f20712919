//! Tests for cleaning report rendering.

use std::fs;

use churn_model::{CleaningReport, StepRecord, ValueCoercionWarning};
use churn_report::{ReportFormat, cleaning_report_text, render_cleaning_report, write_cleaning_report};
use insta::assert_snapshot;

fn step(name: &str, column: &str, rows: (usize, usize), newly_missing: usize) -> StepRecord {
    StepRecord {
        step: name.to_string(),
        columns: vec![column.to_string()],
        rows_before: rows.0,
        rows_after: rows.1,
        newly_missing,
    }
}

fn warning(step: &str, column: &str, token: &str) -> ValueCoercionWarning {
    let mut warning = ValueCoercionWarning::new(step, column);
    warning.record(token);
    warning
}

fn sample_report() -> CleaningReport {
    let mut report = CleaningReport::new(5, 21);
    report.output_rows = 4;
    report.output_columns = 23;
    report.rows_dropped = 1;
    report.add_coerced("TotalCharges", 1);
    report.add_coerced("Churn", 1);
    report.columns_removed = vec!["customerID".to_string(), "Contract".to_string()];
    report.columns_added = vec![
        "Contract_Month-to-month".to_string(),
        "Contract_One year".to_string(),
    ];
    report.steps = vec![
        step("Numeric Coerce", "TotalCharges", (5, 5), 1),
        step("Drop Rows", "TotalCharges", (5, 4), 0),
        step("Binary Map", "Churn", (4, 4), 1),
    ];
    report.add_warning(warning("Numeric Coerce", "TotalCharges", " "));
    report.add_warning(warning("Binary Map", "Churn", "yess"));
    report
}

#[test]
fn text_report_lists_every_change() {
    assert_snapshot!(cleaning_report_text(&sample_report()), @r#"
Cleaning report
===============
Input:   5 rows, 21 columns
Output:  4 rows, 23 columns
Rows dropped: 1
Values coerced to missing: 2
  Churn: 1
  TotalCharges: 1
Columns removed: customerID, Contract
Columns added: Contract_Month-to-month, Contract_One year

Steps
   1. Numeric Coerce(TotalCharges): 5 -> 5 rows, 1 newly missing
   2. Drop Rows(TotalCharges): 5 -> 4 rows
   3. Binary Map(Churn): 4 -> 4 rows, 1 newly missing

Warnings
  Numeric Coerce(TotalCharges): 1 value replaced with missing; examples: " "
  Binary Map(Churn): 1 value replaced with missing; examples: "yess"
"#);
}

#[test]
fn json_report_round_trips() {
    let report = sample_report();
    let json = render_cleaning_report(&report, ReportFormat::Json).expect("render json");
    let parsed: CleaningReport = serde_json::from_str(&json).expect("parse json");
    assert_eq!(parsed, report);
}

#[test]
fn writes_report_to_nested_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("reports").join("clean.txt");

    write_cleaning_report(&sample_report(), &path, ReportFormat::Text).expect("write report");
    let text = fs::read_to_string(&path).expect("read report");
    assert!(text.starts_with("Cleaning report\n"));
    assert!(text.contains("Rows dropped: 1"));
}

//! End-to-end tests for the churn cleaning pipeline.

use std::path::Path;

use churn_ingest::{IngestOptions, read_table_from_reader, render_table};
use churn_model::{CellValue, SchemaError, Table};
use churn_transform::{PipelineConfig, TransformPlan, execute_plan, run, run_default};
use insta::assert_snapshot;

const HEADER: &str = "customerID,gender,SeniorCitizen,Partner,Dependents,tenure,PhoneService,MultipleLines,InternetService,OnlineSecurity,OnlineBackup,DeviceProtection,TechSupport,StreamingTV,StreamingMovies,Contract,PaperlessBilling,PaymentMethod,MonthlyCharges,TotalCharges,Churn";

const ROWS: &[&str] = &[
    "7590-VHVEG,Female,0,Yes,No,1,No,No phone service,DSL,No,Yes,No,No,No,No,Month-to-month,Yes,Electronic check,29.85,29.85,No",
    "5575-GNVDE,Male,0,No,No,34,Yes,No,DSL,Yes,No,Yes,No,No,No,One year,No,Mailed check,56.95,1889.5,No",
    "3668-QPYBK,Male,0,No,No,2,Yes,No,DSL,Yes,Yes,No,No,No,No,Month-to-month,Yes,Mailed check,53.85,108.15,Yes",
    "4472-LVYGI,Female,0,Yes,Yes,0,No,No phone service,DSL,Yes,No,Yes,Yes,Yes,No,Two year,Yes,Bank transfer (automatic),52.55, ,No",
    "9237-HQITU,Female,0,No,No,2,Yes,No,Fiber optic,No,No,No,No,No,No,Month-to-month,Yes,Electronic check,70.7,151.65,yess",
];

fn load(rows: &[&str]) -> Table {
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    read_table_from_reader(text.as_bytes(), Path::new("telco.csv"), &IngestOptions::default())
        .expect("parse sample")
}

fn render(table: &Table) -> String {
    render_table(table, b',').expect("render table")
}

#[test]
fn cleans_sample_extract() {
    let (table, report) = run_default(load(ROWS)).expect("pipeline");

    assert_eq!(table.height(), 4);
    assert!(!table.contains("customerID"));
    assert_eq!(table.missing_count("TotalCharges"), Some(0));
    assert_eq!(table.column("Churn").unwrap().values[3], CellValue::Missing);

    assert_eq!(report.input_rows, 5);
    assert_eq!(report.rows_dropped, 1);
    assert_eq!(report.coerced_to_missing.get("TotalCharges"), Some(&1));
    assert_eq!(report.coerced_to_missing.get("Churn"), Some(&1));
    assert_eq!(report.columns_added.len(), 6);
    assert_eq!(report.steps.len(), 17);

    assert_snapshot!(render(&table), @r"
gender,SeniorCitizen,Partner,Dependents,tenure,PhoneService,MultipleLines,OnlineSecurity,OnlineBackup,DeviceProtection,TechSupport,StreamingTV,StreamingMovies,PaperlessBilling,MonthlyCharges,TotalCharges,Churn,InternetService_DSL,InternetService_Fiber optic,Contract_Month-to-month,Contract_One year,PaymentMethod_Electronic check,PaymentMethod_Mailed check
1,0,1,0,1,0,0,0,1,0,0,0,0,1,29.85,29.85,0,True,False,True,False,True,False
0,0,0,0,34,1,0,1,0,1,0,0,0,0,56.95,1889.5,0,True,False,False,True,False,True
0,0,0,0,2,1,0,1,1,0,0,0,0,1,53.85,108.15,1,True,False,True,False,False,True
1,0,0,0,2,1,0,0,0,0,0,0,0,1,70.7,151.65,,False,True,True,False,True,False
");
}

#[test]
fn categories_come_from_surviving_rows_only() {
    let (table, _) = run_default(load(ROWS)).expect("pipeline");
    // the only two-year customer had an unparseable TotalCharges
    assert!(!table.contains("Contract_Two year"));
    assert!(!table.contains("PaymentMethod_Bank transfer (automatic)"));
    for source in ["InternetService", "Contract", "PaymentMethod"] {
        assert!(!table.contains(source));
    }
}

#[test]
fn no_internet_service_becomes_missing() {
    let mut rows = ROWS.to_vec();
    rows.push(
        "7795-CFOCW,Male,0,No,No,45,No,No phone service,No,No internet service,No internet service,No internet service,No internet service,No internet service,No internet service,One year,No,Bank transfer (automatic),42.3,1840.75,No",
    );
    let (table, report) = run_default(load(&rows)).expect("pipeline");

    assert_eq!(table.height(), 5);
    let last = table.height() - 1;
    for column in ["OnlineSecurity", "OnlineBackup", "TechSupport", "StreamingMovies"] {
        assert_eq!(table.column(column).unwrap().values[last], CellValue::Missing);
        assert_eq!(report.coerced_to_missing.get(column), Some(&1));
    }
    assert_eq!(
        table.column("InternetService_No").unwrap().values[last],
        CellValue::Flag(true)
    );
    assert_eq!(
        table.column("MultipleLines").unwrap().values[last],
        CellValue::Integer(0)
    );
}

#[test]
fn identifier_removed_regardless_of_position() {
    let raw = load(ROWS);
    let mut columns = raw.columns().to_vec();
    columns.rotate_left(1);
    let reordered = Table::from_columns(columns).expect("rebuild table");
    assert_eq!(reordered.column_names().last(), Some(&"customerID"));

    let (table, _) = run_default(reordered).expect("pipeline");
    assert!(!table.contains("customerID"));
}

#[test]
fn output_is_deterministic() {
    let (first, first_report) = run_default(load(ROWS)).expect("first run");
    let (second, second_report) = run_default(load(ROWS)).expect("second run");
    assert_eq!(render(&first), render(&second));
    assert_eq!(first_report, second_report);
}

#[test]
fn header_only_input_yields_header_only_output() {
    let (table, report) = run_default(load(&[])).expect("pipeline");
    assert_eq!(table.height(), 0);
    assert_eq!(table.width(), 17);
    assert!(report.columns_added.is_empty());
    assert_eq!(render(&table).lines().count(), 1);
}

#[test]
fn absent_required_column_is_schema_error() {
    let mut raw = load(ROWS);
    raw.remove_column("Contract");
    let err = run_default(raw).unwrap_err();
    assert_eq!(err, SchemaError::missing("Contract", "One-Hot Expand"));
}

#[test]
fn custom_layout_from_config() {
    let config = PipelineConfig::from_json_str(
        r#"{
            "yes_no_columns": ["Partner"],
            "one_hot_columns": ["Contract"]
        }"#,
    )
    .expect("parse config");
    let (table, _) = run(load(ROWS), &config).expect("pipeline");

    assert_eq!(
        table.column("Dependents").unwrap().values[0],
        CellValue::text("No")
    );
    assert!(table.contains("PaymentMethod"));
    assert!(table.contains("Contract_One year"));
}

#[test]
fn plan_round_trips_through_json() {
    let plan = TransformPlan::from_config(&PipelineConfig::default());
    let json = serde_json::to_string(&plan).expect("serialize plan");
    let parsed: TransformPlan = serde_json::from_str(&json).expect("parse plan");
    assert_eq!(parsed, plan);

    let (via_json, _) = execute_plan(load(ROWS), &parsed).expect("pipeline");
    let (direct, _) = run_default(load(ROWS)).expect("pipeline");
    assert_eq!(via_json, direct);
}

//! Tests for the descriptive summary.

use churn_model::{CellValue, Column, ColumnKind, Table};
use churn_report::{
    CategoryCount, ChurnByCategory, DescribeColumns, MISSING_LABEL, ReportError, describe,
};

fn numbers(name: &str, values: &[Option<f64>]) -> Column {
    Column::new(
        name,
        ColumnKind::Number,
        values
            .iter()
            .map(|v| v.map_or(CellValue::Missing, CellValue::Number))
            .collect(),
    )
}

fn integers(name: &str, values: &[i64]) -> Column {
    Column::new(
        name,
        ColumnKind::Integer,
        values.iter().copied().map(CellValue::Integer).collect(),
    )
}

fn customers() -> Table {
    Table::from_columns(vec![
        Column::from_text("Churn", &[Some("Yes"), Some("No"), Some("No"), Some("Yes")]),
        Column::from_text(
            "Contract",
            &[
                Some("Month-to-month"),
                Some("One year"),
                Some("Month-to-month"),
                Some("Month-to-month"),
            ],
        ),
        numbers(
            "MonthlyCharges",
            &[Some(70.0), Some(50.0), Some(30.0), Some(90.0)],
        ),
        integers("tenure", &[2, 30, 10, 4]),
    ])
    .expect("build table")
}

#[test]
fn counts_churn_and_contracts() {
    let summary = describe(&customers(), &DescribeColumns::default()).expect("describe");

    assert_eq!(summary.customers, 4);
    assert_eq!(
        summary.churn_distribution,
        vec![
            CategoryCount {
                category: "No".to_string(),
                customers: 2
            },
            CategoryCount {
                category: "Yes".to_string(),
                customers: 2
            },
        ]
    );
    assert_eq!(
        summary.churn_by_contract,
        vec![
            ChurnByCategory {
                category: "Month-to-month".to_string(),
                churn: "No".to_string(),
                customers: 1
            },
            ChurnByCategory {
                category: "Month-to-month".to_string(),
                churn: "Yes".to_string(),
                customers: 2
            },
            ChurnByCategory {
                category: "One year".to_string(),
                churn: "No".to_string(),
                customers: 1
            },
        ]
    );
}

#[test]
fn numeric_stats_split_by_churn() {
    let summary = describe(&customers(), &DescribeColumns::default()).expect("describe");

    let charges = &summary.monthly_charges_by_churn;
    assert_eq!(charges.len(), 2);
    assert_eq!(charges[0].churn, "No");
    assert_eq!(charges[0].count, 2);
    assert_eq!(charges[0].mean, Some(40.0));
    assert_eq!(charges[0].median, Some(40.0));
    assert_eq!(charges[0].min, Some(30.0));
    assert_eq!(charges[0].max, Some(50.0));
    assert_eq!(charges[1].churn, "Yes");
    assert_eq!(charges[1].mean, Some(80.0));

    let tenure = &summary.tenure_by_churn;
    assert_eq!(tenure[0].min, Some(10.0));
    assert_eq!(tenure[0].max, Some(30.0));
    assert_eq!(tenure[1].mean, Some(3.0));
    assert_eq!(tenure[1].median, Some(3.0));
}

#[test]
fn missing_values_are_grouped_and_excluded() {
    let table = Table::from_columns(vec![
        Column::from_text("Churn", &[Some("Yes"), None, Some("Yes")]),
        Column::from_text("Contract", &[Some("Two year"), Some("Two year"), None]),
        numbers("MonthlyCharges", &[Some(20.0), Some(25.0), None]),
        integers("tenure", &[60, 61, 62]),
    ])
    .expect("build table");
    let summary = describe(&table, &DescribeColumns::default()).expect("describe");

    let missing = summary
        .churn_distribution
        .iter()
        .find(|c| c.category == MISSING_LABEL)
        .expect("missing churn group");
    assert_eq!(missing.customers, 1);

    let yes = summary
        .monthly_charges_by_churn
        .iter()
        .find(|s| s.churn == "Yes")
        .expect("yes group");
    assert_eq!(yes.count, 1);
    assert_eq!(yes.mean, Some(20.0));

    assert!(
        summary
            .churn_by_contract
            .iter()
            .any(|c| c.category == MISSING_LABEL && c.churn == "Yes")
    );
}

#[test]
fn custom_column_names() {
    let table = Table::from_columns(vec![
        Column::from_text("left", &[Some("1")]),
        Column::from_text("plan", &[Some("Monthly")]),
        numbers("charge", &[Some(10.0)]),
        integers("months", &[3]),
    ])
    .expect("build table");
    let columns = DescribeColumns {
        churn: "left".to_string(),
        contract: "plan".to_string(),
        monthly_charges: "charge".to_string(),
        tenure: "months".to_string(),
    };
    let summary = describe(&table, &columns).expect("describe");
    assert_eq!(summary.churn_distribution[0].category, "1");
    assert_eq!(summary.tenure_by_churn[0].max, Some(3.0));
}

#[test]
fn empty_table_has_no_groups() {
    let table = Table::from_columns(vec![
        Column::from_text("Churn", &[] as &[Option<&str>]),
        Column::from_text("Contract", &[] as &[Option<&str>]),
        numbers("MonthlyCharges", &[]),
        integers("tenure", &[]),
    ])
    .expect("build table");
    let summary = describe(&table, &DescribeColumns::default()).expect("describe");
    assert_eq!(summary.customers, 0);
    assert!(summary.churn_distribution.is_empty());
    assert!(summary.tenure_by_churn.is_empty());
}

#[test]
fn absent_column_is_schema_error() {
    let mut table = customers();
    table.remove_column("Contract");
    let err = describe(&table, &DescribeColumns::default()).unwrap_err();
    assert!(matches!(err, ReportError::Schema(_)));
}

//! Plan interpreter.
//!
//! Executes [`TransformStep`]s in order against an owned table. The table is
//! threaded through the steps and only returned when every step succeeds.

use std::time::Instant;

use churn_model::{CleaningReport, Result, StepRecord, Table, ValueCoercionWarning};
use tracing::{info, info_span, warn};

use crate::config::PipelineConfig;
use crate::ops::{
    coerce_numeric_tracked, drop_column, drop_rows_with_missing, map_binary_tracked,
    one_hot_expand,
};
use crate::types::{TransformPlan, TransformStep};

/// Run every step of `plan` against `table`.
///
/// On a schema error the table is dropped and the error returned; there is no
/// partial result.
pub fn execute_plan(mut table: Table, plan: &TransformPlan) -> Result<(Table, CleaningReport)> {
    let started = Instant::now();
    let mut report = CleaningReport::new(table.height(), table.width());

    for (index, step) in plan.steps().iter().enumerate() {
        let span = info_span!("step", index, name = step.display_name());
        let _guard = span.enter();
        let record = apply_step(&mut table, step, &mut report)?;
        report.steps.push(record);
    }

    report.output_rows = table.height();
    report.output_columns = table.width();
    info!(
        input_rows = report.input_rows,
        output_rows = report.output_rows,
        rows_dropped = report.rows_dropped,
        coerced = report.total_coerced(),
        columns_added = report.columns_added.len(),
        columns_removed = report.columns_removed.len(),
        duration_ms = started.elapsed().as_millis(),
        "pipeline complete"
    );
    Ok((table, report))
}

fn apply_step(
    table: &mut Table,
    step: &TransformStep,
    report: &mut CleaningReport,
) -> Result<StepRecord> {
    let rows_before = table.height();
    let mut newly_missing = 0usize;

    match step {
        TransformStep::NumericCoerce { column } => {
            let mut warning = ValueCoercionWarning::new(step.display_name(), column);
            coerce_numeric_tracked(table, column, &mut warning)?;
            newly_missing = record_warning(report, warning);
        }
        TransformStep::DropRows { column } => {
            report.rows_dropped += drop_rows_with_missing(table, column)?;
        }
        TransformStep::DropColumn { column } => {
            let removed = drop_column(table, column)?;
            report.columns_removed.push(removed.name);
        }
        TransformStep::MapBinary { column, mapping } => {
            let mut warning = ValueCoercionWarning::new(step.display_name(), column);
            map_binary_tracked(table, column, mapping, &mut warning)?;
            newly_missing = record_warning(report, warning);
        }
        TransformStep::OneHotExpand { columns } => {
            let added = one_hot_expand(table, columns)?;
            report.columns_removed.extend(columns.iter().cloned());
            report.columns_added.extend(added);
        }
    }

    Ok(StepRecord {
        step: step.display_name().to_string(),
        columns: step.columns().into_iter().map(String::from).collect(),
        rows_before,
        rows_after: table.height(),
        newly_missing,
    })
}

fn record_warning(report: &mut CleaningReport, warning: ValueCoercionWarning) -> usize {
    let count = warning.count;
    if count > 0 {
        warn!(
            column = %warning.column,
            count,
            "values replaced with missing marker"
        );
    }
    report.add_coerced(&warning.column, count);
    report.add_warning(warning);
    count
}

/// Clean a raw churn table with the plan derived from `config`.
pub fn run(raw: Table, config: &PipelineConfig) -> Result<(Table, CleaningReport)> {
    execute_plan(raw, &TransformPlan::from_config(config))
}

/// [`run`] with the default Telco column layout.
pub fn run_default(raw: Table) -> Result<(Table, CleaningReport)> {
    run(raw, &PipelineConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use churn_model::{CellValue, Column, SchemaError};

    fn small() -> Table {
        Table::from_columns(vec![
            Column::from_text("id", &[Some("a"), Some("b"), Some("c")]),
            Column::from_text("charges", &[Some("1.5"), Some(" "), Some("3")]),
            Column::from_text("flag", &[Some("Yes"), Some("No"), Some("yess")]),
        ])
        .unwrap()
    }

    #[test]
    fn empty_plan_is_identity() {
        let (table, report) = execute_plan(small(), &TransformPlan::new()).unwrap();
        assert_eq!(table, small());
        assert_eq!(report.output_rows, 3);
        assert!(report.steps.is_empty());
    }

    #[test]
    fn report_tracks_each_step() {
        let plan: TransformPlan = [
            TransformStep::numeric_coerce("charges"),
            TransformStep::drop_rows("charges"),
            TransformStep::drop_column("id"),
            TransformStep::map_binary(
                "flag",
                [("Yes".to_string(), 1), ("No".to_string(), 0)]
                    .into_iter()
                    .collect(),
            ),
        ]
        .into_iter()
        .collect();

        let (table, report) = execute_plan(small(), &plan).unwrap();
        assert_eq!(table.column_names(), vec!["charges", "flag"]);
        assert_eq!(
            table.column("flag").unwrap().values,
            vec![CellValue::Integer(1), CellValue::Missing]
        );
        assert_eq!(report.rows_dropped, 1);
        assert_eq!(report.columns_removed, vec!["id"]);
        assert_eq!(report.coerced_to_missing.get("charges"), Some(&1));
        assert_eq!(report.coerced_to_missing.get("flag"), Some(&1));
        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.steps.len(), 4);
        assert_eq!(report.steps[1].rows_before, 3);
        assert_eq!(report.steps[1].rows_after, 2);
        assert_eq!(report.output_columns, 2);
    }

    #[test]
    fn schema_error_aborts() {
        let plan = TransformPlan::new()
            .with_step(TransformStep::drop_column("id"))
            .with_step(TransformStep::drop_column("id"));
        let err = execute_plan(small(), &plan).unwrap_err();
        assert_eq!(err, SchemaError::missing("id", "Drop Column"));
    }
}

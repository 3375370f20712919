use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use churn_model::{CleaningReport, format_number};
use churn_report::{GroupStats, MISSING_LABEL};
use churn_transform::{TransformPlan, TransformStep};

use crate::types::{CleanOutcome, DescribeOutcome};

pub fn print_clean_summary(outcome: &CleanOutcome) {
    let report = &outcome.report;
    println!("Input: {}", outcome.input.display());
    println!("Output: {}", outcome.output.display());
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell(""), header_cell("Rows"), header_cell("Columns")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(report.input_rows),
        Cell::new(report.input_columns),
    ]);
    table.add_row(vec![
        Cell::new("Output")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.output_rows).add_attribute(Attribute::Bold),
        Cell::new(report.output_columns).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Dropped / removed"),
        count_cell(report.rows_dropped, Color::Yellow),
        count_cell(report.columns_removed.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Added"),
        dim_cell("-"),
        count_cell(report.columns_added.len(), Color::Green),
    ]);
    println!("{table}");
    print_warning_table(report);
}

fn print_warning_table(report: &CleaningReport) {
    if !report.has_warnings() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Column"),
        header_cell("Replaced"),
        header_cell("Examples"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for warning in &report.warnings {
        let examples: Vec<String> = warning
            .examples
            .iter()
            .map(|example| format!("{example:?}"))
            .collect();
        table.add_row(vec![
            Cell::new(&warning.step),
            Cell::new(&warning.column),
            count_cell(warning.count, Color::Yellow),
            dim_cell(examples.join(", ")),
        ]);
    }
    println!();
    println!("Values replaced with missing:");
    println!("{table}");
}

pub fn print_describe(outcome: &DescribeOutcome) {
    println!("Input: {}", outcome.input.display());
    println!("Customers with usable charges: {}", outcome.rows);

    let mut columns = Table::new();
    columns.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Missing"),
    ]);
    apply_table_style(&mut columns);
    align_column(&mut columns, 2, CellAlignment::Right);
    for profile in &outcome.columns {
        columns.add_row(vec![
            Cell::new(&profile.name),
            dim_cell(profile.kind),
            count_cell(profile.missing, Color::Yellow),
        ]);
    }
    println!();
    println!("Columns (as loaded):");
    println!("{columns}");

    let summary = &outcome.summary;
    let mut churn = Table::new();
    churn.set_header(vec![header_cell("Churn"), header_cell("Customers")]);
    apply_table_style(&mut churn);
    align_column(&mut churn, 1, CellAlignment::Right);
    for row in &summary.churn_distribution {
        churn.add_row(vec![label_cell(&row.category), Cell::new(row.customers)]);
    }
    println!();
    println!("Churn distribution:");
    println!("{churn}");

    let mut contracts = Table::new();
    contracts.set_header(vec![
        header_cell("Contract"),
        header_cell("Churn"),
        header_cell("Customers"),
    ]);
    apply_table_style(&mut contracts);
    align_column(&mut contracts, 2, CellAlignment::Right);
    for row in &summary.churn_by_contract {
        contracts.add_row(vec![
            label_cell(&row.category),
            label_cell(&row.churn),
            Cell::new(row.customers),
        ]);
    }
    println!();
    println!("Churn by contract type:");
    println!("{contracts}");

    print_stats_table("Monthly charges by churn:", &summary.monthly_charges_by_churn);
    print_stats_table("Tenure by churn:", &summary.tenure_by_churn);
}

fn print_stats_table(title: &str, rows: &[GroupStats]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Churn"),
        header_cell("Count"),
        header_cell("Mean"),
        header_cell("Median"),
        header_cell("Min"),
        header_cell("Max"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in rows {
        table.add_row(vec![
            label_cell(&row.churn),
            Cell::new(row.count),
            stat_cell(row.mean),
            stat_cell(row.median),
            stat_cell(row.min),
            stat_cell(row.max),
        ]);
    }
    println!();
    println!("{title}");
    println!("{table}");
}

pub fn print_plan(plan: &TransformPlan) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Step"),
        header_cell("Columns"),
        header_cell("Mapping"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, step) in plan.steps().iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(step.display_name()),
            Cell::new(step.columns().join(", ")),
            mapping_cell(step),
        ]);
    }
    println!("{table}");
}

fn mapping_cell(step: &TransformStep) -> Cell {
    match step {
        TransformStep::MapBinary { mapping, .. } => {
            let pairs: Vec<String> = mapping
                .iter()
                .map(|(token, code)| format!("{token} => {code}"))
                .collect();
            Cell::new(pairs.join(", "))
        }
        _ => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn label_cell(label: &str) -> Cell {
    if label == MISSING_LABEL {
        dim_cell(label)
    } else {
        Cell::new(label)
    }
}

fn stat_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format_number((value * 100.0).round() / 100.0)),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

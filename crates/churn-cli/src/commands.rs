use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use tracing::{info, info_span, warn};

use churn_ingest::{IngestOptions, read_table, write_table};
use churn_model::Table;
use churn_report::{
    DescribeColumns, ReportFormat, describe, render_cleaning_report, write_report_text,
};
use churn_transform::{PipelineConfig, TransformPlan, TransformStep, execute_plan, run};

use crate::cli::{CleanArgs, DescribeArgs, PlanArgs};
use crate::types::{CleanOutcome, ColumnProfile, DescribeOutcome};

/// File name used when `clean` is given no `--output`.
pub const DEFAULT_OUTPUT_NAME: &str = "cleaned_telco_churn.csv";

pub fn run_clean(args: &CleanArgs) -> Result<CleanOutcome> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();
    let started = Instant::now();

    let config = load_config(args.config.as_deref())?;
    let options = ingest_options(args.delimiter)?;
    let raw = read_table(&args.input, &options)
        .with_context(|| format!("load {}", args.input.display()))?;
    let (table, report) = run(raw, &config).context("clean table")?;

    // The report is rendered before anything is written.
    let rendered = match &args.report {
        Some(path) => {
            let format = args
                .report_format
                .map_or_else(|| ReportFormat::from_path(path), ReportFormat::from);
            let text = render_cleaning_report(&report, format).context("render report")?;
            Some((path, text))
        }
        None => None,
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    write_table(&table, &output, options.delimiter)
        .with_context(|| format!("write {}", output.display()))?;

    if let Some((path, text)) = rendered {
        if let Err(error) = write_report_text(&text, path) {
            discard_output(&output);
            return Err(error).with_context(|| format!("write report {}", path.display()));
        }
        info!(path = %path.display(), "cleaning report written");
    }

    info!(
        output = %output.display(),
        rows = report.output_rows,
        columns = report.output_columns,
        warnings = report.warnings.len(),
        duration_ms = started.elapsed().as_millis(),
        "clean complete"
    );
    Ok(CleanOutcome {
        input: args.input.clone(),
        output,
        report_path: args.report.clone(),
        report,
    })
}

fn discard_output(output: &Path) {
    if let Err(error) = fs::remove_file(output) {
        warn!(output = %output.display(), %error, "failed to remove output after report error");
    }
}

pub fn run_describe(args: &DescribeArgs) -> Result<DescribeOutcome> {
    let span = info_span!("describe", input = %args.input.display());
    let _guard = span.enter();

    let config = load_config(args.config.as_deref())?;
    let options = ingest_options(args.delimiter)?;
    let raw = read_table(&args.input, &options)
        .with_context(|| format!("load {}", args.input.display()))?;
    let columns = profile_columns(&raw);

    // Rows without usable total charges are excluded, as in cleaning.
    let plan = TransformPlan::new()
        .with_step(TransformStep::numeric_coerce(&config.charges_column))
        .with_step(TransformStep::drop_rows(&config.charges_column));
    let (usable, _) = execute_plan(raw, &plan).context("prepare table")?;

    let describe_columns = DescribeColumns {
        churn: config.target_column.clone(),
        contract: config.contract_column.clone(),
        monthly_charges: config.monthly_charges_column.clone(),
        tenure: config.tenure_column.clone(),
    };
    let summary = describe(&usable, &describe_columns).context("compute summary")?;
    Ok(DescribeOutcome {
        input: args.input.clone(),
        rows: usable.height(),
        columns,
        summary,
    })
}

pub fn run_plan(args: &PlanArgs) -> Result<TransformPlan> {
    let config = load_config(args.config.as_deref())?;
    Ok(TransformPlan::from_config(&config))
}

fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => {
            let config = PipelineConfig::from_json_file(path).context("load pipeline config")?;
            info!(path = %path.display(), "pipeline config loaded");
            Ok(config)
        }
        None => Ok(PipelineConfig::default()),
    }
}

fn ingest_options(delimiter: char) -> Result<IngestOptions> {
    ensure!(
        delimiter.is_ascii(),
        "delimiter must be a single ASCII character, got {delimiter:?}"
    );
    Ok(IngestOptions::default().with_delimiter(delimiter as u8))
}

pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_file_name(DEFAULT_OUTPUT_NAME)
}

fn profile_columns(table: &Table) -> Vec<ColumnProfile> {
    table
        .columns()
        .iter()
        .map(|column| ColumnProfile {
            name: column.name.clone(),
            kind: column.kind,
            missing: column.missing_count(),
        })
        .collect()
}

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvReadOptions, DataFrame};
use tracing::{debug, info};

use naics_model::ColumnCheck;
use naics_validate::{
    SelfCheckReport, check_frame_column, run_self_check, write_column_check_report_json,
    write_self_check_report_json,
};

use crate::cli::{CheckArgs, CodesArgs, DiagnoseArgs};
use crate::config::resolve_rule;
use crate::summary::{print_check_summary, print_checklist, print_codes};

pub fn run_diagnose(args: &DiagnoseArgs) -> Result<SelfCheckReport> {
    let rule = resolve_rule(args.rule_config.as_deref(), args.codes_csv.as_deref())?;
    info!(
        rule = %rule.name,
        codes = rule.code_set.len(),
        fixtures = rule.examples.len(),
        "running self-check"
    );

    let report = run_self_check(&rule)?;
    print_checklist(&rule, &report);
    if let Some(dir) = &args.report_dir {
        let path = write_self_check_report_json(dir, &report)?;
        println!("Report: {}", path.display());
    }
    Ok(report)
}

pub fn run_check(args: &CheckArgs) -> Result<ColumnCheck> {
    let rule = resolve_rule(args.rule_config.as_deref(), args.codes_csv.as_deref())?;
    let df = read_csv(&args.input)?;
    debug!(
        rows = df.height(),
        columns = df.width(),
        "loaded input file"
    );

    let check = check_frame_column(&rule, &df, &args.column)
        .with_context(|| format!("check column {:?} of {}", args.column, args.input.display()))?;
    print_check_summary(&rule, &args.input, &df, &check, args.max_rows);
    if let Some(dir) = &args.report_dir {
        let source = args.input.display().to_string();
        let path = write_column_check_report_json(dir, &rule.name, &source, &check)?;
        println!("Report: {}", path.display());
    }
    Ok(check)
}

pub fn run_codes(args: &CodesArgs) -> Result<()> {
    let rule = resolve_rule(args.rule_config.as_deref(), args.codes_csv.as_deref())?;
    print_codes(&rule);
    Ok(())
}

fn read_csv(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("open csv: {}", path.display()))?
        .finish()
        .with_context(|| format!("read csv: {}", path.display()))
}

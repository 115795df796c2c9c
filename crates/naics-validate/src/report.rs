//! Versioned JSON report payloads.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use naics_model::ColumnCheck;
use serde::Serialize;

use crate::selfcheck::{CheckOutcome, SelfCheckReport};

const REPORT_SCHEMA: &str = "naics-check.report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct SelfCheckPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    rule: &'a str,
    passed: usize,
    failed: usize,
    skipped: usize,
    outcomes: &'a [CheckOutcome],
}

/// Write a self-check report as `self_check_report.json` under `output_dir`.
pub fn write_self_check_report_json(
    output_dir: &Path,
    report: &SelfCheckReport,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("self_check_report.json");
    let payload = SelfCheckPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        rule: &report.rule,
        passed: report.passed_count(),
        failed: report.failed_count(),
        skipped: report.skipped_count(),
        outcomes: &report.outcomes,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}

#[derive(Debug, Serialize)]
struct ColumnCheckPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    rule: &'a str,
    /// Input the column came from (file path or dataset label).
    source: &'a str,
    check: &'a ColumnCheck,
}

/// Write an ad-hoc column check as `column_check_report.json` under `output_dir`.
pub fn write_column_check_report_json(
    output_dir: &Path,
    rule: &str,
    source: &str,
    check: &ColumnCheck,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("column_check_report.json");
    let payload = ColumnCheckPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        rule,
        source,
        check,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}

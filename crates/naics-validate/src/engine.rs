//! Set-membership checks over tabular columns.
//!
//! Every entry point takes the rule definition by reference; there is
//! no registration step. The check canonicalizes each cell once, looks
//! it up in the reference set, and reports failing row positions.

use naics_model::{Cell, CodeSet, ColumnCheck, Result, RuleDefinition, RuleError};
use polars::prelude::DataFrame;

use crate::source::{CellColumn, ColumnSource, FrameColumn};

/// Cap on distinct offending values carried in a check result.
pub const MAX_REPORTED_VALUES: usize = 20;

/// Check a column of in-memory cells.
pub fn check_cells(rule: &RuleDefinition, column: &str, cells: &[Cell]) -> Result<ColumnCheck> {
    check_against_set(&rule.code_set, column, &CellColumn(cells))
}

/// Check a named dataframe column.
pub fn check_frame_column(
    rule: &RuleDefinition,
    df: &DataFrame,
    column: &str,
) -> Result<ColumnCheck> {
    let source = FrameColumn::new(df, column)
        .ok_or_else(|| RuleError::MissingColumn(column.to_string()))?;
    check_against_set(&rule.code_set, column, &source)
}

/// Check an arbitrary column source against the rule's reference set.
pub fn check_source(
    rule: &RuleDefinition,
    column: &str,
    source: &impl ColumnSource,
) -> Result<ColumnCheck> {
    check_against_set(&rule.code_set, column, source)
}

fn check_against_set(
    set: &CodeSet,
    column: &str,
    source: &impl ColumnSource,
) -> Result<ColumnCheck> {
    if set.is_empty() {
        return Err(RuleError::EmptyCodeSet);
    }

    let mut element_count = 0usize;
    let mut unexpected_index_list = Vec::new();
    let mut unexpected_values: Vec<String> = Vec::new();
    for idx in 0..source.len() {
        let Some(canonical) = source.cell(idx) else {
            continue;
        };
        element_count += 1;
        if set.contains_canonical(&canonical) {
            continue;
        }
        unexpected_index_list.push(idx);
        if unexpected_values.len() < MAX_REPORTED_VALUES && !unexpected_values.contains(&canonical)
        {
            unexpected_values.push(canonical);
        }
    }

    Ok(ColumnCheck {
        column: column.to_string(),
        success: unexpected_index_list.is_empty(),
        element_count,
        unexpected_count: unexpected_index_list.len(),
        unexpected_index_list,
        unexpected_values,
    })
}

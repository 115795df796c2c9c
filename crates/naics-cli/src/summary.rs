use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use naics_model::{ColumnCheck, RuleDefinition};
use naics_validate::{CheckStatus, SelfCheckReport, any_to_canonical};

pub fn print_checklist(rule: &RuleDefinition, report: &SelfCheckReport) {
    println!("Rule: {}", report.rule);
    println!("Codes: {} ({})", rule.code_set.len(), rule.code_set.label);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Fixture"),
        header_cell("Test"),
        header_cell("Backend"),
        header_cell("Status"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for outcome in &report.outcomes {
        let (status_cell, detail) = match &outcome.status {
            CheckStatus::Passed => (Cell::new("pass").fg(Color::Green), String::new()),
            CheckStatus::Failed { reason } => (
                Cell::new("FAIL")
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
                reason.clone(),
            ),
            CheckStatus::Skipped { reason } => {
                (Cell::new("skip").fg(Color::DarkGrey), reason.clone())
            }
        };
        table.add_row(vec![
            Cell::new(outcome.fixture),
            Cell::new(&outcome.test),
            Cell::new(outcome.backend),
            status_cell,
            Cell::new(detail),
        ]);
    }
    println!("{table}");
    println!(
        "{} passed, {} failed, {} skipped",
        report.passed_count(),
        report.failed_count(),
        report.skipped_count()
    );
}

pub fn print_check_summary(
    rule: &RuleDefinition,
    input: &Path,
    df: &DataFrame,
    check: &ColumnCheck,
    max_rows: usize,
) {
    println!("Rule: {}", rule.name);
    println!("Input: {}", input.display());
    println!("Column: {}", check.column);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Cells"),
        header_cell("Unexpected"),
        header_cell("Result"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(check.element_count),
        count_cell(check.unexpected_count, Color::Red),
        result_cell(check.success),
    ]);
    println!("{table}");

    if check.success || max_rows == 0 {
        return;
    }

    let mut rows = Table::new();
    rows.set_header(vec![header_cell("Row"), header_cell("Value")]);
    apply_table_style(&mut rows);
    align_column(&mut rows, 0, CellAlignment::Right);
    let series = df.column(&check.column).ok();
    for idx in check.unexpected_index_list.iter().take(max_rows) {
        let value = series
            .and_then(|series| {
                let cell = series.get(*idx).unwrap_or(AnyValue::Null);
                any_to_canonical(&cell)
            })
            .unwrap_or_default();
        rows.add_row(vec![Cell::new(idx), Cell::new(value)]);
    }
    println!("{rows}");
    let remaining = check.unexpected_index_list.len().saturating_sub(max_rows);
    if remaining > 0 {
        println!("... {remaining} more row(s)");
    }
}

pub fn print_codes(rule: &RuleDefinition) {
    println!("Code set: {}", rule.code_set.label);
    if let Some(source) = &rule.code_set.source {
        println!("Source: {source}");
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Title")]);
    apply_table_style(&mut table);
    for entry in rule.code_set.iter() {
        table.add_row(vec![Cell::new(&entry.code), Cell::new(&entry.title)]);
    }
    println!("{table}");
    println!("{} code(s)", rule.code_set.len());
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn result_cell(success: bool) -> Cell {
    if success {
        Cell::new("pass").fg(Color::Green)
    } else {
        Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

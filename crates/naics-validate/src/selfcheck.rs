//! Fixture self-checking.
//!
//! Runs a rule's bundled examples through the evaluation engine and
//! compares observed outcomes with the declared expectations. Every
//! fixture is evaluated once per declared backend and test case, so a
//! mismatch pins down exactly which combination diverged.

use naics_model::{
    Backend, Cell, ColumnCheck, ExampleFixture, ExampleTest, ExpectedOutcome, Result,
    RuleDefinition, RuleError,
};
use polars::prelude::{Column, DataFrame, Series};
use serde::Serialize;

use crate::engine::{check_cells, check_frame_column};

/// Outcome status of one fixture check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum CheckStatus {
    Passed,
    Failed { reason: String },
    /// Declared backend this engine does not drive.
    Skipped { reason: String },
}

/// One fixture x backend x test evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    /// Index of the fixture within the rule's examples.
    pub fixture: usize,
    /// Test case title.
    pub test: String,
    pub backend: Backend,
    #[serde(flatten)]
    pub status: CheckStatus,
    /// What the engine computed, absent for skipped checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed: Option<ColumnCheck>,
}

/// Aggregate result of a rule's self-check.
#[derive(Debug, Clone, Serialize)]
pub struct SelfCheckReport {
    pub rule: String,
    pub outcomes: Vec<CheckOutcome>,
}

impl SelfCheckReport {
    pub fn passed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == CheckStatus::Passed)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.status, CheckStatus::Failed { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.status, CheckStatus::Skipped { .. }))
            .count()
    }

    /// True when no executed check diverged from its expectation.
    pub fn success(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Run every fixture x declared backend x test combination.
///
/// An empty reference set is a configuration error and fails the whole
/// run; individual mismatches are reported per check instead.
pub fn run_self_check(rule: &RuleDefinition) -> Result<SelfCheckReport> {
    if rule.code_set.is_empty() {
        return Err(RuleError::EmptyCodeSet);
    }

    let mut outcomes = Vec::new();
    for (fixture_idx, fixture) in rule.examples.iter().enumerate() {
        for spec in &fixture.backends {
            for test in &fixture.tests {
                let (status, observed) = match spec.backend {
                    Backend::InMemory => run_in_memory(rule, fixture, test),
                    Backend::DataFrame => run_data_frame(rule, fixture, test),
                    Backend::Sql => (
                        CheckStatus::Skipped {
                            reason: skip_reason(spec.dialects.as_deref()),
                        },
                        None,
                    ),
                };
                outcomes.push(CheckOutcome {
                    fixture: fixture_idx,
                    test: test.title.clone(),
                    backend: spec.backend,
                    status,
                    observed,
                });
            }
        }
    }

    Ok(SelfCheckReport {
        rule: rule.name.clone(),
        outcomes,
    })
}

fn run_in_memory(
    rule: &RuleDefinition,
    fixture: &ExampleFixture,
    test: &ExampleTest,
) -> (CheckStatus, Option<ColumnCheck>) {
    let Some(cells) = fixture.data.get(&test.column) else {
        return (missing_column_failure(&test.column), None);
    };
    match check_cells(rule, &test.column, cells) {
        Ok(check) => grade(&test.expected, check),
        Err(error) => (
            CheckStatus::Failed {
                reason: error.to_string(),
            },
            None,
        ),
    }
}

fn run_data_frame(
    rule: &RuleDefinition,
    fixture: &ExampleFixture,
    test: &ExampleTest,
) -> (CheckStatus, Option<ColumnCheck>) {
    let Some(cells) = fixture.data.get(&test.column) else {
        return (missing_column_failure(&test.column), None);
    };
    let frame = match single_column_frame(&test.column, cells) {
        Ok(frame) => frame,
        Err(error) => {
            return (
                CheckStatus::Failed {
                    reason: error.to_string(),
                },
                None,
            );
        }
    };
    match check_frame_column(rule, &frame, &test.column) {
        Ok(check) => grade(&test.expected, check),
        Err(error) => (
            CheckStatus::Failed {
                reason: error.to_string(),
            },
            None,
        ),
    }
}

fn missing_column_failure(column: &str) -> CheckStatus {
    CheckStatus::Failed {
        reason: format!("fixture data has no column named {column:?}"),
    }
}

fn skip_reason(dialects: Option<&[String]>) -> String {
    match dialects {
        Some(dialects) if !dialects.is_empty() => format!(
            "sql backend ({}) is executed by the host framework",
            dialects.join(", ")
        ),
        _ => "sql backend is executed by the host framework".to_string(),
    }
}

/// Build a one-column dataframe preserving the cells' dtypes.
///
/// All-integer columns become Int64, numeric columns Float64, anything
/// else falls back to strings. Nulls stay null in every case.
fn single_column_frame(name: &str, cells: &[Cell]) -> Result<DataFrame> {
    DataFrame::new(vec![fixture_column(name, cells)])
        .map_err(|error| RuleError::Message(format!("fixture dataframe: {error}")))
}

fn fixture_column(name: &str, cells: &[Cell]) -> Column {
    let all_int = cells
        .iter()
        .all(|cell| matches!(cell, Cell::Int(_) | Cell::Null));
    if all_int {
        let values: Vec<Option<i64>> = cells
            .iter()
            .map(|cell| match cell {
                Cell::Int(value) => Some(*value),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), values).into();
    }

    let all_numeric = cells
        .iter()
        .all(|cell| matches!(cell, Cell::Int(_) | Cell::Float(_) | Cell::Null));
    if all_numeric {
        let values: Vec<Option<f64>> = cells
            .iter()
            .map(|cell| match cell {
                Cell::Int(value) => Some(*value as f64),
                Cell::Float(value) => Some(*value),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), values).into();
    }

    let values: Vec<Option<String>> = cells
        .iter()
        .map(|cell| match cell {
            Cell::Null => None,
            Cell::Text(text) => Some(text.clone()),
            Cell::Int(value) => Some(value.to_string()),
            Cell::Float(value) => Some(value.to_string()),
        })
        .collect();
    Series::new(name.into(), values).into()
}

fn grade(expected: &ExpectedOutcome, observed: ColumnCheck) -> (CheckStatus, Option<ColumnCheck>) {
    let mut reasons = Vec::new();
    if observed.success != expected.success {
        reasons.push(format!(
            "expected success={}, observed success={}",
            expected.success, observed.success
        ));
    }
    if let Some(indices) = &expected.unexpected_index_list
        && &observed.unexpected_index_list != indices
    {
        reasons.push(format!(
            "expected unexpected indices {:?}, observed {:?}",
            indices, observed.unexpected_index_list
        ));
    }

    let status = if reasons.is_empty() {
        CheckStatus::Passed
    } else {
        CheckStatus::Failed {
            reason: reasons.join("; "),
        }
    };
    (status, Some(observed))
}

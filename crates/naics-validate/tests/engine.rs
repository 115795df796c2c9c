//! Unit tests for the column membership check.

use naics_model::{Cell, CodeSet, RuleDefinition, RuleError};
use naics_validate::{check_cells, check_frame_column};
use polars::prelude::{DataFrame, Series};

fn scenario_rule() -> RuleDefinition {
    let mut set = CodeSet::new("test codes");
    for code in ["11", "21", "311", "42", "51"] {
        set.insert(code, "");
    }
    RuleDefinition::new("expect_column_values_to_be_in_test_set", set)
}

fn text_cells(values: &[&str]) -> Vec<Cell> {
    values
        .iter()
        .map(|value| Cell::Text((*value).to_string()))
        .collect()
}

#[test]
fn all_reference_values_pass_as_strings() {
    let rule = scenario_rule();
    let cells = text_cells(&["11", "21", "311", "42", "51"]);

    let check = check_cells(&rule, "codes", &cells).unwrap();
    assert!(check.success);
    assert_eq!(check.element_count, 5);
    assert_eq!(check.unexpected_count, 0);
    assert!(check.unexpected_index_list.is_empty());
}

#[test]
fn invalid_positions_are_reported_in_order() {
    let rule = scenario_rule();
    let cells = text_cells(&["11", "112123", "21", "31", "311", "41", "42", "1"]);

    let check = check_cells(&rule, "codes", &cells).unwrap();
    assert!(!check.success);
    assert_eq!(check.unexpected_index_list, vec![1, 3, 5, 7]);
    assert_eq!(check.unexpected_count, 4);
    assert_eq!(check.unexpected_values, vec!["112123", "31", "41", "1"]);
}

#[test]
fn float_representations_pass() {
    let rule = scenario_rule();
    let cells: Vec<Cell> = [11.0, 21.0, 311.0, 42.0, 51.0]
        .into_iter()
        .map(Cell::Float)
        .collect();

    let check = check_cells(&rule, "codes", &cells).unwrap();
    assert!(check.success);
    assert_eq!(check.element_count, 5);
}

#[test]
fn integer_representations_pass() {
    let rule = scenario_rule();
    let cells: Vec<Cell> = [11, 21, 311, 42, 51].into_iter().map(Cell::Int).collect();

    let check = check_cells(&rule, "codes", &cells).unwrap();
    assert!(check.success);
}

#[test]
fn blank_and_null_cells_are_skipped() {
    let rule = scenario_rule();
    let cells = vec![
        Cell::Null,
        Cell::Text("  ".to_string()),
        Cell::Text(" 11 ".to_string()),
    ];

    let check = check_cells(&rule, "codes", &cells).unwrap();
    assert!(check.success);
    assert_eq!(check.element_count, 1);
}

#[test]
fn repeated_offenders_are_deduplicated_in_values_but_not_indices() {
    let rule = scenario_rule();
    let cells = text_cells(&["99", "11", "99"]);

    let check = check_cells(&rule, "codes", &cells).unwrap();
    assert_eq!(check.unexpected_index_list, vec![0, 2]);
    assert_eq!(check.unexpected_count, 2);
    assert_eq!(check.unexpected_values, vec!["99"]);
}

#[test]
fn rechecking_is_idempotent() {
    let rule = scenario_rule();
    let cells = text_cells(&["11", "99", "21", "98"]);

    let first = check_cells(&rule, "codes", &cells).unwrap();
    let second = check_cells(&rule, "codes", &cells).unwrap();
    assert_eq!(first, second);
}

#[test]
fn dataframe_backend_matches_in_memory() {
    let rule = scenario_rule();
    let raw = ["11", "112123", "21", "31", "311", "41", "42", "1"];
    let cells = text_cells(&raw);
    let df = DataFrame::new(vec![
        Series::new("codes".into(), raw.to_vec()).into(),
    ])
    .unwrap();

    let in_memory = check_cells(&rule, "codes", &cells).unwrap();
    let from_frame = check_frame_column(&rule, &df, "codes").unwrap();
    assert_eq!(in_memory, from_frame);
}

#[test]
fn dataframe_floats_match_in_memory_strings() {
    let rule = scenario_rule();
    let df = DataFrame::new(vec![
        Series::new("codes".into(), vec![11.0, 21.0, 311.0, 42.0, 51.0]).into(),
    ])
    .unwrap();

    let from_frame = check_frame_column(&rule, &df, "codes").unwrap();
    let in_memory = check_cells(&rule, "codes", &text_cells(&["11", "21", "311", "42", "51"]))
        .unwrap();
    assert_eq!(from_frame, in_memory);
}

#[test]
fn missing_column_is_an_error() {
    let rule = scenario_rule();
    let df = DataFrame::new(vec![Series::new("other".into(), vec!["11"]).into()]).unwrap();

    let error = check_frame_column(&rule, &df, "codes").unwrap_err();
    assert!(matches!(error, RuleError::MissingColumn(name) if name == "codes"));
}

#[test]
fn empty_code_set_is_rejected() {
    let rule = RuleDefinition::new("empty", CodeSet::new("empty"));

    let error = check_cells(&rule, "codes", &text_cells(&["11"])).unwrap_err();
    assert!(matches!(error, RuleError::EmptyCodeSet));
}

#[test]
fn null_rows_keep_absolute_positions() {
    let rule = scenario_rule();
    let cells = vec![
        Cell::Text("11".to_string()),
        Cell::Null,
        Cell::Text("99".to_string()),
    ];

    let check = check_cells(&rule, "codes", &cells).unwrap();
    assert_eq!(check.unexpected_index_list, vec![2]);
    assert_eq!(check.element_count, 2);
}

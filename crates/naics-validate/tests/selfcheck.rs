//! Self-check runs over bundled example fixtures.

use std::collections::BTreeMap;

use naics_codes::builtin_rule;
use naics_model::{
    Backend, BackendSpec, Cell, CodeSet, ExampleFixture, ExampleTest, ExpectedOutcome,
    RuleDefinition, RuleError,
};
use naics_validate::{CheckStatus, run_self_check};

#[test]
fn builtin_examples_pass_on_executed_backends() {
    let rule = builtin_rule();
    let report = run_self_check(&rule).unwrap();

    let failures: Vec<_> = report
        .outcomes
        .iter()
        .filter(|outcome| matches!(outcome.status, CheckStatus::Failed { .. }))
        .collect();
    assert!(failures.is_empty(), "unexpected failures: {failures:?}");
    // 4 tests on each of the in-memory and dataframe backends.
    assert_eq!(report.passed_count(), 8);
    // The sql backend is declared but not driven by this engine.
    assert_eq!(report.skipped_count(), 4);
    assert!(report.success());
}

#[test]
fn in_memory_and_dataframe_outcomes_agree() {
    let rule = builtin_rule();
    let report = run_self_check(&rule).unwrap();

    for outcome in &report.outcomes {
        let Some(observed) = &outcome.observed else {
            continue;
        };
        let twin = report.outcomes.iter().find(|other| {
            other.test == outcome.test
                && other.fixture == outcome.fixture
                && other.backend != outcome.backend
                && other.observed.is_some()
        });
        if let Some(twin) = twin {
            assert_eq!(
                Some(observed),
                twin.observed.as_ref(),
                "backends disagree on {}",
                outcome.test
            );
        }
    }
}

fn single_test_rule(expected: ExpectedOutcome) -> RuleDefinition {
    let mut set = CodeSet::new("test codes");
    set.insert("11", "");
    let mut data = BTreeMap::new();
    data.insert(
        "codes".to_string(),
        vec![Cell::Text("11".to_string()), Cell::Text("99".to_string())],
    );
    let mut rule = RuleDefinition::new("expect_column_values_to_be_in_test_set", set);
    rule.examples.push(ExampleFixture {
        data,
        tests: vec![ExampleTest {
            title: "single".to_string(),
            column: "codes".to_string(),
            expected,
            include_in_gallery: false,
        }],
        backends: vec![BackendSpec::new(Backend::InMemory)],
    });
    rule
}

#[test]
fn mismatched_expectation_is_a_self_test_failure() {
    let rule = single_test_rule(ExpectedOutcome {
        success: true,
        unexpected_index_list: None,
    });

    let report = run_self_check(&rule).unwrap();
    assert_eq!(report.failed_count(), 1);
    assert!(!report.success());
}

#[test]
fn matching_expectation_with_pinned_indices_passes() {
    let rule = single_test_rule(ExpectedOutcome {
        success: false,
        unexpected_index_list: Some(vec![1]),
    });

    let report = run_self_check(&rule).unwrap();
    assert_eq!(report.passed_count(), 1);
    assert!(report.success());
}

#[test]
fn wrong_pinned_indices_are_a_self_test_failure() {
    let rule = single_test_rule(ExpectedOutcome {
        success: false,
        unexpected_index_list: Some(vec![0]),
    });

    let report = run_self_check(&rule).unwrap();
    assert_eq!(report.failed_count(), 1);
}

#[test]
fn test_naming_a_missing_column_fails() {
    let mut rule = single_test_rule(ExpectedOutcome {
        success: false,
        unexpected_index_list: Some(vec![1]),
    });
    rule.examples[0].tests[0].column = "absent".to_string();

    let report = run_self_check(&rule).unwrap();
    assert_eq!(report.failed_count(), 1);
}

#[test]
fn empty_code_set_fails_the_whole_run() {
    let rule = RuleDefinition::new("empty", CodeSet::new("empty"));

    let error = run_self_check(&rule).unwrap_err();
    assert!(matches!(error, RuleError::EmptyCodeSet));
}

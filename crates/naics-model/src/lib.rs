pub mod codeset;
pub mod error;
pub mod fixtures;
pub mod normalize;
pub mod outcome;
pub mod rule;

pub use codeset::{CodeEntry, CodeSet};
pub use error::{Result, RuleError};
pub use fixtures::{Backend, BackendSpec, Cell, ExampleFixture, ExampleTest, ExpectedOutcome};
pub use normalize::{canonical_code, canonical_f64};
pub use outcome::ColumnCheck;
pub use rule::{RuleDefinition, RuleMetadata};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_round_trips_through_json() {
        let mut set = CodeSet::new("test codes");
        set.insert("11", "Agriculture");
        set.insert("21", "Mining");
        let mut rule = RuleDefinition::new("expect_column_values_to_be_in_test_set", set);
        rule.metadata.tags.push("set-based".to_string());

        let json = serde_json::to_string(&rule).expect("serialize rule");
        let round: RuleDefinition = serde_json::from_str(&json).expect("deserialize rule");
        assert_eq!(round.name, rule.name);
        assert_eq!(round.code_set.len(), 2);
        assert!(round.code_set.contains("11.0"));
    }

    #[test]
    fn cells_round_trip_through_json() {
        let cells = vec![
            Cell::Null,
            Cell::Text("11".to_string()),
            Cell::Int(21),
            Cell::Float(311.0),
        ];
        let json = serde_json::to_string(&cells).expect("serialize cells");
        let round: Vec<Cell> = serde_json::from_str(&json).expect("deserialize cells");
        assert_eq!(round, cells);
    }
}

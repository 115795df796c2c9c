use serde::{Deserialize, Serialize};

use crate::codeset::CodeSet;
use crate::fixtures::ExampleFixture;

/// Gallery/documentation metadata carried by a rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleMetadata {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub contributors: Vec<String>,
}

/// A declarative set-membership validation rule.
///
/// The rule owns its reference set, descriptive metadata, and a battery
/// of example fixtures. It performs no computation itself; evaluation
/// engines take the definition by reference, so there is no registry
/// and no global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Rule identifier, e.g. "expect_column_values_to_be_in_naics_code_set".
    pub name: String,
    pub code_set: CodeSet,
    #[serde(default)]
    pub metadata: RuleMetadata,
    #[serde(default)]
    pub examples: Vec<ExampleFixture>,
}

impl RuleDefinition {
    pub fn new(name: impl Into<String>, code_set: CodeSet) -> Self {
        Self {
            name: name.into(),
            code_set,
            metadata: RuleMetadata::default(),
            examples: Vec::new(),
        }
    }
}

//! Example fixtures bundled with a rule.
//!
//! Fixtures carry sample column data, the outcomes an evaluation engine
//! is expected to produce for them, and the storage backends each
//! fixture is declared against. They double as the rule's regression
//! tests: the self-check runner executes every fixture and compares
//! observed outcomes with the declared ones.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::{canonical_code, canonical_f64};

/// A scalar cell as it appears in fixture data and in-memory columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Text(String),
    Int(i64),
    Float(f64),
}

impl Cell {
    /// Canonical code form of the cell, `None` when missing.
    ///
    /// Blank text and non-finite floats count as missing, matching how
    /// blank cells are skipped during validation.
    pub fn canonical(&self) -> Option<String> {
        match self {
            Cell::Null => None,
            Cell::Text(raw) => canonical_code(raw),
            Cell::Int(value) => Some(value.to_string()),
            Cell::Float(value) => value.is_finite().then(|| canonical_f64(*value)),
        }
    }
}

/// Storage/compute backend a fixture is declared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    InMemory,
    Sql,
    DataFrame,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Backend::InMemory => "in-memory",
            Backend::Sql => "sql",
            Backend::DataFrame => "dataframe",
        };
        f.write_str(label)
    }
}

/// A declared backend, optionally narrowed to specific dialects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSpec {
    pub backend: Backend,
    /// Dialects to cover (e.g., sqlite, postgresql for SQL backends).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialects: Option<Vec<String>>,
}

impl BackendSpec {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            dialects: None,
        }
    }

    #[must_use]
    pub fn with_dialects<I, S>(mut self, dialects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dialects = Some(dialects.into_iter().map(Into::into).collect());
        self
    }
}

/// Outcome an example test expects from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedOutcome {
    pub success: bool,
    /// Exact failing row positions, when the test pins them down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unexpected_index_list: Option<Vec<usize>>,
}

/// One named test case over a fixture's data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleTest {
    pub title: String,
    /// Column of the fixture's data to validate.
    pub column: String,
    pub expected: ExpectedOutcome,
    /// Whether the case is suitable for documentation galleries.
    #[serde(default)]
    pub include_in_gallery: bool,
}

/// Sample data plus the test cases that exercise it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleFixture {
    /// Sample columns keyed by column name.
    pub data: BTreeMap<String, Vec<Cell>>,
    pub tests: Vec<ExampleTest>,
    /// Backends this fixture is declared against.
    pub backends: Vec<BackendSpec>,
}

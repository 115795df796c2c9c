//! Reference sets of classification codes.
//!
//! A `CodeSet` is the fixed collection of values a set-membership rule
//! accepts. Entries are keyed by canonical form (see [`crate::normalize`])
//! so a membership check hits the same entry whether the column stored
//! the code as text, integer, or float.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::normalize::canonical_code;

/// A single classification code with its descriptive title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    /// The code as published (e.g., "311" or "31-33").
    pub code: String,
    /// Human-readable title (e.g., "Food Manufacturing").
    pub title: String,
}

/// A named reference set of permissible codes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeSet {
    /// Display label (e.g., "2022 NAICS US sectors and subsectors").
    pub label: String,
    /// Where the list came from (URL or file name).
    pub source: Option<String>,
    /// Entries keyed by canonical code.
    entries: BTreeMap<String, CodeEntry>,
}

impl CodeSet {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            source: None,
            entries: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Add a code. Blank codes are ignored; re-adding an existing code
    /// keeps the first entry.
    pub fn insert(&mut self, code: &str, title: &str) {
        let Some(key) = canonical_code(code) else {
            return;
        };
        self.entries.entry(key).or_insert_with(|| CodeEntry {
            code: code.trim().to_string(),
            title: title.trim().to_string(),
        });
    }

    /// Membership check after canonicalization.
    pub fn contains(&self, raw: &str) -> bool {
        canonical_code(raw).is_some_and(|key| self.entries.contains_key(&key))
    }

    /// Membership check for an already-canonical key.
    ///
    /// Evaluation engines canonicalize each cell once and look it up here.
    pub fn contains_canonical(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up the entry for a raw value.
    pub fn get(&self, raw: &str) -> Option<&CodeEntry> {
        let key = canonical_code(raw)?;
        self.entries.get(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in canonical-key order.
    pub fn iter(&self) -> impl Iterator<Item = &CodeEntry> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_representation_agnostic() {
        let mut set = CodeSet::new("test");
        set.insert("11", "Agriculture");
        assert!(set.contains("11"));
        assert!(set.contains("11.0"));
        assert!(set.contains(" 11 "));
        assert!(!set.contains("12"));
    }

    #[test]
    fn blank_codes_are_ignored() {
        let mut set = CodeSet::new("test");
        set.insert("  ", "nothing");
        assert!(set.is_empty());
    }

    #[test]
    fn first_title_wins_on_duplicates() {
        let mut set = CodeSet::new("test");
        set.insert("21", "Mining");
        set.insert("21.0", "Not mining");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("21").map(|e| e.title.as_str()), Some("Mining"));
    }
}

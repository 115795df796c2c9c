//! Column access across storage backends.
//!
//! The membership check itself is backend-agnostic: it only needs the
//! canonical form of each cell. `ColumnSource` is that seam; identical
//! logical data must canonicalize identically whatever the backing
//! store, which is what keeps outcomes reproducible across backends.

use naics_model::Cell;
use polars::prelude::{AnyValue, Column, DataFrame};

use crate::cell::any_to_canonical;

/// A column of scalar cells, independent of the storage backend.
pub trait ColumnSource {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Canonical code form of the cell at `idx`, `None` when missing.
    fn cell(&self, idx: usize) -> Option<String>;
}

/// In-memory cells, the representation used by example fixtures.
pub struct CellColumn<'a>(pub &'a [Cell]);

impl ColumnSource for CellColumn<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn cell(&self, idx: usize) -> Option<String> {
        self.0.get(idx).and_then(Cell::canonical)
    }
}

/// A polars dataframe column.
pub struct FrameColumn<'a> {
    column: &'a Column,
}

impl<'a> FrameColumn<'a> {
    /// Look up `name` in `df`; `None` when the column does not exist.
    pub fn new(df: &'a DataFrame, name: &str) -> Option<Self> {
        df.column(name).ok().map(|column| Self { column })
    }
}

impl ColumnSource for FrameColumn<'_> {
    fn len(&self) -> usize {
        self.column.len()
    }

    fn cell(&self, idx: usize) -> Option<String> {
        let value = self.column.get(idx).unwrap_or(AnyValue::Null);
        any_to_canonical(&value)
    }
}

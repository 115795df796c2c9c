use serde::{Deserialize, Serialize};

/// Result of checking one column against a reference code set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnCheck {
    /// Column that was checked.
    pub column: String,
    /// True when every non-missing cell belongs to the reference set.
    pub success: bool,
    /// Number of non-missing cells examined.
    pub element_count: usize,
    /// Number of cells that failed the membership check.
    pub unexpected_count: usize,
    /// 0-based row positions that failed, in ascending order.
    pub unexpected_index_list: Vec<usize>,
    /// Distinct offending values in canonical form, capped for reporting.
    pub unexpected_values: Vec<String>,
}

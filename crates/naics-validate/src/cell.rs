//! Polars `AnyValue` helpers for canonical code comparison.

use naics_model::{canonical_code, canonical_f64};
use polars::prelude::AnyValue;

/// Canonical code form of a dataframe cell, `None` when missing.
///
/// Nulls, blank strings and non-finite floats count as missing and are
/// skipped by validation rather than reported as unexpected.
pub fn any_to_canonical(value: &AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::String(s) => canonical_code(s),
        AnyValue::StringOwned(s) => canonical_code(s),
        AnyValue::Int8(v) => Some(v.to_string()),
        AnyValue::Int16(v) => Some(v.to_string()),
        AnyValue::Int32(v) => Some(v.to_string()),
        AnyValue::Int64(v) => Some(v.to_string()),
        AnyValue::UInt8(v) => Some(v.to_string()),
        AnyValue::UInt16(v) => Some(v.to_string()),
        AnyValue::UInt32(v) => Some(v.to_string()),
        AnyValue::UInt64(v) => Some(v.to_string()),
        AnyValue::Float32(v) => float_canonical(f64::from(*v)),
        AnyValue::Float64(v) => float_canonical(*v),
        other => canonical_code(&other.to_string()),
    }
}

fn float_canonical(value: f64) -> Option<String> {
    value.is_finite().then(|| canonical_f64(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representations_canonicalize_identically() {
        assert_eq!(
            any_to_canonical(&AnyValue::String("311")).as_deref(),
            Some("311")
        );
        assert_eq!(any_to_canonical(&AnyValue::Int64(311)).as_deref(), Some("311"));
        assert_eq!(
            any_to_canonical(&AnyValue::Float64(311.0)).as_deref(),
            Some("311")
        );
    }

    #[test]
    fn missing_values_yield_none() {
        assert_eq!(any_to_canonical(&AnyValue::Null), None);
        assert_eq!(any_to_canonical(&AnyValue::String("  ")), None);
        assert_eq!(any_to_canonical(&AnyValue::Float64(f64::NAN)), None);
    }
}

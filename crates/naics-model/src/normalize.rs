//! Canonical representation of classification codes.
//!
//! Codes arrive as text, integer, or floating-point values depending on
//! where the column was stored ("311", 311 and 311.0 are the same
//! subsector). The canonical form is the trimmed text rendering, with
//! integral floats folded onto their integer rendering so all three
//! representations compare equal.

/// Largest magnitude at which every integral f64 is exactly representable.
const MAX_EXACT_INTEGRAL: f64 = 9_007_199_254_740_992.0; // 2^53

/// Canonicalize a raw code value.
///
/// Returns `None` for blank input. Numeric text with an integral value
/// loses its fraction ("11.0" becomes "11"); any other text is trimmed
/// and kept verbatim, so ranged codes like "31-33" survive untouched.
pub fn canonical_code(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<f64>()
        && value.is_finite()
    {
        return Some(canonical_f64(value));
    }
    Some(trimmed.to_string())
}

/// Canonical rendering of a numeric code.
pub fn canonical_f64(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGRAL {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representations_share_one_canonical_form() {
        assert_eq!(canonical_code("11"), Some("11".to_string()));
        assert_eq!(canonical_code("11.0"), Some("11".to_string()));
        assert_eq!(canonical_code("  11 "), Some("11".to_string()));
        assert_eq!(canonical_f64(11.0), "11");
    }

    #[test]
    fn blank_input_is_missing() {
        assert_eq!(canonical_code(""), None);
        assert_eq!(canonical_code("   "), None);
    }

    #[test]
    fn non_numeric_codes_are_kept_verbatim() {
        assert_eq!(canonical_code("31-33"), Some("31-33".to_string()));
        assert_eq!(canonical_code(" 44-45 "), Some("44-45".to_string()));
    }

    #[test]
    fn fractional_values_keep_their_fraction() {
        assert_eq!(canonical_code("11.5"), Some("11.5".to_string()));
        assert_eq!(canonical_f64(11.5), "11.5");
    }
}

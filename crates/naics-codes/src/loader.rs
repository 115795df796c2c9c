//! CSV loading for full NAICS code editions.
//!
//! Census publishes the complete 6-digit code list as CSV; this loader
//! turns any file with `code` and `title` columns into a [`CodeSet`].

use std::path::Path;

use csv::ReaderBuilder;
use naics_model::CodeSet;

use crate::error::{CodesError, Result};

/// Load a code set from a CSV file.
///
/// Header matching is case-insensitive and BOM-tolerant; a `code` column
/// is required, a `title` column is optional. Rows with a blank code are
/// skipped, and duplicate codes keep their first title.
pub fn load_code_set_csv(path: &Path) -> Result<CodeSet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| CodesError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader
        .headers()
        .map_err(|source| CodesError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let code_idx = find_column(&headers, "code").ok_or(CodesError::MissingColumn {
        path: path.to_path_buf(),
        column: "code",
    })?;
    let title_idx = find_column(&headers, "title");

    let label = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("codes")
        .to_string();
    let source = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(String::from);
    let mut set = CodeSet::new(label);
    set.source = source;

    for record in reader.records() {
        let record = record.map_err(|source| CodesError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let code = record.get(code_idx).unwrap_or("").trim();
        if code.is_empty() {
            continue;
        }
        let title = title_idx
            .and_then(|idx| record.get(idx))
            .unwrap_or("")
            .trim();
        set.insert(code, title);
    }

    Ok(set)
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
}

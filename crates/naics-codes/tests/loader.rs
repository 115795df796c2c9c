//! Integration tests for the CSV code-set loader.

use std::io::Write;
use std::path::PathBuf;

use naics_codes::{CodesError, load_code_set_csv};

fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create csv");
    file.write_all(contents.as_bytes()).expect("write csv");
    path
}

#[test]
fn loads_code_and_title_columns() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "naics_2022_full.csv",
        "code,title\n111110,Soybean Farming\n111120,Oilseed (except Soybean) Farming\n",
    );

    let set = load_code_set_csv(&path).expect("load code set");
    assert_eq!(set.len(), 2);
    assert_eq!(set.label, "naics_2022_full");
    assert_eq!(set.source.as_deref(), Some("naics_2022_full.csv"));
    assert!(set.contains("111110"));
    assert!(set.contains("111110.0"));
    assert_eq!(
        set.get("111110").map(|entry| entry.title.as_str()),
        Some("Soybean Farming")
    );
}

#[test]
fn header_match_is_case_insensitive_and_bom_tolerant() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "codes.csv",
        "\u{feff}Code,Title\n11,Agriculture\n21,Mining\n",
    );

    let set = load_code_set_csv(&path).expect("load code set");
    assert_eq!(set.len(), 2);
    assert!(set.contains("11"));
}

#[test]
fn blank_codes_are_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(&dir, "codes.csv", "code,title\n11,Agriculture\n,Blank\n");

    let set = load_code_set_csv(&path).expect("load code set");
    assert_eq!(set.len(), 1);
}

#[test]
fn missing_code_column_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(&dir, "codes.csv", "naics,title\n11,Agriculture\n");

    let error = load_code_set_csv(&path).expect_err("loader should reject");
    assert!(matches!(
        error,
        CodesError::MissingColumn { column: "code", .. }
    ));
}

#[test]
fn title_column_is_optional() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(&dir, "codes.csv", "code\n11\n21\n");

    let set = load_code_set_csv(&path).expect("load code set");
    assert_eq!(set.len(), 2);
    assert_eq!(set.get("21").map(|entry| entry.title.as_str()), Some(""));
}

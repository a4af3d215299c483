//! Tests for the line reader

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

#[test]
fn test_classify_valid_second_column() {
    assert_eq!(classify_line("a 10.0"), LineOutcome::Parsed(10.0));
}

#[test]
fn test_classify_comma_decimal_separator() {
    assert_eq!(classify_line("b 20,5"), LineOutcome::Parsed(20.5));
}

#[test]
fn test_classify_negative_and_exponent_notation() {
    assert_eq!(classify_line("t -3.25"), LineOutcome::Parsed(-3.25));
    assert_eq!(classify_line("t 1e3"), LineOutcome::Parsed(1000.0));
}

#[test]
fn test_classify_too_few_columns() {
    assert_eq!(classify_line(""), LineOutcome::TooFewColumns);
    assert_eq!(classify_line("lonely"), LineOutcome::TooFewColumns);
}

#[test]
fn test_classify_non_numeric_second_column() {
    assert_eq!(classify_line("c notanumber"), LineOutcome::Invalid);
    assert_eq!(classify_line("c 12.3.4"), LineOutcome::Invalid);
}

#[test]
fn test_classify_ignores_extra_trailing_columns() {
    assert_eq!(classify_line("q17 4.5 extra junk"), LineOutcome::Parsed(4.5));
}

#[test]
fn test_classify_splits_on_any_whitespace_run() {
    assert_eq!(classify_line("a\t\t 7.5"), LineOutcome::Parsed(7.5));
}

#[test]
fn test_read_values_all_valid() {
    let file = fixture("a 1.0\nb 2.0\nc 3.0\n");
    let values = read_values(file.path()).unwrap();
    assert_eq!(values, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_read_values_skips_invalid_and_short_lines() {
    let file = fixture("a 10.0\nb 20,5\nc notanumber\nshort\nd 5.0\n");
    let values = read_values(file.path()).unwrap();
    assert_eq!(values, vec![10.0, 20.5, 5.0]);
}

#[test]
fn test_read_values_preserves_line_order() {
    let file = fixture("x 3.0\ny 1.0\nz 2.0\n");
    let values = read_values(file.path()).unwrap();
    assert_eq!(values, vec![3.0, 1.0, 2.0]);
}

#[test]
fn test_read_values_empty_file() {
    let file = fixture("");
    let values = read_values(file.path()).unwrap();
    assert!(values.is_empty());
}

#[test]
fn test_read_values_missing_file() {
    let result = read_values(std::path::Path::new("no/such/file.txt"));
    assert!(matches!(result, Err(ColstatsError::FileNotFound)));
}

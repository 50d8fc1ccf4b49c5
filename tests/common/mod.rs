//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use csved::{decode, Row, TableModel};

/// Build a row from (header, value) pairs
pub fn row(pairs: &[(&str, &str)]) -> Row {
    Row::from_pairs(pairs.iter().copied())
}

/// A small two-column model with two data rows
pub fn people_model() -> TableModel {
    decode("name,age\nAlice,30\nBob,25").unwrap()
}

/// Assert that every row's key set equals the header set exactly
pub fn assert_rows_match_headers(model: &TableModel) {
    use std::collections::BTreeSet;

    let header_set: BTreeSet<&str> = model.headers().iter().map(String::as_str).collect();
    for row in model.rows() {
        let key_set: BTreeSet<&str> = row.iter().map(|(k, _)| k).collect();
        assert_eq!(key_set, header_set);
    }
}

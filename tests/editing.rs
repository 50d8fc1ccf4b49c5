//! Editing session tests: decode → CRUD → encode flows

mod common;

use common::{assert_rows_match_headers, people_model, row};
use csved::{decode, encode, Row, TableError, TableModel};

#[test]
fn test_full_editing_session() {
    let mut model = people_model();

    model
        .add_row(&row(&[("name", "Carol"), ("age", "41")]))
        .unwrap();
    model.update_row(0, &row(&[("name", "Alice"), ("age", "31")])).unwrap();
    model.delete_row(1).unwrap();

    assert_eq!(encode(&model), "name,age\nAlice,31\nCarol,41");
}

#[test]
fn test_rows_always_match_headers_after_edits() {
    let mut model = people_model();

    model.add_row(&row(&[("name", "Carol")])).unwrap();
    model.add_row(&row(&[("city", "Oslo")])).unwrap();
    model.update_row(0, &Row::new()).unwrap();

    assert_rows_match_headers(&model);
}

#[test]
fn test_short_and_long_decoded_rows_match_headers() {
    let model = decode("a,b,c\n1\n1,2,3,4,5\n,,").unwrap();
    assert_rows_match_headers(&model);
}

#[test]
fn test_update_row_out_of_range_on_two_row_model() {
    let mut model = people_model();
    assert_eq!(model.row_count(), 2);

    let err = model
        .update_row(5, &row(&[("name", "Mallory")]))
        .unwrap_err();
    assert_eq!(
        err,
        TableError::IndexOutOfRange {
            index: 5,
            row_count: 2
        }
    );
}

#[test]
fn test_delete_then_add_restores_row_count() {
    let mut model = people_model();
    let before = model.row_count();

    let removed = model.delete_row(0).unwrap();
    model.add_row(&removed).unwrap();

    assert_eq!(model.row_count(), before);
}

#[test]
fn test_reset_discards_document() {
    let mut model = people_model();
    model.reset();

    assert!(!model.is_loaded());
    assert_eq!(
        model.add_row(&row(&[("name", "Eve")])),
        Err(TableError::NotLoaded)
    );
}

#[test]
fn test_new_document_then_edit() {
    let mut model = TableModel::with_headers(vec!["x".to_string(), "y".to_string()]);

    model.add_row(&row(&[("x", "1"), ("y", "2")])).unwrap();
    model.add_row(&row(&[("y", "4")])).unwrap();

    assert_eq!(encode(&model), "x,y\n1,2\n,4");
}

#[test]
fn test_errors_are_displayable() {
    let mut model = TableModel::new();

    let err = model.delete_row(3).unwrap_err();
    assert_eq!(err.to_string(), "no document loaded");

    let mut model = people_model();
    let err = model.delete_row(9).unwrap_err();
    assert_eq!(
        err.to_string(),
        "row index 9 out of range (table has 2 rows)"
    );
}

//! Tests for INSERT statements: column lists, value lists, and the
//! arity and type checks between them.

mod common;
use common::*;

use sqlcheck_core::{DataType, Error, ErrorKind, ValidationError, ValueKind};

#[test]
fn insert_without_columns() {
    check_ok("INSERT INTO users VALUES (1, 'Bob', 'b@x.com');");
}

#[test]
fn insert_with_matching_columns() {
    check_ok("INSERT INTO users (id, name, email) VALUES (1, 'Alice', 'alice@example.com');");
}

#[test]
fn insert_identifier_values_pass_type_checks() {
    check_ok("INSERT INTO users (id, name) VALUES (next_id, default_name);");
}

#[test]
fn insert_unknown_columns_accept_anything() {
    check_ok("INSERT INTO flags (enabled, created_at) VALUES (1, 'today');");
}

#[test]
fn insert_decimal_into_number_column() {
    check_ok("INSERT INTO items (price) VALUES (9.99);");
}

#[test]
fn insert_wildcard_column_list() {
    check_ok("INSERT INTO t (*) VALUES ('anything');");
    let err = validate_err("INSERT INTO t (*) VALUES (1, 2);");
    assert_eq!(
        err,
        ValidationError::Arity {
            columns: 1,
            values: 2
        }
    );
}

#[test]
fn error_arity_mismatch() {
    let err = check_error("INSERT INTO t (a,b) VALUES (1);");
    assert_eq!(
        err,
        Error::Validation(ValidationError::Arity {
            columns: 2,
            values: 1
        })
    );
    assert_eq!(
        err.to_string(),
        "Column count (2) does not match value count (1)"
    );
}

#[test]
fn error_arity_too_many_values() {
    let msg = check_err("INSERT INTO t (a) VALUES (1, 2, 3);", ErrorKind::Arity);
    assert_eq!(msg, "Column count (1) does not match value count (3)");
}

#[test]
fn error_number_into_string_column() {
    let err = validate_err("INSERT INTO t (name) VALUES (123);");
    let ValidationError::Type {
        column,
        expected,
        found,
        ..
    } = &err
    else {
        panic!("Expected type error, got {err:?}");
    };
    assert_eq!(column, "name");
    assert_eq!(*expected, DataType::String);
    assert_eq!(*found, ValueKind::Number);
    assert_eq!(
        err.to_string(),
        "Type mismatch for column 'name': expected string but got number"
    );
}

#[test]
fn error_string_into_number_column() {
    let msg = check_err("INSERT INTO t (id, age) VALUES (1, 'old');", ErrorKind::Type);
    assert_eq!(
        msg,
        "Type mismatch for column 'age': expected number but got string"
    );
}

#[test]
fn error_first_mismatch_wins() {
    let msg = check_err(
        "INSERT INTO t (email, quantity) VALUES (5, 'many');",
        ErrorKind::Type,
    );
    assert!(msg.contains("column 'email'"));
}

#[test]
fn string_hint_takes_precedence() {
    // "price_code" hits both word lists; the string list is consulted first.
    check_ok("INSERT INTO t (price_code) VALUES ('A1');");
    let _ = check_err("INSERT INTO t (price_code) VALUES (10);", ErrorKind::Type);
}

#[test]
fn semantic_checks_run_before_semicolon() {
    let _ = check_err("INSERT INTO t (a, b) VALUES (1)", ErrorKind::Arity);
}

#[test]
fn error_missing_into() {
    let msg = check_err("INSERT users VALUES (1);", ErrorKind::Syntax);
    assert!(msg.starts_with("Expected 'INTO' after INSERT"));
}

#[test]
fn error_missing_values_keyword() {
    let msg = check_err("INSERT INTO t (a) (1);", ErrorKind::Syntax);
    assert!(msg.starts_with("Expected 'VALUES' after table name or column list"));
}

#[test]
fn error_unclosed_column_list() {
    let _ = check_err("INSERT INTO t (a, b VALUES (1, 2);", ErrorKind::Syntax);
}

#[test]
fn error_empty_value_list() {
    let _ = check_err("INSERT INTO t VALUES ();", ErrorKind::Syntax);
}

#[test]
fn error_missing_semicolon() {
    let msg = check_err("INSERT INTO t VALUES (1)", ErrorKind::Syntax);
    assert!(msg.starts_with("Expected ';' at the end of INSERT statement"));
}

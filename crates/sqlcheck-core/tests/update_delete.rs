//! Tests for UPDATE and DELETE statements.

mod common;
use common::*;

use sqlcheck_core::ErrorKind;

#[test]
fn update_single_assignment() {
    check_ok("UPDATE users SET name = 'Bob' WHERE id = 1;");
}

#[test]
fn update_multiple_assignments_without_where() {
    check_ok("UPDATE users SET name = 'Bob', age = 30, manager = boss_id;");
}

#[test]
fn update_assignments_are_not_type_checked() {
    check_ok("UPDATE users SET name = 42;");
}

#[test]
fn delete_with_where() {
    check_ok("DELETE FROM users WHERE id = 5;");
}

#[test]
fn delete_without_where() {
    check_ok("DELETE FROM users;");
}

#[test]
fn error_update_missing_set() {
    let msg = check_err("UPDATE users name = 'Bob';", ErrorKind::Syntax);
    assert!(msg.starts_with("Expected 'SET' after table name"));
}

#[test]
fn error_update_missing_equals() {
    let msg = check_err("UPDATE users SET name 'Bob';", ErrorKind::Syntax);
    assert!(msg.starts_with("Expected '=' after column name"));
}

#[test]
fn error_update_comparison_instead_of_assignment() {
    let _ = check_err("UPDATE users SET age >= 3;", ErrorKind::Syntax);
}

#[test]
fn error_update_missing_table() {
    let msg = check_err("UPDATE SET a = 1;", ErrorKind::Syntax);
    assert!(msg.starts_with("Expected table name after UPDATE, found keyword SET"));
}

#[test]
fn error_delete_missing_from() {
    let msg = check_err("DELETE users WHERE id = 5;", ErrorKind::Syntax);
    assert!(msg.starts_with("Expected 'FROM' after DELETE"));
}

#[test]
fn error_delete_multiple_tables() {
    let _ = check_err("DELETE FROM a, b;", ErrorKind::Syntax);
}

#[test]
fn error_delete_missing_semicolon() {
    let msg = check_err("DELETE FROM users WHERE id = 5", ErrorKind::Syntax);
    assert!(msg.starts_with("Expected ';' at the end of DELETE statement"));
}

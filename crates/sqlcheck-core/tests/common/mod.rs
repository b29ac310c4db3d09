#![allow(dead_code)]

use sqlcheck_core::{Error, ErrorKind, ValidationError, Vocabulary, check, tokenize, validate};

pub fn check_ok(sql: &str) {
    let result = check(sql);
    assert!(
        result.ok,
        "Expected valid: {sql}\nDiagnostics: {:?}",
        result.diagnostics
    );
    assert!(result.diagnostics.is_empty());
}

/// Checks that `sql` is rejected and returns its single diagnostic.
pub fn check_err(sql: &str, kind: ErrorKind) -> String {
    let result = check(sql);
    assert!(!result.ok, "Expected invalid: {sql}");
    assert_eq!(result.error_kind(), Some(kind), "Wrong error kind for: {sql}");
    assert_eq!(result.diagnostics.len(), 1);
    result.diagnostics[0].clone()
}

/// Returns the validator error for input that tokenizes cleanly.
pub fn validate_err(sql: &str) -> ValidationError {
    let tokens = tokenize(sql).unwrap_or_else(|e| panic!("Failed to tokenize: {sql}\nError: {e}"));
    validate(&tokens, Vocabulary::standard())
        .expect_err(&format!("Expected validation error for: {sql}"))
}

pub fn check_error(sql: &str) -> Error {
    check(sql)
        .into_result()
        .expect_err(&format!("Expected error for: {sql}"))
}

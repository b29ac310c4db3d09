//! Tests for statement dispatch, keyword suggestions and lexical errors.

mod common;
use common::*;

use sqlcheck_core::{ErrorKind, LexError, Span, ValidationError, check};

#[test]
fn error_empty_input() {
    let msg = check_err("", ErrorKind::Syntax);
    assert!(msg.starts_with("Expected a SQL statement"));
}

#[test]
fn suggestion_for_misspelled_select() {
    let msg = check_err("SELEC * FROM t;", ErrorKind::Syntax);
    assert_eq!(msg, "Unknown keyword 'SELEC'. Did you mean 'SELECT'?");
}

#[test]
fn suggestion_keeps_original_spelling() {
    let err = validate_err("updte users SET a = 1;");
    assert_eq!(
        err,
        ValidationError::UnknownKeyword {
            word: String::from("updte"),
            suggestion: "UPDATE",
            span: Span::new(0, 5),
        }
    );
}

#[test]
fn suggestion_for_other_statements() {
    for (sql, keyword) in [
        ("INSRT INTO t VALUES (1);", "INSERT"),
        ("DELET FROM t;", "DELETE"),
        ("SELECTT * FROM t;", "SELECT"),
    ] {
        let msg = check_err(sql, ErrorKind::Syntax);
        assert!(msg.ends_with(&format!("Did you mean '{keyword}'?")), "{sql}: {msg}");
    }
}

#[test]
fn no_suggestion_when_too_far() {
    let msg = check_err("TRUNCATE users;", ErrorKind::Syntax);
    assert!(msg.starts_with("Expected a SQL statement"));
    let msg = check_err("CREATE TABLE t;", ErrorKind::Syntax);
    assert!(msg.starts_with("Expected a SQL statement"));
}

#[test]
fn no_suggestion_for_non_identifier_lead() {
    let msg = check_err("FROM users;", ErrorKind::Syntax);
    assert!(msg.starts_with("Expected a SQL statement"));
    let msg = check_err("42;", ErrorKind::Syntax);
    assert!(msg.starts_with("Expected a SQL statement"));
}

#[test]
fn suggestion_only_for_leading_token() {
    // A typo later in the statement is an ordinary syntax error.
    let err = validate_err("SELECT * FORM users;");
    assert!(matches!(err, ValidationError::Syntax { .. }));
}

#[test]
fn lex_error_bare_bang() {
    let err = check_error("SELECT * FROM t WHERE a ! 1;");
    assert_eq!(
        err,
        sqlcheck_core::Error::Lex(LexError::UnexpectedCharacter {
            ch: '!',
            position: 24
        })
    );
}

#[test]
fn lex_error_wins_over_syntax_error() {
    // The statement is also missing FROM, but tokenizing fails first.
    let _ = check_err("SELECT id users WHERE x = 'open", ErrorKind::Lex);
}

#[test]
fn number_boundary() {
    let msg = check_err("SELECT * FROM t WHERE a = 3.;", ErrorKind::Lex);
    assert_eq!(msg, "Unexpected character '.' at position 27");
}

#[test]
fn checks_are_deterministic() {
    for sql in [
        "SELECT * FROM users;",
        "SELEC * FROM t;",
        "INSERT INTO t (a,b) VALUES (1);",
        "SELECT * FROM t WHERE name = 'abc;",
    ] {
        assert_eq!(check(sql), check(sql));
    }
}

#[test]
fn checks_run_concurrently() {
    let queries = [
        "SELECT * FROM users;",
        "DELETE FROM users WHERE id = 5;",
        "INSERT INTO t (name) VALUES (123);",
        "SELEC * FROM t;",
    ];
    let expected: Vec<_> = queries.iter().map(|sql| check(sql)).collect();

    let handles: Vec<_> = queries
        .iter()
        .copied()
        .map(|sql| std::thread::spawn(move || check(sql)))
        .collect();
    let actual: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();

    assert_eq!(actual, expected);
}

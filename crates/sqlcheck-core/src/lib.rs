//! # sqlcheck-core
//!
//! Syntax and sanity checks for a small SQL subset, without executing
//! anything.
//!
//! This crate provides:
//! - A single-pass tokenizer over a fixed keyword vocabulary
//! - An LL(1) recursive descent validator for SELECT, INSERT, UPDATE and
//!   DELETE
//! - INSERT column/value arity checks and type checks based on types guessed
//!   from column names
//! - "Did you mean" suggestions for a misspelled leading keyword
//!
//! ## Checking a query
//!
//! ```rust
//! use sqlcheck_core::check;
//!
//! let result = check("SELECT id, name FROM users WHERE age > 18;");
//! assert!(result.ok);
//!
//! let result = check("SELEC * FROM users;");
//! assert!(!result.ok);
//! assert_eq!(
//!     result.diagnostics,
//!     vec!["Unknown keyword 'SELEC'. Did you mean 'SELECT'?"]
//! );
//! ```
//!
//! ## Using the stages directly
//!
//! ```rust
//! use sqlcheck_core::{Vocabulary, tokenize, validate};
//!
//! let tokens = tokenize("INSERT INTO t (name) VALUES (123);").unwrap();
//! let err = validate(&tokens, Vocabulary::standard()).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Type mismatch for column 'name': expected string but got number"
//! );
//! ```
//!
//! Every call owns its tokens and cursor and the vocabulary is immutable, so
//! checks can run concurrently without coordination.

pub mod check;
pub mod error;
pub mod lexer;
pub mod types;
pub mod validator;

pub use check::{ValidationResult, check, check_with};
pub use error::{Error, ErrorKind, Result};
pub use lexer::{Keyword, LexError, Lexer, Span, Token, TokenKind, Vocabulary, tokenize};
pub use types::{Column, DataType, ValueKind, infer_type};
pub use validator::{ValidationError, Validator, suggest_keyword, validate};

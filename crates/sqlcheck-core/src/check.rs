//! Validation façade: tokenize, validate, and report a verdict.

use tracing::debug;

use crate::error::{Error, ErrorKind, Result};
use crate::lexer::{Lexer, Vocabulary};
use crate::validator::validate;

/// The verdict for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// True if the query was accepted.
    pub ok: bool,
    /// Human-readable messages; a failed check has exactly one.
    pub diagnostics: Vec<String>,
    error: Option<Error>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            ok: true,
            diagnostics: vec![],
            error: None,
        }
    }

    fn invalid(error: Error) -> Self {
        Self {
            ok: false,
            diagnostics: vec![error.to_string()],
            error: Some(error),
        }
    }

    /// Returns the failure behind a rejected query.
    #[must_use]
    pub const fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Returns the kind of failure behind a rejected query.
    #[must_use]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(Error::kind)
    }

    /// Converts the verdict back into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the failure if the query was rejected.
    pub fn into_result(self) -> Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

/// Checks `sql` against the standard vocabulary.
#[must_use]
pub fn check(sql: &str) -> ValidationResult {
    check_with(sql, Vocabulary::standard())
}

/// Checks `sql` against an explicit vocabulary.
#[must_use]
pub fn check_with(sql: &str, vocabulary: &Vocabulary) -> ValidationResult {
    match run(sql, vocabulary) {
        Ok(()) => {
            debug!("query is valid");
            ValidationResult::valid()
        }
        Err(error) => {
            debug!(kind = ?error.kind(), %error, "query is invalid");
            ValidationResult::invalid(error)
        }
    }
}

fn run(sql: &str, vocabulary: &Vocabulary) -> Result<()> {
    let tokens = Lexer::new(sql, vocabulary).tokenize()?;
    debug!(tokens = tokens.len(), "tokenized query");
    validate(&tokens, vocabulary)?;
    Ok(())
}

//! Crate-level error type.

use crate::lexer::LexError;
use crate::validator::ValidationError;

/// Any failure to accept a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The tokens do not form a valid statement.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unterminated string or unexpected character.
    Lex,
    /// Grammar violation, including unknown-keyword suggestions.
    Syntax,
    /// INSERT column/value count mismatch.
    Arity,
    /// INSERT value incompatible with the column's guessed type.
    Type,
}

impl Error {
    /// Returns the kind of failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Validation(ValidationError::Syntax { .. } | ValidationError::UnknownKeyword { .. }) => {
                ErrorKind::Syntax
            }
            Self::Validation(ValidationError::Arity { .. }) => ErrorKind::Arity,
            Self::Validation(ValidationError::Type { .. }) => ErrorKind::Type,
        }
    }
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, Error>;

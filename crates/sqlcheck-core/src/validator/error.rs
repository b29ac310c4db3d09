//! Validation error types.

use crate::lexer::{Span, Token, TokenKind};
use crate::types::{DataType, ValueKind};

/// The first grammar or semantic violation found in a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required keyword, punctuation mark, name or value is missing.
    #[error("{message} at position {}", .span.start)]
    Syntax {
        /// The error message.
        message: String,
        /// The location of the offending token.
        span: Span,
        /// The token kind that was found instead.
        found: TokenKind,
    },

    /// The statement starts with an identifier that looks like a misspelled keyword.
    #[error("Unknown keyword '{word}'. Did you mean '{suggestion}'?")]
    UnknownKeyword {
        /// The word as written.
        word: String,
        /// The closest keyword.
        suggestion: &'static str,
        /// The location of the word.
        span: Span,
    },

    /// INSERT names a different number of columns than it supplies values.
    #[error("Column count ({columns}) does not match value count ({values})")]
    Arity {
        /// Number of columns in the column list.
        columns: usize,
        /// Number of values in the VALUES list.
        values: usize,
    },

    /// An INSERT value cannot belong to the column it is assigned to.
    #[error("Type mismatch for column '{column}': expected {expected} but got {found}")]
    Type {
        /// The column name as written.
        column: String,
        /// The type guessed for the column.
        expected: DataType,
        /// The kind of value supplied.
        found: ValueKind,
        /// The location of the value.
        span: Span,
    },
}

impl ValidationError {
    /// Creates an "expected X, found Y" syntax error at `token`.
    #[must_use]
    pub fn unexpected(expected: &str, token: &Token) -> Self {
        let found = match token.kind {
            TokenKind::Identifier | TokenKind::Number | TokenKind::String => {
                format!("{} '{}'", token.kind, token.lexeme)
            }
            TokenKind::Keyword(_) => format!("keyword {}", token.lexeme),
            kind => kind.to_string(),
        };
        Self::Syntax {
            message: format!("Expected {expected}, found {found}"),
            span: token.span,
            found: token.kind,
        }
    }

    /// Returns the source location of the error, if it has one.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Syntax { span, .. }
            | Self::UnknownKeyword { span, .. }
            | Self::Type { span, .. } => Some(*span),
            Self::Arity { .. } => None,
        }
    }
}

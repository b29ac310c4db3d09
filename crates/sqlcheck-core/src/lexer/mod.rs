//! SQL Lexer/Tokenizer
//!
//! Turns raw query text into a sequence of classified tokens terminated by a
//! single EOF token.

mod span;
mod token;
mod tokenizer;
mod vocabulary;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::{LexError, Lexer, tokenize};
pub use vocabulary::Vocabulary;

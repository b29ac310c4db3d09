//! SQL tokenizer implementation.

use tracing::trace;

use super::{Span, Token, TokenKind, Vocabulary};

/// A fatal tokenization failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A `'` was never closed.
    #[error("Unterminated string literal starting at position {start}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        start: usize,
    },

    /// A character outside the token set (including a bare `!`).
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        position: usize,
    },
}

impl LexError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnterminatedString { start } => *start,
            Self::UnexpectedCharacter { position, .. } => *position,
        }
    }
}

/// A single-pass lexer with one character of lookahead.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// Keyword table used to classify identifier runs.
    vocabulary: &'a Vocabulary,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str, vocabulary: &'a Vocabulary) -> Self {
        Self {
            input,
            vocabulary,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character after the current one without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes the current character if it equals `expected`.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token whose lexeme is the whole current span.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, &self.input[self.start..self.pos], self.make_span())
    }

    /// Scans an identifier or keyword. The lexeme keeps its original casing.
    fn scan_identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match self.vocabulary.lookup(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier),
        }
    }

    /// Scans digits with an optional fractional part.
    ///
    /// A `.` is only consumed when a digit follows it, so `3.` stops after `3`.
    fn scan_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        self.make_token(TokenKind::Number)
    }

    /// Scans a string literal. The opening quote has been consumed.
    fn scan_string(&mut self) -> Result<Token, LexError> {
        let content_start = self.pos;
        loop {
            match self.advance() {
                Some('\'') => break,
                Some(_) => {}
                None => {
                    return Err(LexError::UnterminatedString { start: self.start });
                }
            }
        }

        let content = &self.input[content_start..self.pos - 1];
        Ok(Token::new(TokenKind::String, content, self.make_span()))
    }

    /// Scans the next token.
    ///
    /// Once the input is exhausted every further call returns an EOF token.
    ///
    /// # Errors
    ///
    /// Returns a `LexError` for an unterminated string literal or a character
    /// that starts no token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return Ok(Token::eof(self.pos));
        };

        let kind = match c {
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '*' => TokenKind::Star,
            '=' => TokenKind::Eq,
            '<' => {
                if self.eat('=') {
                    TokenKind::LtEq
                } else if self.eat('>') {
                    TokenKind::NotEq
                } else {
                    TokenKind::Lt
                }
            }
            '>' => {
                if self.eat('=') {
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                }
            }
            '!' => {
                if self.eat('=') {
                    TokenKind::NotEq
                } else {
                    return Err(LexError::UnexpectedCharacter {
                        ch: '!',
                        position: self.start,
                    });
                }
            }
            '\'' => return self.scan_string(),
            c if c.is_ascii_digit() => return Ok(self.scan_number()),
            c if c.is_ascii_alphabetic() || c == '_' => return Ok(self.scan_identifier()),
            _ => {
                return Err(LexError::UnexpectedCharacter {
                    ch: c,
                    position: self.start,
                });
            }
        };

        Ok(self.make_token(kind))
    }

    /// Tokenizes the entire input.
    ///
    /// On success the sequence ends with exactly one EOF token.
    ///
    /// # Errors
    ///
    /// Returns the first `LexError` encountered.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            trace!(kind = ?token.kind, lexeme = %token.lexeme, "token");
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

/// Tokenizes `input` with the standard vocabulary.
///
/// # Errors
///
/// Returns the first `LexError` encountered.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input, Vocabulary::standard()).tokenize()
}

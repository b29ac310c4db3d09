//! Recursive descent validator.
//!
//! One method per grammar rule, each deciding on the next unconsumed token
//! only. The cursor only ever moves forward and the first violation ends the
//! walk.
//!
//! ```text
//! statement      := select | insert | update | delete
//! select         := SELECT columnList FROM tableList [WHERE condition] ';'
//! insert         := INSERT INTO ident ['(' columnDecls ')'] VALUES '(' values ')' ';'
//! update         := UPDATE ident SET assignments [WHERE condition] ';'
//! delete         := DELETE FROM ident [WHERE condition] ';'
//! columnList     := '*' | ident (',' ident)*
//! tableList      := ident (',' ident)*
//! assignments    := ident '=' value (',' ident '=' value)*
//! condition      := term ((AND | OR) term)*
//! term           := ident compareOp value
//! value          := string | number | ident
//! ```

use tracing::trace;

use super::error::ValidationError;
use super::suggest::suggest_keyword;
use crate::lexer::{Keyword, Token, TokenKind, Vocabulary};
use crate::types::{Column, ValueKind};

/// A value seen in a VALUES list.
struct Value {
    kind: ValueKind,
    token: usize,
}

/// Grammar validator over a token sequence.
pub struct Validator<'a> {
    tokens: &'a [Token],
    vocabulary: &'a Vocabulary,
    /// Index of the next unconsumed token.
    current: usize,
    /// Stands in for a missing trailing EOF token.
    eof: Token,
}

impl<'a> Validator<'a> {
    /// Creates a validator for `tokens`, normally the output of the lexer.
    ///
    /// A sequence that lacks its EOF token is treated as if it had one.
    #[must_use]
    pub fn new(tokens: &'a [Token], vocabulary: &'a Vocabulary) -> Self {
        let end = tokens.last().map_or(0, |t| t.span.end);
        Self {
            tokens,
            vocabulary,
            current: 0,
            eof: Token::eof(end),
        }
    }

    /// Validates a single statement, optionally followed by extra `;`.
    ///
    /// # Errors
    ///
    /// Returns the first grammar, arity or type violation.
    pub fn validate(mut self) -> Result<(), ValidationError> {
        self.statement()?;

        while self.eat(TokenKind::Semicolon) {}
        if !self.peek().is_eof() {
            return Err(ValidationError::unexpected(
                "end of input after statement",
                self.peek(),
            ));
        }
        Ok(())
    }

    fn statement(&mut self) -> Result<(), ValidationError> {
        trace!(statement = %self.peek().lexeme, "validating statement");
        match self.peek().as_keyword() {
            Some(Keyword::Select) => {
                self.advance();
                self.select_statement()
            }
            Some(Keyword::Insert) => {
                self.advance();
                self.insert_statement()
            }
            Some(Keyword::Update) => {
                self.advance();
                self.update_statement()
            }
            Some(Keyword::Delete) => {
                self.advance();
                self.delete_statement()
            }
            _ => Err(self.unknown_statement()),
        }
    }

    /// Error for a leading token that starts no statement.
    ///
    /// Only a leading identifier is checked for a misspelled keyword.
    fn unknown_statement(&self) -> ValidationError {
        let token = self.peek();
        if token.kind == TokenKind::Identifier {
            let word = token.lexeme.to_ascii_uppercase();
            if let Some(suggestion) = suggest_keyword(&word, self.vocabulary) {
                return ValidationError::UnknownKeyword {
                    word: token.lexeme.clone(),
                    suggestion,
                    span: token.span,
                };
            }
        }
        Self::not_a_statement(token)
    }

    fn not_a_statement(token: &Token) -> ValidationError {
        ValidationError::unexpected("a SQL statement (SELECT, INSERT, UPDATE or DELETE)", token)
    }

    fn select_statement(&mut self) -> Result<(), ValidationError> {
        self.column_list()?;
        self.expect_keyword(Keyword::From, "'FROM' after SELECT columns")?;
        self.table_list()?;
        self.optional_where()?;
        self.expect(TokenKind::Semicolon, "';' at the end of SELECT statement")
    }

    fn insert_statement(&mut self) -> Result<(), ValidationError> {
        self.expect_keyword(Keyword::Into, "'INTO' after INSERT")?;
        self.expect_identifier("table name after INTO")?;

        let columns = if self.eat(TokenKind::LeftParen) {
            let columns = self.column_declarations()?;
            self.expect(TokenKind::RightParen, "')' after column list")?;
            Some(columns)
        } else {
            None
        };

        self.expect_keyword(Keyword::Values, "'VALUES' after table name or column list")?;
        self.expect(TokenKind::LeftParen, "'(' after VALUES")?;
        let values = self.value_list()?;
        self.expect(TokenKind::RightParen, "')' after value list")?;

        if let Some(columns) = &columns {
            self.check_values(columns, &values)?;
        }

        self.expect(TokenKind::Semicolon, "';' at the end of INSERT statement")
    }

    fn update_statement(&mut self) -> Result<(), ValidationError> {
        self.expect_identifier("table name after UPDATE")?;
        self.expect_keyword(Keyword::Set, "'SET' after table name")?;
        self.assignment_list()?;
        self.optional_where()?;
        self.expect(TokenKind::Semicolon, "';' at the end of UPDATE statement")
    }

    fn delete_statement(&mut self) -> Result<(), ValidationError> {
        self.expect_keyword(Keyword::From, "'FROM' after DELETE")?;
        self.expect_identifier("table name after FROM")?;
        self.optional_where()?;
        self.expect(TokenKind::Semicolon, "';' at the end of DELETE statement")
    }

    /// Column list of a SELECT.
    fn column_list(&mut self) -> Result<(), ValidationError> {
        if self.eat(TokenKind::Star) {
            return Ok(());
        }
        loop {
            self.expect_identifier("column name")?;
            if !self.eat(TokenKind::Comma) {
                return Ok(());
            }
        }
    }

    /// Column list of an INSERT, typed from the column names.
    fn column_declarations(&mut self) -> Result<Vec<Column>, ValidationError> {
        if self.eat(TokenKind::Star) {
            return Ok(vec![Column::wildcard()]);
        }
        let mut columns = vec![];
        loop {
            let name = self.expect_identifier("column name")?;
            columns.push(Column::new(name));
            if !self.eat(TokenKind::Comma) {
                return Ok(columns);
            }
        }
    }

    fn table_list(&mut self) -> Result<(), ValidationError> {
        loop {
            self.expect_identifier("table name")?;
            if !self.eat(TokenKind::Comma) {
                return Ok(());
            }
        }
    }

    fn value_list(&mut self) -> Result<Vec<Value>, ValidationError> {
        let mut values = vec![];
        loop {
            let token = self.current;
            let kind = self.expect_value()?;
            values.push(Value { kind, token });
            if !self.eat(TokenKind::Comma) {
                return Ok(values);
            }
        }
    }

    fn assignment_list(&mut self) -> Result<(), ValidationError> {
        loop {
            self.expect_identifier("column name")?;
            self.expect(TokenKind::Eq, "'=' after column name")?;
            self.expect_value()?;
            if !self.eat(TokenKind::Comma) {
                return Ok(());
            }
        }
    }

    fn optional_where(&mut self) -> Result<(), ValidationError> {
        if self.eat_keyword(Keyword::Where) {
            self.condition()?;
        }
        Ok(())
    }

    fn condition(&mut self) -> Result<(), ValidationError> {
        self.term()?;
        while self.eat_keyword(Keyword::And) || self.eat_keyword(Keyword::Or) {
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<(), ValidationError> {
        self.expect_identifier("column name in condition")?;
        if !self.peek().kind.is_comparison() {
            return Err(ValidationError::unexpected(
                "a comparison operator",
                self.peek(),
            ));
        }
        self.advance();
        self.expect_value()?;
        Ok(())
    }

    /// Arity first, then per-position type compatibility.
    fn check_values(&self, columns: &[Column], values: &[Value]) -> Result<(), ValidationError> {
        if columns.len() != values.len() {
            return Err(ValidationError::Arity {
                columns: columns.len(),
                values: values.len(),
            });
        }

        for (column, value) in columns.iter().zip(values) {
            if !column.expected_type.accepts(value.kind) {
                return Err(ValidationError::Type {
                    column: column.name.clone(),
                    expected: column.expected_type,
                    found: value.kind,
                    span: self.tokens[value.token].span,
                });
            }
        }
        Ok(())
    }

    // --- Helper methods ---

    /// Returns the next unconsumed token.
    fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&self.eof)
    }

    /// Consumes the current token. EOF is never consumed.
    fn advance(&mut self) {
        if !self.peek().is_eof() {
            self.current += 1;
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes the current token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        self.eat(TokenKind::Keyword(keyword))
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<(), ValidationError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(ValidationError::unexpected(expected, self.peek()))
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword, expected: &str) -> Result<(), ValidationError> {
        self.expect(TokenKind::Keyword(keyword), expected)
    }

    /// Expects an identifier and returns its text.
    fn expect_identifier(&mut self, expected: &str) -> Result<String, ValidationError> {
        let token = self.peek();
        if token.kind != TokenKind::Identifier {
            return Err(ValidationError::unexpected(expected, token));
        }
        let name = token.lexeme.clone();
        self.advance();
        Ok(name)
    }

    /// Expects a string, number or identifier.
    fn expect_value(&mut self) -> Result<ValueKind, ValidationError> {
        let Some(kind) = ValueKind::from_token(self.peek().kind) else {
            return Err(ValidationError::unexpected(
                "a value (string, number, or identifier)",
                self.peek(),
            ));
        };
        self.advance();
        Ok(kind)
    }
}

/// Validates a token sequence against the grammar.
///
/// # Errors
///
/// Returns the first grammar, arity or type violation.
pub fn validate(tokens: &[Token], vocabulary: &Vocabulary) -> Result<(), ValidationError> {
    Validator::new(tokens, vocabulary).validate()
}

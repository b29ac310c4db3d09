//! Heuristic column typing used by the INSERT checks.
//!
//! There is no schema: a column's type is guessed from its name, and the
//! guess only ever rejects values that are clearly the wrong literal kind.

use core::fmt;

use crate::lexer::TokenKind;

/// Name fragments that suggest a text column. Checked first.
const STRING_HINTS: &[&str] = &[
    "name",
    "firstname",
    "lastname",
    "email",
    "address",
    "city",
    "state",
    "country",
    "description",
    "title",
    "username",
    "password",
    "phone",
    "status",
    "type",
    "color",
    "url",
    "code",
];

/// Name fragments that suggest a numeric column.
const NUMBER_HINTS: &[&str] = &[
    "id", "age", "count", "amount", "price", "quantity", "total", "number", "size", "width",
    "height", "weight", "duration", "score", "rating",
];

/// Guessed type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    String,
    Number,
    Boolean,
    Date,
    Unknown,
}

impl DataType {
    /// Returns true if a value of `kind` may be stored in a column of this type.
    ///
    /// Identifiers stand in for expressions or placeholders that cannot be
    /// resolved here, so they pass every check except `Date`.
    #[must_use]
    pub const fn accepts(self, kind: ValueKind) -> bool {
        match self {
            Self::String => matches!(kind, ValueKind::String | ValueKind::Identifier),
            Self::Number => matches!(kind, ValueKind::Number | ValueKind::Identifier),
            Self::Date => matches!(kind, ValueKind::String),
            Self::Boolean | Self::Unknown => true,
        }
    }

    /// Returns the lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The lexical kind of a value in a VALUES list or assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Identifier,
}

impl ValueKind {
    /// Classifies a token kind, returning `None` for non-value tokens.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::String => Some(Self::String),
            TokenKind::Number => Some(Self::Number),
            TokenKind::Identifier => Some(Self::Identifier),
            _ => None,
        }
    }

    /// Returns the lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Identifier => "identifier",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column named in an INSERT column list, with its guessed type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The identifier as written.
    pub name: String,
    /// The type guessed from the name.
    pub expected_type: DataType,
}

impl Column {
    /// Creates a column, inferring its type from `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let expected_type = infer_type(&name);
        Self {
            name,
            expected_type,
        }
    }

    /// The `*` placeholder column, whose type is never known.
    #[must_use]
    pub fn wildcard() -> Self {
        Self {
            name: String::from("*"),
            expected_type: DataType::Unknown,
        }
    }
}

/// Guesses a column's type from its name.
///
/// The lowercased name is matched against the string hints first and the
/// number hints second, so `price_code` is a string column.
#[must_use]
pub fn infer_type(column_name: &str) -> DataType {
    let lower = column_name.to_lowercase();
    let matches = |hint: &&str| lower.contains(*hint);

    if STRING_HINTS.iter().any(matches) {
        DataType::String
    } else if NUMBER_HINTS.iter().any(matches) {
        DataType::Number
    } else {
        DataType::Unknown
    }
}

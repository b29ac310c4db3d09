//! The fixed keyword table shared by the lexer and the validator.

use super::Keyword;

/// Maps uppercase spellings to keywords.
///
/// A vocabulary is never mutated after construction, so one instance can be
/// shared by any number of concurrent validations. Iteration order is the
/// order the keywords were given in, which makes "first match wins" choices
/// (such as typo suggestions on equal edit distance) reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    keywords: &'static [Keyword],
}

static STANDARD: Vocabulary = Vocabulary::new(&Keyword::ALL);

impl Vocabulary {
    /// Creates a vocabulary over the given keywords.
    #[must_use]
    pub const fn new(keywords: &'static [Keyword]) -> Self {
        Self { keywords }
    }

    /// The vocabulary of the supported grammar, in declaration order.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Looks up a word, ignoring ASCII case.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Keyword> {
        self.keywords
            .iter()
            .copied()
            .find(|kw| kw.as_str().eq_ignore_ascii_case(word))
    }

    /// Returns the uppercase spellings in iteration order.
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.keywords.iter().map(Keyword::as_str)
    }

    /// Returns the number of keywords.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns true if the vocabulary holds no keywords.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        STANDARD
    }
}

//! Keyword typo suggestions.

use crate::lexer::Vocabulary;

/// Levenshtein distance between two strings, counted in characters.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single rolling row of the DP matrix.
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }
    row[b.len()]
}

/// Largest distance still reported as a likely typo of `word`.
#[must_use]
pub fn suggestion_tolerance(word: &str) -> usize {
    (word.chars().count() / 3).max(2)
}

/// Finds the keyword closest to `word`, if it is close enough to be a typo.
///
/// `word` is compared as given; callers uppercase it first. On equal distance
/// the keyword that comes first in the vocabulary wins.
#[must_use]
pub fn suggest_keyword(word: &str, vocabulary: &Vocabulary) -> Option<&'static str> {
    let mut best: Option<(&'static str, usize)> = None;
    for spelling in vocabulary.spellings() {
        let distance = edit_distance(word, spelling);
        if best.is_none_or(|(_, min)| distance < min) {
            best = Some((spelling, distance));
        }
    }

    best.filter(|&(_, distance)| distance <= suggestion_tolerance(word))
        .map(|(spelling, _)| spelling)
}

//! Token and line normalization.
//!
//! Every string compared against the lexicon goes through these functions
//! first. The lexicon stores only normalized forms, so comparing an
//! un-normalized token against it is always a bug.

use crate::patterns::WHITESPACE_NORMALIZE;

/// Punctuation stripped from every token before lexicon comparison.
const STRIP_CHARS: &[char] = &[
    '<', '>', '[', ']', '(', ')', '!', '@', '#', '$', '%', '^', '&', '*', ';', ',', ':', '?', '"',
];

/// Normalize a single token: lower-case and strip the fixed punctuation set
/// from both ends.
#[must_use]
pub fn normalize_token(token: &str) -> String {
    token.to_lowercase().trim_matches(STRIP_CHARS).to_string()
}

/// Normalize a whole line: collapse whitespace, then normalize each token
/// and rejoin with single spaces. Tokens that normalize to nothing are
/// dropped.
#[must_use]
pub fn normalize_line(line: &str) -> String {
    let collapsed = WHITESPACE_NORMALIZE.replace_all(line, " ");
    collapsed
        .split_whitespace()
        .map(normalize_token)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a normalized line into its tokens.
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Count whitespace-delimited words in a line.
#[must_use]
pub fn word_count(line: &str) -> usize {
    line.split_whitespace().count()
}

//! Lexicon store: the three growing sets learned across runs.
//!
//! Holds known food-noun tokens, known multi-word collocations, and the
//! tag-sequence shapes of previously accepted ingredient lines. The store is
//! loaded once at startup and saved explicitly; the pipeline borrows it
//! immutably during extraction and the learner takes `&mut` to append, so
//! readers can never observe a partially written entry.
//!
//! All entries are stored normalized (lower-case, fixed punctuation set
//! stripped). Insertion normalizes; lookups expect already-normalized input.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::encoding::decode_row;
use crate::error::Result;
use crate::tagger::PosTag;
use crate::text::normalize_line;

/// The tag-sequence "shape" of a previously accepted ingredient line.
///
/// A pattern never includes token text, so new recipes with shared
/// grammatical structure but different vocabulary still match.
pub type LinePattern = Vec<PosTag>;

const FOOD_WORDS_FILE: &str = "food_words.csv";
const COLLOCATIONS_FILE: &str = "collocations.csv";
const PATTERNS_FILE: &str = "patterns.csv";

/// Append-only store of food words, collocations and line patterns.
#[derive(Debug, Default, Clone)]
pub struct Lexicon {
    food_words: HashSet<String>,
    collocations: HashSet<String>,
    patterns: HashSet<LinePattern>,
}

impl Lexicon {
    /// Create an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Insertion (normalizing, deduplicating) ===

    /// Insert a food word. Returns `true` if the normalized form was new.
    pub fn insert_food_word(&mut self, word: &str) -> bool {
        let normalized = normalize_line(word);
        if normalized.is_empty() {
            return false;
        }
        self.food_words.insert(normalized)
    }

    /// Insert a multi-word collocation (2-4 tokens, space-joined).
    /// Returns `true` if the normalized form was new.
    pub fn insert_collocation(&mut self, phrase: &str) -> bool {
        let normalized = normalize_line(phrase);
        let words = normalized.split_whitespace().count();
        if !(2..=4).contains(&words) {
            return false;
        }
        self.collocations.insert(normalized)
    }

    /// Insert an accepted line shape. Returns `true` if the sequence was new.
    pub fn insert_pattern(&mut self, pattern: LinePattern) -> bool {
        if pattern.is_empty() {
            return false;
        }
        self.patterns.insert(pattern)
    }

    // === Lookup ===

    /// Whether a normalized token is a known food word.
    #[must_use]
    pub fn contains_food_word(&self, token: &str) -> bool {
        self.food_words.contains(token)
    }

    /// Whether a normalized phrase is a known collocation.
    #[must_use]
    pub fn contains_collocation(&self, phrase: &str) -> bool {
        self.collocations.contains(phrase)
    }

    /// Whether a tag sequence exactly matches a known line pattern.
    #[must_use]
    pub fn matches_pattern(&self, sequence: &[PosTag]) -> bool {
        self.patterns.contains(sequence)
    }

    /// Whether any of the normalized tokens is a known food word.
    #[must_use]
    pub fn has_food_word(&self, tokens: &[String]) -> bool {
        tokens.iter().any(|t| self.food_words.contains(t))
    }

    /// Re-join adjacent tokens that form a known collocation into a single
    /// token, longest phrase first. A naive tokenizer splits "olive oil" in
    /// two; merging lets a tag sequence treat the pair as one noun, so line
    /// shapes learned before and after the collocation was known agree.
    #[must_use]
    pub fn merge_collocations(&self, tokens: &[String]) -> Vec<String> {
        let mut merged = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            let hit = (2..=4.min(tokens.len() - i)).rev().find_map(|len| {
                let phrase = tokens[i..i + len].join(" ");
                self.collocations.contains(&phrase).then_some((phrase, len))
            });
            match hit {
                Some((phrase, len)) => {
                    merged.push(phrase);
                    i += len;
                }
                None => {
                    merged.push(tokens[i].clone());
                    i += 1;
                }
            }
        }
        merged
    }

    /// Fraction of normalized tokens that are known food words.
    #[must_use]
    pub fn food_density(&self, tokens: &[String]) -> f64 {
        if tokens.is_empty() {
            return 0.0;
        }
        let hits = tokens.iter().filter(|t| self.food_words.contains(t.as_str())).count();
        hits as f64 / tokens.len() as f64
    }

    /// Number of known food words.
    #[must_use]
    pub fn food_word_count(&self) -> usize {
        self.food_words.len()
    }

    /// Number of known collocations.
    #[must_use]
    pub fn collocation_count(&self) -> usize {
        self.collocations.len()
    }

    /// Number of known line patterns.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Iterate known collocations (no particular order).
    pub fn collocations(&self) -> impl Iterator<Item = &str> {
        self.collocations.iter().map(String::as_str)
    }

    // === Persistence ===

    /// Load the three flat tables from a directory. Missing files yield
    /// empty sets so a fresh directory is a valid (empty) lexicon.
    ///
    /// Rows that fail UTF-8 decoding fall back to windows-1252, matching
    /// legacy tables written on single-byte systems.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut lexicon = Self::new();
        for word in load_rows(&dir.join(FOOD_WORDS_FILE))? {
            lexicon.insert_food_word(&word);
        }
        for phrase in load_rows(&dir.join(COLLOCATIONS_FILE))? {
            lexicon.insert_collocation(&phrase);
        }
        for row in load_rows(&dir.join(PATTERNS_FILE))? {
            if let Some(pattern) = parse_pattern_row(&row) {
                lexicon.insert_pattern(pattern);
            }
        }
        debug!(
            food_words = lexicon.food_word_count(),
            collocations = lexicon.collocation_count(),
            patterns = lexicon.pattern_count(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Save the three flat tables to a directory, one row per entry,
    /// sorted so the output is deterministic. Overwrites existing files.
    pub fn save_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        save_rows(&dir.join(FOOD_WORDS_FILE), self.food_words.iter().map(String::as_str))?;
        save_rows(&dir.join(COLLOCATIONS_FILE), self.collocations.iter().map(String::as_str))?;
        let pattern_rows: Vec<String> = self
            .patterns
            .iter()
            .map(|p| p.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(" "))
            .collect();
        save_rows(&dir.join(PATTERNS_FILE), pattern_rows.iter().map(String::as_str))?;
        Ok(())
    }
}

/// Read one-value-per-row table, tolerating legacy single-byte rows.
fn load_rows(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let bytes = fs::read(path)?;
    let rows = bytes
        .split(|&b| b == b'\n')
        .map(decode_row)
        .map(|row| row.trim_end_matches('\r').trim().to_string())
        .filter(|row| !row.is_empty())
        .collect();
    Ok(rows)
}

fn save_rows<'a>(path: &Path, rows: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut sorted: Vec<&str> = rows.collect();
    sorted.sort_unstable();
    let mut out = sorted.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}

/// Parse a space-joined tag-label row; rows with unknown labels are skipped.
fn parse_pattern_row(row: &str) -> Option<LinePattern> {
    let tags: Option<LinePattern> = row.split_whitespace().map(PosTag::parse).collect();
    tags.filter(|t| !t.is_empty())
}

//! Line extraction: selected blocks to cleaned ingredient lines.
//!
//! Converts blocks into an ordered, deduplicated sequence of normalized
//! lines, and handles the write-back of "file-worthy" line shapes into the
//! lexicon. Short lines (at or under `min_pattern_words`) are emitted as
//! output but never recorded as patterns — they are too ambiguous to be
//! reliable shapes.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::lexicon::Lexicon;
use crate::options::Options;
use crate::selector::DomBlock;
use crate::tagger::Tagger;
use crate::text::{normalize_line, tokenize, word_count};

/// Produce cleaned ingredient lines from the selected blocks, in document
/// order, deduplicated, capped at `options.max_ingredients`. Hitting the cap
/// is recorded in `warnings`.
#[must_use]
pub fn extract_lines(
    blocks: &[DomBlock],
    options: &Options,
    warnings: &mut Vec<String>,
) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut lines = Vec::new();
    for block in blocks {
        let line = normalize_line(&block.text);
        if line.is_empty() || !seen.insert(line.clone()) {
            continue;
        }
        lines.push(line);
        if lines.len() >= options.max_ingredients {
            warnings.push(format!(
                "line cap of {} reached, remaining blocks dropped",
                options.max_ingredients
            ));
            break;
        }
    }
    lines
}

/// Whether a line is long enough to be recorded as a future pattern.
#[must_use]
pub fn file_worthy(line: &str, options: &Options) -> bool {
    word_count(line) > options.min_pattern_words
}

/// Record the shapes of accepted lines into the lexicon. Returns the number
/// of new patterns added. Tagging failures skip the line; they never abort
/// the batch.
pub fn accept_lines(
    lexicon: &mut Lexicon,
    tagger: &dyn Tagger,
    lines: &[String],
    options: &Options,
) -> usize {
    if !options.learn_patterns {
        return 0;
    }
    let mut added = 0;
    for line in lines {
        if !file_worthy(line, options) {
            continue;
        }
        // Collapse known collocations first so the recorded shape matches
        // what the anchor scan will see on future pages.
        let tokens = lexicon.merge_collocations(&tokenize(line));
        match tagger.tag_sequence(&tokens) {
            Ok(sequence) => {
                if lexicon.insert_pattern(sequence) {
                    added += 1;
                }
            }
            Err(err) => {
                warn!(%err, line, "tagging failed, line not recorded");
            }
        }
    }
    if added > 0 {
        debug!(added, "new line patterns recorded");
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::RuleTagger;

    fn block(text: &str) -> DomBlock {
        DomBlock { tag: "li".to_string(), attrs: Vec::new(), text: text.to_string() }
    }

    #[test]
    fn lines_are_normalized_and_ordered() {
        let blocks = vec![block("2 Cups  FLOUR,"), block("1 cup sugar")];
        let lines = extract_lines(&blocks, &Options::default(), &mut Vec::new());
        assert_eq!(lines, vec!["2 cups flour", "1 cup sugar"]);
    }

    #[test]
    fn duplicates_and_empties_are_dropped() {
        let blocks = vec![block("2 cups flour"), block("2 cups flour"), block("  ")];
        let lines = extract_lines(&blocks, &Options::default(), &mut Vec::new());
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn cap_is_respected_and_warned_about() {
        let blocks: Vec<DomBlock> = (0..60).map(|i| block(&format!("{i} cups flour"))).collect();
        let mut warnings = Vec::new();
        let lines = extract_lines(&blocks, &Options::default(), &mut warnings);
        assert_eq!(lines.len(), Options::default().max_ingredients);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("line cap"));
    }

    #[test]
    fn short_lines_are_emitted_but_not_file_worthy() {
        let options = Options::default();
        let blocks = vec![block("3 eggs"), block("2 cups all-purpose flour")];
        let lines = extract_lines(&blocks, &options, &mut Vec::new());
        assert_eq!(lines.len(), 2);
        assert!(!file_worthy(&lines[0], &options));
        assert!(file_worthy(&lines[1], &options));
    }

    #[test]
    fn accept_lines_records_only_long_shapes() {
        let options = Options::default();
        let mut lexicon = Lexicon::new();
        let lines =
            vec!["3 eggs".to_string(), "2 cups all-purpose flour".to_string()];
        let added = accept_lines(&mut lexicon, &RuleTagger::new(), &lines, &options);
        assert_eq!(added, 1);
        assert_eq!(lexicon.pattern_count(), 1);

        // Re-accepting the same lines adds nothing (dedup invariant).
        let added = accept_lines(&mut lexicon, &RuleTagger::new(), &lines, &options);
        assert_eq!(added, 0);
        assert_eq!(lexicon.pattern_count(), 1);
    }

    #[test]
    fn known_collocations_shape_recorded_patterns() {
        use crate::tagger::PosTag;

        let options = Options::default();
        let mut lexicon = Lexicon::new();
        lexicon.insert_collocation("olive oil");
        let lines = vec!["2 cups olive oil".to_string()];
        assert_eq!(accept_lines(&mut lexicon, &RuleTagger::new(), &lines, &options), 1);
        // The merged pair tags as a single noun.
        assert!(lexicon.matches_pattern(&[PosTag::Cd, PosTag::Nns, PosTag::Nn]));
        assert!(!lexicon.matches_pattern(&[PosTag::Cd, PosTag::Nns, PosTag::Nn, PosTag::Nn]));
    }

    #[test]
    fn learning_can_be_disabled() {
        let options = Options { learn_patterns: false, ..Options::default() };
        let mut lexicon = Lexicon::new();
        let lines = vec!["2 cups all-purpose flour".to_string()];
        assert_eq!(accept_lines(&mut lexicon, &RuleTagger::new(), &lines, &options), 0);
        assert_eq!(lexicon.pattern_count(), 0);
    }
}

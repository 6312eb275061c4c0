//! Corpus learner: collocation mining and food-word harvesting.
//!
//! Batch process over the accumulated corpus of accepted lines. Mines
//! bigram through quadgram collocations ranked by pointwise mutual
//! information, keeps a fixed-size top slice per order, and harvests every
//! noun and plural-noun token as a food-word candidate. Results are merged
//! into the lexicon with mandatory deduplication — the store only ever
//! grows.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::lexicon::Lexicon;
use crate::patterns::NUMERIC_TOKEN;
use crate::tagger::Tagger;
use crate::text::{normalize_line, tokenize};

/// Candidate entries mined from a corpus, not yet merged into a lexicon.
#[derive(Debug, Default)]
pub struct Harvest {
    /// Space-joined collocation phrases, best-ranked first.
    pub collocations: Vec<String>,
    /// Noun tokens seen in the corpus.
    pub food_words: Vec<String>,
}

impl Harvest {
    /// Merge into a lexicon, deduplicating against existing entries.
    /// Returns (new collocations, new food words).
    pub fn merge_into(&self, lexicon: &mut Lexicon) -> (usize, usize) {
        let mut new_collocations = 0;
        for phrase in &self.collocations {
            if lexicon.insert_collocation(phrase) {
                new_collocations += 1;
            }
        }
        let mut new_words = 0;
        for word in &self.food_words {
            if lexicon.insert_food_word(word) {
                new_words += 1;
            }
        }
        debug!(new_collocations, new_words, "harvest merged");
        (new_collocations, new_words)
    }
}

/// Collocation miner.
#[derive(Debug, Clone)]
pub struct Learner {
    /// Collocations kept per n-gram order.
    pub top_n: usize,
}

impl Default for Learner {
    fn default() -> Self {
        Self { top_n: 200 }
    }
}

impl Learner {
    /// Create a learner keeping `top_n` collocations per n-gram order.
    #[must_use]
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Mine a corpus of accepted lines. N-grams never cross line
    /// boundaries. Tagging failures skip the affected line's noun harvest
    /// but do not stop the mining.
    #[must_use]
    pub fn mine(&self, corpus: &[String], tagger: &dyn Tagger) -> Harvest {
        let lines: Vec<Vec<String>> =
            corpus.iter().map(|line| tokenize(&normalize_line(line))).collect();

        let mut collocations = Vec::new();
        for order in 2..=4 {
            collocations.extend(self.top_collocations(&lines, order));
        }

        Harvest { collocations, food_words: harvest_nouns(&lines, tagger) }
    }

    /// Top collocations of one order ranked by PMI, best first. Ties break
    /// on the phrase text so the ranking is deterministic.
    fn top_collocations(&self, lines: &[Vec<String>], order: usize) -> Vec<String> {
        let mut unigram_counts: HashMap<&str, usize> = HashMap::new();
        let mut total_unigrams = 0usize;
        for line in lines {
            for token in line {
                *unigram_counts.entry(token).or_insert(0) += 1;
                total_unigrams += 1;
            }
        }
        if total_unigrams == 0 {
            return Vec::new();
        }

        let mut ngram_counts: HashMap<Vec<&str>, usize> = HashMap::new();
        let mut total_ngrams = 0usize;
        for line in lines {
            if line.len() < order {
                continue;
            }
            for window in line.windows(order) {
                let gram: Vec<&str> = window.iter().map(String::as_str).collect();
                *ngram_counts.entry(gram).or_insert(0) += 1;
                total_ngrams += 1;
            }
        }
        if total_ngrams == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(f64, String)> = ngram_counts
            .iter()
            .map(|(gram, &count)| {
                let joint = count as f64 / total_ngrams as f64;
                let independent: f64 = gram
                    .iter()
                    .map(|w| {
                        unigram_counts.get(w).copied().unwrap_or(1) as f64
                            / total_unigrams as f64
                    })
                    .product();
                let pmi = (joint / independent).log2();
                (pmi, gram.join(" "))
            })
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal).then(a.1.cmp(&b.1))
        });
        scored.into_iter().take(self.top_n).map(|(_, phrase)| phrase).collect()
    }
}

/// Collect every noun/plural-noun token from the tagged lines, skipping
/// numeric tokens. The accumulator is local and returned by value.
fn harvest_nouns(lines: &[Vec<String>], tagger: &dyn Tagger) -> Vec<String> {
    let mut nouns = Vec::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        let tagged = match tagger.tag(line) {
            Ok(tagged) => tagged,
            Err(err) => {
                warn!(%err, "tagging failed, skipping line in noun harvest");
                continue;
            }
        };
        for token in tagged {
            if token.tag.is_noun() && !NUMERIC_TOKEN.is_match(&token.text) {
                nouns.push(token.text);
            }
        }
    }
    nouns.sort_unstable();
    nouns.dedup();
    nouns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::RuleTagger;

    fn corpus() -> Vec<String> {
        vec![
            "2 cups olive oil".to_string(),
            "1 cup olive oil".to_string(),
            "3 cups chopped onion".to_string(),
            "1 pinch salt".to_string(),
        ]
    }

    #[test]
    fn mines_repeated_bigram() {
        let harvest = Learner::default().mine(&corpus(), &RuleTagger::new());
        assert!(harvest.collocations.iter().any(|c| c == "olive oil"));
    }

    #[test]
    fn harvests_nouns_not_numbers() {
        let harvest = Learner::default().mine(&corpus(), &RuleTagger::new());
        assert!(harvest.food_words.iter().any(|w| w == "salt"));
        assert!(harvest.food_words.iter().any(|w| w == "oil"));
        assert!(!harvest.food_words.iter().any(|w| w == "2"));
    }

    #[test]
    fn top_n_caps_each_order() {
        let learner = Learner::new(1);
        let harvest = learner.mine(&corpus(), &RuleTagger::new());
        // One bigram + one trigram + one quadgram at most.
        assert!(harvest.collocations.len() <= 3);
    }

    #[test]
    fn merge_deduplicates_against_store() {
        let harvest = Learner::default().mine(&corpus(), &RuleTagger::new());
        let mut lexicon = Lexicon::new();
        let (colls, words) = harvest.merge_into(&mut lexicon);
        assert!(colls > 0);
        assert!(words > 0);

        // Second merge adds nothing; the store is monotonically growing.
        let (colls2, words2) = harvest.merge_into(&mut lexicon);
        assert_eq!(colls2, 0);
        assert_eq!(words2, 0);
    }

    #[test]
    fn empty_corpus_yields_empty_harvest() {
        let harvest = Learner::default().mine(&[], &RuleTagger::new());
        assert!(harvest.collocations.is_empty());
        assert!(harvest.food_words.is_empty());
    }
}

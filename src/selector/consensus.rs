//! Structural-consensus block selection.
//!
//! The primary strategy. A first pass walks the document in order looking
//! for the coarsest element whose flattened text has the exact tag-sequence
//! shape of a previously accepted ingredient line and contains at least one
//! known food word. That anchor's structural depth becomes the tolerance; a
//! second pass collects the attribute maps of every element at the same
//! depth that carries a food word. Attribute-frequency voting across those
//! maps picks the consensus signature, and every element sharing it becomes
//! an ingredient block. One-off attribute pairs (auto-generated ids) are
//! pruned; ties among maximum-frequency pairs are all kept, because an
//! ingredient list is often split across several identically marked
//! elements.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::dom::{self, Document};
use crate::lexicon::Lexicon;
use crate::selector::DomBlock;
use crate::tagger::Tagger;
use crate::text::{normalize_line, tokenize};

/// Run the consensus scan. An empty result is a legitimate "nothing found"
/// outcome, not an error; the pipeline falls through to the next strategy.
/// Per-candidate tagging failures are recorded in `warnings` and skipped.
#[must_use]
pub fn select(
    doc: &Document,
    lexicon: &Lexicon,
    tagger: &dyn Tagger,
    warnings: &mut Vec<String>,
) -> Vec<DomBlock> {
    let body = doc.select("body");
    if body.is_empty() {
        return Vec::new();
    }
    let candidates = dom::descendant_elements(&body);

    // Pass 1: anchor on the first pattern+food hit with attributes.
    // Document order guarantees parents precede children, so the first hit
    // is the coarsest container that already satisfies both signals.
    let Some(tolerance) = find_anchor(&candidates, lexicon, tagger, warnings) else {
        trace!("no line-pattern anchor found");
        return Vec::new();
    };

    // Pass 2: gather attribute maps of every element at the anchor's depth
    // whose text carries a food word.
    let mut attr_maps: Vec<Vec<(String, String)>> = Vec::new();
    for sel in &candidates {
        if dom::null_descendant_count(sel) != tolerance {
            continue;
        }
        let tokens = tokenize(&normalize_line(&dom::text_content(sel)));
        if tokens.is_empty() || !lexicon.has_food_word(&tokens) {
            continue;
        }
        attr_maps.push(dom::get_all_attributes(sel));
    }

    let consensus = consensus_pairs(&attr_maps);
    if consensus.is_empty() {
        trace!(tolerance, maps = attr_maps.len(), "no attribute consensus");
        return Vec::new();
    }
    debug!(tolerance, pairs = consensus.len(), "attribute consensus reached");

    // Final pass: every element sharing a consensus pair, in document order.
    let mut blocks = Vec::new();
    for sel in &candidates {
        let attrs = dom::get_all_attributes(sel);
        let selected = attrs.iter().any(|pair| consensus.contains(pair));
        if !selected {
            continue;
        }
        let block = DomBlock::from_selection(sel);
        if !block.text.is_empty() {
            blocks.push(block);
        }
    }
    blocks
}

/// Pass 1: first pattern+food hit with non-empty attributes, returning the
/// recorded tolerance (the anchor's structural depth).
fn find_anchor(
    candidates: &[dom::Selection],
    lexicon: &Lexicon,
    tagger: &dyn Tagger,
    warnings: &mut Vec<String>,
) -> Option<usize> {
    for sel in candidates {
        let tokens = tokenize(&normalize_line(&dom::text_content(sel)));
        if tokens.is_empty() {
            continue;
        }
        // Known collocations collapse to one token so the shape matches
        // patterns recorded after the collocation was learned.
        let shaped = lexicon.merge_collocations(&tokens);
        let sequence = match tagger.tag_sequence(&shaped) {
            Ok(seq) => seq,
            Err(err) => {
                warn!(%err, "tagging failed for candidate, skipping");
                warnings.push(format!("candidate skipped, tagging failed: {err}"));
                continue;
            }
        };
        if !lexicon.matches_pattern(&sequence) || !lexicon.has_food_word(&tokens) {
            continue;
        }
        if dom::get_all_attributes(sel).is_empty() {
            // An anchor we cannot vote on; keep looking for a marked one.
            continue;
        }
        return Some(dom::null_descendant_count(sel));
    }
    None
}

/// Frequency vote over attribute pairs. Pairs seen exactly once are noise
/// (one-off identifiers); all pairs at the maximum remaining count win.
fn consensus_pairs(attr_maps: &[Vec<(String, String)>]) -> Vec<(String, String)> {
    let mut counts: HashMap<&(String, String), usize> = HashMap::new();
    for map in attr_maps {
        for pair in map {
            *counts.entry(pair).or_insert(0) += 1;
        }
    }
    counts.retain(|_, count| *count > 1);
    let Some(max) = counts.values().copied().max() else {
        return Vec::new();
    };
    counts
        .into_iter()
        .filter(|(_, count)| *count == max)
        .map(|(pair, _)| pair.clone())
        .collect()
}

//! Food-word-density fallback strategy.
//!
//! Scans container blocks (div, section, ul, ol) for regions where the
//! fraction of known food words passes the configured threshold, then
//! splits the first dense block into per-line candidates.

use tracing::debug;

use crate::dom::{self, Document, Selection};
use crate::lexicon::Lexicon;
use crate::options::Options;
use crate::selector::DomBlock;
use crate::text::{normalize_line, tokenize, word_count};

const CONTAINER_SELECTOR: &str = "div, section, ul, ol";

/// Run the density scan. Returns blocks from the first container whose
/// food-word density exceeds `options.food_density`.
#[must_use]
pub fn select(doc: &Document, lexicon: &Lexicon, options: &Options) -> Vec<DomBlock> {
    for container in doc.select(CONTAINER_SELECTOR).iter() {
        let text = dom::text_content(&container);
        let tokens = tokenize(&normalize_line(&text));
        if tokens.len() < 3 {
            continue;
        }
        let density = lexicon.food_density(&tokens);
        if density <= options.food_density {
            continue;
        }
        debug!(density, tokens = tokens.len(), "dense block found");
        let blocks = split_block(&container, lexicon);
        if !blocks.is_empty() {
            return blocks;
        }
    }
    Vec::new()
}

/// Split a dense container into line candidates: its list items when it has
/// any, otherwise the container itself as a single block. Heading-like
/// lines ("Ingredients:") and lines without a food word are dropped.
fn split_block(container: &Selection, lexicon: &Lexicon) -> Vec<DomBlock> {
    let items = container.select("li");
    let mut blocks = Vec::new();
    if items.is_empty() {
        if line_qualifies(&dom::text_content(container), lexicon) {
            blocks.push(DomBlock::from_selection(container));
        }
        return blocks;
    }
    for item in items.iter() {
        if line_qualifies(&dom::text_content(&item), lexicon) {
            blocks.push(DomBlock::from_selection(&item));
        }
    }
    blocks
}

fn line_qualifies(text: &str, lexicon: &Lexicon) -> bool {
    let trimmed = text.trim();
    if trimmed.len() <= 2 || trimmed.ends_with(':') {
        return false;
    }
    let normalized = normalize_line(trimmed);
    word_count(&normalized) > 0 && lexicon.has_food_word(&tokenize(&normalized))
}

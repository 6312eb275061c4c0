//! Plain list fallback strategy.
//!
//! The last resort: any ul/ol where at least `min_list_items` items carry a
//! known food word is assumed to be the ingredient list.

use tracing::debug;

use crate::dom::{self, Document};
use crate::lexicon::Lexicon;
use crate::options::Options;
use crate::selector::DomBlock;
use crate::text::{normalize_line, tokenize};

/// Run the list scan. Returns the items of the first qualifying list.
#[must_use]
pub fn select(doc: &Document, lexicon: &Lexicon, options: &Options) -> Vec<DomBlock> {
    for list in doc.select("ul, ol").iter() {
        let mut blocks = Vec::new();
        for item in list.select("li").iter() {
            let text = dom::text_content(&item);
            let trimmed = text.trim();
            if trimmed.len() < 3 {
                continue;
            }
            let tokens = tokenize(&normalize_line(trimmed));
            if lexicon.has_food_word(&tokens) {
                blocks.push(DomBlock::from_selection(&item));
            }
        }
        if blocks.len() >= options.min_list_items {
            debug!(items = blocks.len(), "qualifying list found");
            return blocks;
        }
    }
    Vec::new()
}

//! Semantic markup strategy.
//!
//! Many recipe sites annotate ingredient lines with schema.org microdata or
//! conventional class names. When present these beat any heuristic, so this
//! strategy runs first. Selectors are tried in order; the first one with
//! hits wins.

use tracing::debug;

use crate::dom::Document;
use crate::selector::DomBlock;

/// Common ingredient markup patterns, most specific first.
const SELECTORS: &[&str] = &[
    // Schema.org microdata
    r#"[itemprop="recipeIngredient"]"#,
    r#"[itemprop="ingredients"]"#,
    // Common class names
    ".ingredient",
    ".ingredients li",
    ".recipe-ingredients li",
    ".ingredient-list li",
    // Common ID patterns
    "#ingredients li",
    "#ingredient-list li",
];

/// Run the semantic markup scan.
#[must_use]
pub fn select(doc: &Document) -> Vec<DomBlock> {
    for selector in SELECTORS {
        let mut blocks = Vec::new();
        for element in doc.select(selector).iter() {
            let block = DomBlock::from_selection(&element);
            if block.text.len() > 2 {
                blocks.push(block);
            }
        }
        if !blocks.is_empty() {
            debug!(selector, hits = blocks.len(), "semantic markup matched");
            return blocks;
        }
    }
    Vec::new()
}

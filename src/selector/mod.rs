//! Block selection strategies.
//!
//! Each strategy scans the cleaned document for the element(s) most likely
//! to carry the ingredient list and returns them as transient [`DomBlock`]
//! values, one per line-bearing element, in document order. The pipeline
//! tries strategies in a fixed order and takes the first non-empty result:
//! semantic markup, structural consensus, food-word density, plain lists.

use crate::dom::{self, Selection};

pub mod consensus;
pub mod density;
pub mod lists;
pub mod markup;

/// A candidate region of the page. Exists only during one extraction
/// request.
#[derive(Debug, Clone)]
pub struct DomBlock {
    /// Element tag name.
    pub tag: String,
    /// Attribute key/value pairs (list-valued attributes kept joined).
    pub attrs: Vec<(String, String)>,
    /// Flattened visible text.
    pub text: String,
}

impl DomBlock {
    /// Capture a selection as a block.
    #[must_use]
    pub fn from_selection(sel: &Selection) -> Self {
        Self {
            tag: dom::tag_name(sel).unwrap_or_default(),
            attrs: dom::get_all_attributes(sel),
            text: dom::text_content(sel).trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn block_captures_tag_attrs_text() {
        let doc = dom::parse(r#"<li class="ingredient">2 cups flour</li>"#);
        let block = DomBlock::from_selection(&doc.select("li"));
        assert_eq!(block.tag, "li");
        assert_eq!(block.text, "2 cups flour");
        assert!(block.attrs.iter().any(|(k, v)| k == "class" && v == "ingredient"));
    }
}

//! DOM operations adapter.
//!
//! Thin layer over the `dom_query` crate providing the handful of operations
//! the block selector needs: flattened text, attribute maps, document-order
//! descendant iteration, and the structural-depth measure used as the
//! selection tolerance.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes().first().and_then(dom_query::NodeRef::node_name).map(|t| t.to_string())
}

/// Get all attributes as key-value pairs.
///
/// Returns empty vector if node has no attributes or if selection is empty.
/// Multi-valued attributes (`class="a b"`) keep their serialized joined form,
/// which is exactly the folding the attribute-consensus vote wants.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Get a single attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// All element descendants of a selection in document order.
///
/// `dom_query` yields `select("*")` matches in document order, so parents
/// always come before their children — the property the first-hit
/// short-circuit of the block selector depends on.
#[must_use]
pub fn descendant_elements<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.select("*").nodes().iter().map(|node| Selection::from(*node)).collect()
}

/// Whether the element owns a non-whitespace text node directly (not through
/// a child element).
#[must_use]
pub fn has_direct_text(node: &NodeRef) -> bool {
    node.children()
        .iter()
        .any(|child| child.is_text() && !child.text().trim().is_empty())
}

/// Count descendant elements that carry no direct text of their own.
///
/// This is the structural-depth measure ("descendant-null-ratio") used by the
/// block selector: a leaf line element scores 0, a wrapper whose children are
/// themselves wrappers scores higher. Elements at equal score are assumed to
/// sit at the same structural depth of the ingredient container.
#[must_use]
pub fn null_descendant_count(sel: &Selection) -> usize {
    let Some(root) = sel.nodes().first() else {
        return 0;
    };
    let mut count = 0;
    let mut stack: Vec<NodeRef> = root.children().into_iter().filter(NodeRef::is_element).collect();
    while let Some(node) = stack.pop() {
        if !has_direct_text(&node) {
            count += 1;
        }
        stack.extend(node.children().into_iter().filter(NodeRef::is_element));
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_enumerated_with_joined_class() {
        let doc = parse(r#"<li class="ingredient checked" id="row1">2 cups flour</li>"#);
        let li = doc.select("li");
        let attrs = get_all_attributes(&li);
        assert!(attrs.iter().any(|(k, v)| k == "class" && v == "ingredient checked"));
        assert!(attrs.iter().any(|(k, v)| k == "id" && v == "row1"));
    }

    #[test]
    fn null_count_zero_for_text_leaf() {
        let doc = parse("<li>2 cups flour</li>");
        assert_eq!(null_descendant_count(&doc.select("li")), 0);
    }

    #[test]
    fn null_count_zero_for_list_of_text_items() {
        // Every li holds direct text, so the ul has no "null" descendants.
        let doc = parse("<ul><li>flour</li><li>sugar</li></ul>");
        assert_eq!(null_descendant_count(&doc.select("ul")), 0);
    }

    #[test]
    fn null_count_grows_with_wrapper_nesting() {
        let doc = parse("<div><ul><li><span>flour</span></li></ul></div>");
        // ul and li carry no direct text; span does.
        assert_eq!(null_descendant_count(&doc.select("div")), 2);
    }

    #[test]
    fn descendants_in_document_order() {
        let doc = parse("<div><ul><li>a</li><li>b</li></ul></div>");
        let body = doc.select("body");
        let tags: Vec<String> =
            descendant_elements(&body).iter().filter_map(tag_name).collect();
        assert_eq!(tags, vec!["div", "ul", "li", "li"]);
    }
}

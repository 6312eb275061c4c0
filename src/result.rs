//! Extraction result types.

use serde::{Deserialize, Serialize};

use crate::decompose::Ingredient;

/// Which strategy produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Semantic markup selectors (`itemprop="recipeIngredient"`, common
    /// ingredient class names).
    SemanticMarkup,
    /// Structural consensus: line-pattern match plus attribute-frequency
    /// voting across sibling blocks.
    Consensus,
    /// Food-word-density scan over container blocks.
    FoodDensity,
    /// Plain list scan: any list with enough food-word-bearing items.
    ListScan,
    /// No strategy found anything; the result is empty.
    None,
}

/// Result of an ingredient extraction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Cleaned ingredient lines in document order, deduplicated.
    pub lines: Vec<String>,
    /// Decomposed records, populated when `Options::decompose` is set.
    /// Parallel to `lines`.
    pub ingredients: Vec<Ingredient>,
    /// The strategy that produced the lines.
    pub strategy: Strategy,
    /// Non-fatal problems encountered along the way (skipped lines etc.).
    pub warnings: Vec<String>,
}

impl ExtractResult {
    /// An empty result for pages where nothing qualified.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            ingredients: Vec::new(),
            strategy: Strategy::None,
            warnings: Vec::new(),
        }
    }

    /// Whether any lines were extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result() {
        let r = ExtractResult::empty();
        assert!(r.is_empty());
        assert_eq!(r.strategy, Strategy::None);
    }

    #[test]
    fn strategy_serializes_snake_case() {
        #[allow(clippy::expect_used)]
        let json = serde_json::to_string(&Strategy::SemanticMarkup).expect("serialize");
        assert_eq!(json, "\"semantic_markup\"");
    }
}

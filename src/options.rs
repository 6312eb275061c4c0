//! Configuration options for ingredient extraction.
//!
//! The `Options` struct controls strategy selection and filtering thresholds.
//! All fields are public for easy configuration; use `Default::default()`
//! for standard settings.

/// Configuration options for ingredient extraction.
///
/// # Example
///
/// ```rust
/// use ladle::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     decompose: true,
///     food_density: 0.3,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Decompose each extracted line into quantity/unit/item.
    ///
    /// Default: `false`
    pub decompose: bool,

    /// Try semantic markup selectors (`itemprop="recipeIngredient"` and
    /// common ingredient class names) before the structural consensus scan.
    ///
    /// Default: `true`
    pub use_semantic_markup: bool,

    /// Fall back to the food-word-density scan when consensus finds nothing.
    ///
    /// Default: `true`
    pub use_density_fallback: bool,

    /// Fall back to the plain list scan as the last strategy.
    ///
    /// Default: `true`
    pub use_list_fallback: bool,

    /// Minimum fraction of a block's words that must be known food words for
    /// the density strategy to accept the block.
    ///
    /// Default: `0.25`
    pub food_density: f64,

    /// Minimum number of food-word-bearing items for the list strategy to
    /// accept a list.
    ///
    /// Default: `3`
    pub min_list_items: usize,

    /// Maximum number of lines emitted per extraction.
    ///
    /// Default: `50`
    pub max_ingredients: usize,

    /// Lines with this many words or fewer are emitted but never written
    /// back into the pattern corpus (too ambiguous to be reliable shapes).
    ///
    /// Default: `3`
    pub min_pattern_words: usize,

    /// Record accepted line shapes into the lexicon when
    /// [`accept_lines`](crate::accept_lines) is called.
    ///
    /// Default: `true`
    pub learn_patterns: bool,

    /// Collocations kept per n-gram order when mining the corpus.
    ///
    /// Default: `200`
    pub top_collocations: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            decompose: false,
            use_semantic_markup: true,
            use_density_fallback: true,
            use_list_fallback: true,
            food_density: 0.25,
            min_list_items: 3,
            max_ingredients: 50,
            min_pattern_words: 3,
            learn_patterns: true,
            top_collocations: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_thresholds() {
        let opts = Options::default();

        assert!(!opts.decompose);
        assert!(opts.use_semantic_markup);
        assert!(opts.use_density_fallback);
        assert!(opts.use_list_fallback);
        assert!((opts.food_density - 0.25).abs() < f64::EPSILON);
        assert_eq!(opts.min_list_items, 3);
        assert_eq!(opts.max_ingredients, 50);
        assert_eq!(opts.min_pattern_words, 3);
        assert!(opts.learn_patterns);
        assert_eq!(opts.top_collocations, 200);
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            food_density: 0.4,
            max_ingredients: 20,
            min_pattern_words: 2,
            ..Options::default()
        };

        assert!((opts.food_density - 0.4).abs() < f64::EPSILON);
        assert_eq!(opts.max_ingredients, 20);
        assert_eq!(opts.min_pattern_words, 2);
    }

    #[test]
    fn test_boolean_options_can_be_toggled() {
        let opts = Options {
            decompose: true,
            use_semantic_markup: false,
            use_density_fallback: false,
            use_list_fallback: false,
            ..Options::default()
        };

        assert!(opts.decompose);
        assert!(!opts.use_semantic_markup);
        assert!(!opts.use_density_fallback);
        assert!(!opts.use_list_fallback);
    }
}

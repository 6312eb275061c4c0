//! # ladle
//!
//! Heuristic extraction of recipe ingredients from arbitrary web pages.
//!
//! No site-specific scraper: a chain of strategies locates the ingredient
//! block inside unstructured HTML — semantic markup, structural consensus
//! over previously learned line shapes, food-word density, plain list
//! scanning — then cleans the block into ingredient lines and optionally
//! decomposes each line into quantity, unit and item.
//!
//! The pipeline consults a [`Lexicon`] of known food words, collocations
//! and accepted line shapes that grows across runs: accepted lines feed the
//! [`Learner`], which mines collocations and food-word candidates back into
//! the store.
//!
//! ## Quick Start
//!
//! ```rust
//! use ladle::{extract_ingredients, Lexicon, RuleTagger};
//!
//! let html = r#"<html><body><ul>
//!     <li itemprop="recipeIngredient">2 cups flour</li>
//!     <li itemprop="recipeIngredient">1 cup sugar</li>
//! </ul></body></html>"#;
//!
//! let lexicon = Lexicon::new();
//! let tagger = RuleTagger::new();
//! let result = extract_ingredients(html, &lexicon, &tagger)?;
//! assert_eq!(result.lines, vec!["2 cups flour", "1 cup sugar"]);
//! # Ok::<(), ladle::Error>(())
//! ```
//!
//! Extraction is best-effort: a page where nothing qualifies yields an
//! empty result, never an error. Only fatal input problems (empty or
//! body-less documents) surface as errors.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and legacy row decoding.
pub mod encoding;

/// Document cleaning ahead of selection.
pub mod html_processing;

/// Lexicon store: food words, collocations, line patterns.
pub mod lexicon;

/// Block selection strategies.
pub mod selector;

/// Line extraction and pattern write-back.
pub mod lines;

/// Quantity/unit/item decomposition.
pub mod decompose;

/// Corpus learner: collocation mining and noun harvesting.
pub mod learner;

/// Part-of-speech tagging adapter.
pub mod tagger;

/// Token and line normalization.
pub mod text;

// Public API - re-exports
pub use decompose::{decompose, Ingredient, MeasureKind, Quantity, Relation};
pub use error::{Error, Result};
pub use learner::{Harvest, Learner};
pub use lexicon::{Lexicon, LinePattern};
pub use lines::accept_lines;
pub use options::Options;
pub use result::{ExtractResult, Strategy};
pub use tagger::{PosTag, RuleTagger, TaggedToken, Tagger};

/// Extracts ingredient lines from an HTML document using default options.
pub fn extract_ingredients(
    html: &str,
    lexicon: &Lexicon,
    tagger: &dyn Tagger,
) -> Result<ExtractResult> {
    extract_ingredients_with_options(html, lexicon, tagger, &Options::default())
}

/// Extracts ingredient lines from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use ladle::{extract_ingredients_with_options, Lexicon, Options, RuleTagger};
///
/// let html = r#"<html><body>
///     <li itemprop="recipeIngredient">1 1/2 cups flour</li>
/// </body></html>"#;
/// let options = Options { decompose: true, ..Options::default() };
/// let result =
///     extract_ingredients_with_options(html, &Lexicon::new(), &RuleTagger::new(), &options)?;
/// assert_eq!(result.ingredients[0].item, "flour");
/// # Ok::<(), ladle::Error>(())
/// ```
pub fn extract_ingredients_with_options(
    html: &str,
    lexicon: &Lexicon,
    tagger: &dyn Tagger,
    options: &Options,
) -> Result<ExtractResult> {
    extract::extract_ingredients(html, lexicon, tagger, options)
}

/// Extracts ingredient lines from HTML bytes with automatic encoding
/// detection.
///
/// Detects the charset from meta tags and converts to UTF-8 before
/// extraction. Invalid characters are replaced with � rather than causing
/// errors.
pub fn extract_bytes_with_options(
    html: &[u8],
    lexicon: &Lexicon,
    tagger: &dyn Tagger,
    options: &Options,
) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_ingredients_with_options(&html_str, lexicon, tagger, options)
}

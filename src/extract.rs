//! Pipeline orchestration: fetch contract, strategy chain, line
//! extraction, optional decomposition.
//!
//! Synchronous and single-threaded per request. Each request operates on
//! its own DOM tree; the lexicon is only borrowed immutably here, so
//! independent requests can run concurrently on caller threads.

use tracing::{debug, info};

use crate::decompose;
use crate::dom;
use crate::error::{Error, Result};
use crate::html_processing;
use crate::lexicon::Lexicon;
use crate::lines;
use crate::options::Options;
use crate::result::{ExtractResult, Strategy};
use crate::selector::{consensus, density, lists, markup, DomBlock};
use crate::tagger::Tagger;

pub(crate) fn extract_ingredients(
    html: &str,
    lexicon: &Lexicon,
    tagger: &dyn Tagger,
    options: &Options,
) -> Result<ExtractResult> {
    if html.trim().is_empty() {
        return Err(Error::ParseError("empty input".to_string()));
    }
    let doc = dom::parse(html);
    if doc.select("body").is_empty() {
        return Err(Error::ParseError("document has no body".to_string()));
    }

    html_processing::strip_noise(&doc);

    let mut warnings = Vec::new();
    let (blocks, strategy) = select_blocks(&doc, lexicon, tagger, options, &mut warnings);
    if blocks.is_empty() {
        info!("no ingredient block found, returning empty result");
        return Ok(ExtractResult { warnings, ..ExtractResult::empty() });
    }
    debug!(?strategy, blocks = blocks.len(), "blocks selected");

    let extracted = lines::extract_lines(&blocks, options, &mut warnings);
    if extracted.is_empty() {
        return Ok(ExtractResult { warnings, ..ExtractResult::empty() });
    }

    let ingredients = if options.decompose {
        extracted.iter().map(|line| decompose::decompose(line)).collect()
    } else {
        Vec::new()
    };

    info!(lines = extracted.len(), ?strategy, "extraction complete");
    Ok(ExtractResult { lines: extracted, ingredients, strategy, warnings })
}

/// Try the strategies in order and take the first non-empty result.
fn select_blocks(
    doc: &dom::Document,
    lexicon: &Lexicon,
    tagger: &dyn Tagger,
    options: &Options,
    warnings: &mut Vec<String>,
) -> (Vec<DomBlock>, Strategy) {
    if options.use_semantic_markup {
        let blocks = markup::select(doc);
        if !blocks.is_empty() {
            return (blocks, Strategy::SemanticMarkup);
        }
    }
    let blocks = consensus::select(doc, lexicon, tagger, warnings);
    if !blocks.is_empty() {
        return (blocks, Strategy::Consensus);
    }
    if options.use_density_fallback {
        let blocks = density::select(doc, lexicon, options);
        if !blocks.is_empty() {
            return (blocks, Strategy::FoodDensity);
        }
    }
    if options.use_list_fallback {
        let blocks = lists::select(doc, lexicon, options);
        if !blocks.is_empty() {
            return (blocks, Strategy::ListScan);
        }
    }
    (Vec::new(), Strategy::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::RuleTagger;

    fn seeded_lexicon() -> Lexicon {
        let mut lex = Lexicon::new();
        for word in ["flour", "sugar", "milk", "eggs", "butter"] {
            lex.insert_food_word(word);
        }
        lex
    }

    #[test]
    fn empty_input_is_a_fatal_error() {
        let result =
            extract_ingredients("   ", &seeded_lexicon(), &RuleTagger::new(), &Options::default());
        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    #[test]
    fn page_without_ingredients_yields_empty_result() {
        let html = "<html><body><p>nothing to see here</p></body></html>";
        let result =
            extract_ingredients(html, &seeded_lexicon(), &RuleTagger::new(), &Options::default());
        #[allow(clippy::unwrap_used)]
        let result = result.unwrap();
        assert!(result.is_empty());
        assert_eq!(result.strategy, Strategy::None);
    }

    #[test]
    fn markup_strategy_wins_when_present() {
        let html = r#"<html><body>
            <li itemprop="recipeIngredient">2 cups flour</li>
            <li itemprop="recipeIngredient">1 cup milk</li>
            <li itemprop="recipeIngredient">3 eggs</li>
        </body></html>"#;
        #[allow(clippy::unwrap_used)]
        let result = extract_ingredients(
            html,
            &seeded_lexicon(),
            &RuleTagger::new(),
            &Options::default(),
        )
        .unwrap();
        assert_eq!(result.strategy, Strategy::SemanticMarkup);
        assert_eq!(result.lines, vec!["2 cups flour", "1 cup milk", "3 eggs"]);
    }

    #[test]
    fn tagging_failures_surface_as_warnings() {
        use crate::tagger::TaggedToken;

        struct BrokenTagger;
        impl Tagger for BrokenTagger {
            fn tag(&self, _tokens: &[String]) -> Result<Vec<TaggedToken>> {
                Err(Error::TaggingError("tag model unavailable".to_string()))
            }
        }

        let html = r#"<html><body><ul>
            <li class="ingredient">2 cups flour</li>
            <li class="ingredient">1 cup milk</li>
        </ul></body></html>"#;
        let options = Options {
            use_semantic_markup: false,
            use_density_fallback: false,
            use_list_fallback: false,
            ..Options::default()
        };
        #[allow(clippy::unwrap_used)]
        let result = extract_ingredients(html, &seeded_lexicon(), &BrokenTagger, &options).unwrap();
        assert!(result.is_empty());
        assert!(!result.warnings.is_empty());
        assert!(result.warnings[0].contains("tagging failed"));
    }

    #[test]
    fn decompose_option_populates_ingredients() {
        let html = r#"<html><body>
            <li itemprop="recipeIngredient">1 1/2 cups flour</li>
            <li itemprop="recipeIngredient">2-3 eggs</li>
            <li itemprop="recipeIngredient">1 cup milk</li>
        </body></html>"#;
        let options = Options { decompose: true, ..Options::default() };
        #[allow(clippy::unwrap_used)]
        let result =
            extract_ingredients(html, &seeded_lexicon(), &RuleTagger::new(), &options).unwrap();
        assert_eq!(result.ingredients.len(), 3);
        assert_eq!(result.ingredients[0].quantity, decompose::Quantity::Exact(1.5));
        assert_eq!(
            result.ingredients[1].quantity,
            decompose::Quantity::Range { low: 2.0, high: 3.0 }
        );
    }
}

//! Compiled regex patterns for the decomposition grammar and text cleanup.
//!
//! All patterns are compiled once at startup using `LazyLock`. The quantity
//! grammar is layered: fraction rewriting runs first, then range joining,
//! then the leading quantity+unit capture consumes the head of the line.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Cleaning
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

// =============================================================================
// Fraction / Range Rewriting
// =============================================================================

/// Mixed number: "1 1/2" -> whole, numerator, denominator.
/// Must run before [`SIMPLE_FRACTION`] so the whole part is not left behind.
pub static MIXED_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+(\d+)\s*/\s*(\d+)").expect("MIXED_FRACTION regex"));

/// Simple fraction: "3/4" -> numerator, denominator.
pub static SIMPLE_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*/\s*(\d+)").expect("SIMPLE_FRACTION regex"));

/// Numeric range joined by "-", "to" or "or": "2 - 3", "2 to 3", "2 or 3".
/// Rewritten to the canonical hyphen form "2-3" so conjunction detection
/// never mistakes a bare numeric range for an alternative-ingredient clause.
pub static RANGE_JOIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:-|–|\bto\b|\bor\b)\s*(\d+(?:\.\d+)?)")
        .expect("RANGE_JOIN regex")
});

/// Canonical range at the head of a span: "2-3 tomatoes".
pub static LEADING_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)-(\d+(?:\.\d+)?)(?:\s+|$)").expect("LEADING_RANGE regex")
});

// =============================================================================
// Quantity + Unit Grammar
// =============================================================================

/// Measurement-word alternation, longest forms first so abbreviations never
/// shadow their full spellings. Each hit must be followed by whitespace or
/// end-of-input (consumed by the caller group) so "g" cannot eat the head of
/// "garlic".
const MEASURE_ALTERNATION: &str = r"fluid\s+ounces?|fl\.?\s?ozs?\.?|fl\.?\s?ounces?|tablespoons?|tbsps?\.?|tbl\.?|teaspoons?|tsps?\.?|cups?|pints?|pts?\.?|quarts?|qts?\.?|gallons?|gals?\.?|millilit(?:er|re)s?|mls?\.?|lit(?:er|re)s?|ounces?|ozs?\.?|pounds?|lbs?\.?|milligrams?|mgs?\.?|kilograms?|kgs?\.?|grams?|millimet(?:er|re)s?|mms?\.?|centimet(?:er|re)s?|cms?\.?|met(?:er|re)s?|inch(?:es)?|in\.?|g\.?|l\.?|m\.?";

/// Container words that stand in for a measurement ("2 cans tomatoes").
const CONTAINER_ALTERNATION: &str =
    r"cans?|jars?|packages?|containers?|cartons?|box(?:es)?|loa(?:f|ves)";

/// Leading quantity grammar: a number, an optional second number for the
/// "2 8 ounce cans" idiom, an optional measurement word, and an optional
/// container word. Fraction and range rewriting have already run, so the
/// number here is a plain decimal.
pub static QUANTITY_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?P<qty>\d+(?:\.\d+)?)(?:\s+|$)(?:(?P<qty2>\d+(?:\.\d+)?)(?:\s+|$))?(?:(?P<measure>{MEASURE_ALTERNATION})(?:\s+|$))?(?:(?P<container>{CONTAINER_ALTERNATION})(?:\s+|$))?"
    );
    Regex::new(&pattern).expect("QUANTITY_UNIT regex")
});

/// Unit capture without a leading number, applied to the residual after a
/// range quantity ("2-3 cups flour") has been consumed.
pub static UNIT_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?:(?P<measure>{MEASURE_ALTERNATION})(?:\s+|$))?(?:(?P<container>{CONTAINER_ALTERNATION})(?:\s+|$))?"
    );
    Regex::new(&pattern).expect("UNIT_ONLY regex")
});

/// A token that is purely numeric (decimal, fraction, or canonical range).
/// Used by the rule tagger to assign the cardinal-number tag.
pub static NUMERIC_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(?:\.\d+)?(?:[/-]\d+(?:\.\d+)?)?$").expect("NUMERIC_TOKEN regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_fraction_captures_parts() {
        let caps = MIXED_FRACTION.captures("1 1/2 cups flour").expect("match");
        assert_eq!(&caps[1], "1");
        assert_eq!(&caps[2], "1");
        assert_eq!(&caps[3], "2");
    }

    #[test]
    fn range_join_canonicalizes_separators() {
        assert_eq!(RANGE_JOIN.replace_all("2 - 3 tomatoes", "$1-$2"), "2-3 tomatoes");
        assert_eq!(RANGE_JOIN.replace_all("2 to 3 tomatoes", "$1-$2"), "2-3 tomatoes");
        assert_eq!(RANGE_JOIN.replace_all("2 or 3 tomatoes", "$1-$2"), "2-3 tomatoes");
    }

    #[test]
    fn range_join_leaves_word_alternatives_alone() {
        let line = "1 cup milk or 1 cup cream";
        assert_eq!(RANGE_JOIN.replace_all(line, "$1-$2"), line);
    }

    #[test]
    fn quantity_unit_captures_measure() {
        let caps = QUANTITY_UNIT.captures("2 cups flour").expect("match");
        assert_eq!(caps.name("qty").map(|m| m.as_str()), Some("2"));
        assert_eq!(caps.name("measure").map(|m| m.as_str()), Some("cups"));
        assert!(caps.name("container").is_none());
    }

    #[test]
    fn quantity_unit_captures_double_number_idiom() {
        let caps = QUANTITY_UNIT.captures("2 8 ounce cans tomatoes").expect("match");
        assert_eq!(caps.name("qty").map(|m| m.as_str()), Some("2"));
        assert_eq!(caps.name("qty2").map(|m| m.as_str()), Some("8"));
        assert_eq!(caps.name("measure").map(|m| m.as_str()), Some("ounce"));
        assert_eq!(caps.name("container").map(|m| m.as_str()), Some("cans"));
    }

    #[test]
    fn measure_abbreviation_does_not_eat_word_heads() {
        // "g" is a gram abbreviation only when it stands alone.
        let caps = QUANTITY_UNIT.captures("2 garlic cloves").expect("match");
        assert!(caps.name("measure").is_none());
        let caps = QUANTITY_UNIT.captures("200 g sugar").expect("match");
        assert_eq!(caps.name("measure").map(|m| m.as_str()), Some("g"));
    }

    #[test]
    fn container_without_measure() {
        let caps = QUANTITY_UNIT.captures("1 can beans").expect("match");
        assert!(caps.name("measure").is_none());
        assert_eq!(caps.name("container").map(|m| m.as_str()), Some("can"));
    }

    #[test]
    fn numeric_token_forms() {
        assert!(NUMERIC_TOKEN.is_match("2"));
        assert!(NUMERIC_TOKEN.is_match("1.5"));
        assert!(NUMERIC_TOKEN.is_match("1/2"));
        assert!(NUMERIC_TOKEN.is_match("2-3"));
        assert!(!NUMERIC_TOKEN.is_match("2cups"));
    }
}

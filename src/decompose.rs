//! Quantity/unit/item decomposition of a raw ingredient line.
//!
//! A cascading grammar: fraction and range rewriting first, then conjunction
//! splitting ("or"/"and"/"with"/"instead of"), then a leading quantity+unit
//! capture per span, with whatever remains becoming the item name. Rule
//! priority is fixed — the first matching rule of each stage wins — so
//! ambiguous lines never raise, and a line with no recognizable quantity
//! yields the sentinel [`Quantity::Unit`] ("one, unspecified").

use serde::{Deserialize, Serialize};

use crate::patterns::{
    LEADING_RANGE, MIXED_FRACTION, QUANTITY_UNIT, RANGE_JOIN, SIMPLE_FRACTION, UNIT_ONLY,
};
use crate::text::normalize_line;

/// Relation label attached to an alternative/combination clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// "milk or cream"
    Or,
    /// "salt and pepper"
    And,
    /// "served with rice"
    With,
    /// "honey instead of sugar"
    InsteadOf,
}

/// Rough classification of the captured measurement word. Metadata only —
/// it never changes how the line is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureKind {
    /// Volume units (cups, teaspoons, liters, ...).
    Liquid,
    /// Weight units (ounces, pounds, grams, ...).
    Dry,
    /// Length units (inches, centimeters, ...).
    Length,
    /// No measurement word, or a bare container/count.
    #[default]
    Unit,
}

/// A parsed quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Sentinel: "one, unspecified" — no numeric quantity was found.
    Unit,
    /// A single decimal value (fractions already converted, 2-place rounded).
    Exact(f64),
    /// A numeric range; both endpoints preserved.
    Range {
        /// Lower endpoint.
        low: f64,
        /// Upper endpoint.
        high: f64,
    },
}

impl Quantity {
    /// Resolve to a single scalar: ranges resolve to the larger endpoint,
    /// the sentinel resolves to 1.
    #[must_use]
    pub fn scalar(&self) -> f64 {
        match *self {
            Self::Unit => 1.0,
            Self::Exact(v) => v,
            Self::Range { low, high } => low.max(high),
        }
    }
}

/// One span of an ingredient line after conjunction splitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measured {
    /// Parsed quantity for this span.
    pub quantity: Quantity,
    /// Captured unit text (measurement and/or container words), if any.
    pub unit: Option<String>,
    /// Measurement classification.
    pub kind: MeasureKind,
    /// Item name: the residual after quantity and unit removal.
    pub item: String,
}

/// An alternative clause introduced by a conjunction marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// The detected relation ("or", "and", "with", "instead of").
    pub relation: Relation,
    /// The independently parsed second span.
    pub measured: Measured,
}

/// A decomposed ingredient line. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// The line as given to the decomposer.
    pub original: String,
    /// Parsed quantity of the primary span.
    pub quantity: Quantity,
    /// Captured unit text of the primary span, if any.
    pub unit: Option<String>,
    /// Measurement classification of the primary span.
    pub kind: MeasureKind,
    /// Item name of the primary span.
    pub item: String,
    /// Alternative clause, when a conjunction marker split the line.
    pub alternative: Option<Alternative>,
}

/// Conjunction markers in rule-priority order. First hit wins.
const CONJUNCTIONS: &[(&str, Relation)] = &[
    (" or ", Relation::Or),
    (" and ", Relation::And),
    (" with ", Relation::With),
    (" instead of ", Relation::InsteadOf),
];

/// Decompose one raw ingredient line. Never fails for well-formed text.
#[must_use]
pub fn decompose(line: &str) -> Ingredient {
    let normalized = normalize_line(line);
    let rewritten = rewrite_numeric(&normalized);

    let (primary_text, alternative) = match split_conjunction(&rewritten) {
        Some((relation, before, after)) => {
            let measured = parse_span(after);
            (before.to_string(), Some(Alternative { relation, measured }))
        }
        None => (rewritten, None),
    };

    let primary = parse_span(&primary_text);
    Ingredient {
        original: line.to_string(),
        quantity: primary.quantity,
        unit: primary.unit,
        kind: primary.kind,
        item: primary.item,
        alternative,
    }
}

/// Apply the three numeric rewrite rules in order: mixed number, simple
/// fraction, numeric range. Later rules operate on already-substituted text,
/// so "1 1/2 - 2" becomes "1.5-2".
fn rewrite_numeric(line: &str) -> String {
    let mixed = MIXED_FRACTION.replace_all(line, |caps: &regex::Captures| {
        let whole: f64 = caps[1].parse().unwrap_or(0.0);
        let num: f64 = caps[2].parse().unwrap_or(0.0);
        let den: f64 = caps[3].parse().unwrap_or(1.0);
        if den == 0.0 {
            return caps[0].to_string();
        }
        format_decimal(whole + num / den)
    });
    let simple = SIMPLE_FRACTION.replace_all(&mixed, |caps: &regex::Captures| {
        let num: f64 = caps[1].parse().unwrap_or(0.0);
        let den: f64 = caps[2].parse().unwrap_or(1.0);
        if den == 0.0 {
            return caps[0].to_string();
        }
        format_decimal(num / den)
    });
    RANGE_JOIN.replace_all(&simple, "$1-$2").into_owned()
}

/// Round to two decimal places and render without trailing zeros.
fn format_decimal(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded}")
}

/// Find the first conjunction marker with non-empty text on both sides.
/// Numeric ranges were already canonicalized to "a-b", so a bare "2 or 3"
/// never reaches this stage.
fn split_conjunction(line: &str) -> Option<(Relation, &str, &str)> {
    for &(marker, relation) in CONJUNCTIONS {
        if let Some(idx) = line.find(marker) {
            let before = line[..idx].trim();
            let after = line[idx + marker.len()..].trim();
            if !before.is_empty() && !after.is_empty() {
                return Some((relation, before, after));
            }
        }
    }
    None
}

/// Parse one span: leading range, else leading quantity+unit, else the
/// sentinel quantity with the whole span as item.
fn parse_span(text: &str) -> Measured {
    let text = text.trim();

    if let Some(caps) = LEADING_RANGE.captures(text) {
        let low: f64 = caps[1].parse().unwrap_or(0.0);
        let high: f64 = caps[2].parse().unwrap_or(low);
        let rest = &text[caps[0].len()..];
        let (unit, kind, item) = capture_unit(rest);
        return Measured { quantity: Quantity::Range { low, high }, unit, kind, item };
    }

    if let Some(caps) = QUANTITY_UNIT.captures(text) {
        if let Some(qty_match) = caps.name("qty") {
            let qty: f64 = qty_match.as_str().parse().unwrap_or(0.0);
            let qty2 = caps.name("qty2").map(|m| m.as_str().to_string());
            let measure = caps.name("measure").map(|m| m.as_str().trim().to_string());
            let container = caps.name("container").map(|m| m.as_str().trim().to_string());

            // "2 8 ounce cans": the second number qualifies the container
            // size and stays part of the unit text, even when the unit word
            // itself is missing, so the residual item never starts with a
            // bare number.
            let (unit, consumed_end) = match (&qty2, &measure, &container) {
                (None, None, None) => {
                    let end = caps.name("qty").map_or(0, |m| m.end());
                    (None, end)
                }
                (q2, m, c) => {
                    let mut parts: Vec<&str> = Vec::new();
                    if let Some(q2) = q2 {
                        parts.push(q2.as_str());
                    }
                    if let Some(m) = m {
                        parts.push(m.as_str());
                    }
                    if let Some(c) = c {
                        parts.push(c.as_str());
                    }
                    (Some(parts.join(" ")), caps[0].len())
                }
            };

            let kind = measure.as_deref().map_or(MeasureKind::Unit, measure_kind);
            let item = strip_item(&text[consumed_end..]);
            return Measured { quantity: Quantity::Exact(qty), unit, kind, item };
        }
    }

    Measured {
        quantity: Quantity::Unit,
        unit: None,
        kind: MeasureKind::Unit,
        item: text.to_string(),
    }
}

/// Capture an optional unit at the head of a residual span (after a range
/// quantity was consumed).
fn capture_unit(text: &str) -> (Option<String>, MeasureKind, String) {
    if let Some(caps) = UNIT_ONLY.captures(text) {
        let measure = caps.name("measure").map(|m| m.as_str().trim().to_string());
        let container = caps.name("container").map(|m| m.as_str().trim().to_string());
        if measure.is_some() || container.is_some() {
            let kind = measure.as_deref().map_or(MeasureKind::Unit, measure_kind);
            let unit_text = [measure, container].into_iter().flatten().collect::<Vec<_>>().join(" ");
            let item = strip_item(&text[caps[0].len()..]);
            return (Some(unit_text), kind, item);
        }
    }
    (None, MeasureKind::Unit, strip_item(text))
}

/// Trim the residual item text: leading "of" and stray whitespace.
fn strip_item(text: &str) -> String {
    let trimmed = text.trim();
    trimmed.strip_prefix("of ").unwrap_or(trimmed).trim().to_string()
}

/// Classify a captured measurement word. Container-only captures never reach
/// this function; they classify as [`MeasureKind::Unit`] at the call site.
fn measure_kind(measure: &str) -> MeasureKind {
    let word = measure.trim_end_matches('.');
    let singular = if word.len() > 2 && word.ends_with('s') && !word.ends_with("ss") {
        &word[..word.len() - 1]
    } else {
        word
    };
    if singular.starts_with("fl") {
        return MeasureKind::Liquid;
    }
    match singular {
        "cup" | "teaspoon" | "tsp" | "tablespoon" | "tbsp" | "tbl" | "pint" | "pt" | "quart"
        | "qt" | "gallon" | "gal" | "milliliter" | "millilitre" | "ml" | "liter" | "litre"
        | "l" => MeasureKind::Liquid,
        "ounce" | "oz" | "pound" | "lb" | "milligram" | "mg" | "gram" | "g" | "kilogram"
        | "kg" => MeasureKind::Dry,
        "inch" | "inche" | "in" | "millimeter" | "millimetre" | "mm" | "centimeter"
        | "centimetre" | "cm" | "meter" | "metre" | "m" => MeasureKind::Length,
        _ => MeasureKind::Unit,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn mixed_fraction_resolves_to_decimal() {
        let ing = decompose("1 1/2 cups flour");
        assert_eq!(ing.quantity, Quantity::Exact(1.5));
        assert_eq!(ing.unit.as_deref(), Some("cups"));
        assert_eq!(ing.kind, MeasureKind::Liquid);
        assert_eq!(ing.item, "flour");
    }

    #[test]
    fn simple_fraction_rounds_to_two_places() {
        let ing = decompose("1/3 cup sugar");
        assert_eq!(ing.quantity, Quantity::Exact(0.33));
        assert_eq!(ing.item, "sugar");
    }

    #[test]
    fn range_preserves_both_endpoints() {
        let ing = decompose("2-3 tomatoes");
        assert_eq!(ing.quantity, Quantity::Range { low: 2.0, high: 3.0 });
        assert_eq!(ing.quantity.scalar(), 3.0);
        assert_eq!(ing.item, "tomatoes");
        assert!(ing.unit.is_none());
    }

    #[test]
    fn worded_range_is_not_a_conjunction() {
        let ing = decompose("2 or 3 tomatoes");
        assert_eq!(ing.quantity, Quantity::Range { low: 2.0, high: 3.0 });
        assert!(ing.alternative.is_none());
    }

    #[test]
    fn or_conjunction_parses_both_spans() {
        let ing = decompose("1 cup milk or 1 cup cream");
        assert_eq!(ing.quantity, Quantity::Exact(1.0));
        assert_eq!(ing.unit.as_deref(), Some("cup"));
        assert_eq!(ing.item, "milk");
        let alt = ing.alternative.as_ref().expect("alternative");
        assert_eq!(alt.relation, Relation::Or);
        assert_eq!(alt.measured.quantity, Quantity::Exact(1.0));
        assert_eq!(alt.measured.unit.as_deref(), Some("cup"));
        assert_eq!(alt.measured.item, "cream");
    }

    #[test]
    fn instead_of_conjunction() {
        let ing = decompose("1 cup honey instead of sugar");
        let alt = ing.alternative.expect("alternative");
        assert_eq!(alt.relation, Relation::InsteadOf);
        assert_eq!(alt.measured.quantity, Quantity::Unit);
        assert_eq!(alt.measured.item, "sugar");
    }

    #[test]
    fn no_quantity_yields_unit_sentinel() {
        let ing = decompose("salt to taste");
        assert_eq!(ing.quantity, Quantity::Unit);
        assert!(ing.unit.is_none());
        assert_eq!(ing.item, "salt to taste");
        assert_eq!(ing.quantity.scalar(), 1.0);
    }

    #[test]
    fn double_number_container_idiom() {
        let ing = decompose("2 8 ounce cans crushed tomatoes");
        assert_eq!(ing.quantity, Quantity::Exact(2.0));
        assert_eq!(ing.unit.as_deref(), Some("8 ounce cans"));
        assert_eq!(ing.kind, MeasureKind::Dry);
        assert_eq!(ing.item, "crushed tomatoes");
    }

    #[test]
    fn second_number_without_unit_word_stays_out_of_the_item() {
        let ing = decompose("2 8 tomatoes");
        assert_eq!(ing.quantity, Quantity::Exact(2.0));
        assert_eq!(ing.unit.as_deref(), Some("8"));
        assert_eq!(ing.item, "tomatoes");

        // The residual must not reparse a quantity.
        let again = decompose(&ing.item);
        assert_eq!(again.quantity, Quantity::Unit);
        assert_eq!(again.item, "tomatoes");
    }

    #[test]
    fn container_without_measure_is_unit_kind() {
        let ing = decompose("1 can black beans");
        assert_eq!(ing.unit.as_deref(), Some("can"));
        assert_eq!(ing.kind, MeasureKind::Unit);
        assert_eq!(ing.item, "black beans");
    }

    #[test]
    fn of_is_stripped_from_item() {
        let ing = decompose("2 cups of flour");
        assert_eq!(ing.item, "flour");
    }

    #[test]
    fn measure_kind_classification() {
        assert_eq!(decompose("2 cups water").kind, MeasureKind::Liquid);
        assert_eq!(decompose("2 pounds beef").kind, MeasureKind::Dry);
        assert_eq!(decompose("2 inches ginger").kind, MeasureKind::Length);
        assert_eq!(decompose("2 eggs").kind, MeasureKind::Unit);
    }

    #[test]
    fn decomposition_is_idempotent_on_residual() {
        let first = decompose("1 1/2 cups flour");
        let again = decompose(&first.item);
        assert_eq!(again.quantity, Quantity::Unit);
        assert!(again.unit.is_none());
        assert_eq!(again.item, first.item);
    }

    #[test]
    fn range_with_unit() {
        let ing = decompose("2-3 cups broth");
        assert_eq!(ing.quantity, Quantity::Range { low: 2.0, high: 3.0 });
        assert_eq!(ing.unit.as_deref(), Some("cups"));
        assert_eq!(ing.kind, MeasureKind::Liquid);
        assert_eq!(ing.item, "broth");
    }
}

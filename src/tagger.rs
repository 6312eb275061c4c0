//! Part-of-speech tagging adapter.
//!
//! The pipeline treats tagging as an opaque classification oracle behind the
//! [`Tagger`] trait: given a token sequence, return a parallel sequence of
//! grammatical tags drawn from a fixed closed vocabulary. [`RuleTagger`] is a
//! small built-in implementation good enough for ingredient lines, so the
//! crate works standalone; callers with a real tagger plug it in at the same
//! seam.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::patterns::NUMERIC_TOKEN;

/// Closed grammatical tag vocabulary (Penn-style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PosTag {
    /// Coordinating conjunction ("and", "or").
    Cc,
    /// Cardinal number.
    Cd,
    /// Determiner.
    Dt,
    /// Preposition or subordinating conjunction.
    In,
    /// Adjective.
    Jj,
    /// List item marker.
    Ls,
    /// Modal.
    Md,
    /// Noun, singular.
    Nn,
    /// Noun, plural.
    Nns,
    /// Proper noun, singular.
    Nnp,
    /// Proper noun, plural.
    Nnps,
    /// Predeterminer.
    Pdt,
    /// Adverb.
    Rb,
    /// "to".
    To,
    /// Verb, base form.
    Vb,
    /// Verb, past tense.
    Vbd,
    /// Verb, gerund.
    Vbg,
    /// Verb, past participle.
    Vbn,
}

impl PosTag {
    /// Upper-case tag label as used in the persisted pattern tables.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cc => "CC",
            Self::Cd => "CD",
            Self::Dt => "DT",
            Self::In => "IN",
            Self::Jj => "JJ",
            Self::Ls => "LS",
            Self::Md => "MD",
            Self::Nn => "NN",
            Self::Nns => "NNS",
            Self::Nnp => "NNP",
            Self::Nnps => "NNPS",
            Self::Pdt => "PDT",
            Self::Rb => "RB",
            Self::To => "TO",
            Self::Vb => "VB",
            Self::Vbd => "VBD",
            Self::Vbg => "VBG",
            Self::Vbn => "VBN",
        }
    }

    /// Parse a persisted tag label. Unknown labels return `None` so legacy
    /// rows with stray values are skipped instead of aborting a load.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "CC" => Some(Self::Cc),
            "CD" => Some(Self::Cd),
            "DT" => Some(Self::Dt),
            "IN" => Some(Self::In),
            "JJ" => Some(Self::Jj),
            "LS" => Some(Self::Ls),
            "MD" => Some(Self::Md),
            "NN" => Some(Self::Nn),
            "NNS" => Some(Self::Nns),
            "NNP" => Some(Self::Nnp),
            "NNPS" => Some(Self::Nnps),
            "PDT" => Some(Self::Pdt),
            "RB" => Some(Self::Rb),
            "TO" => Some(Self::To),
            "VB" => Some(Self::Vb),
            "VBD" => Some(Self::Vbd),
            "VBG" => Some(Self::Vbg),
            "VBN" => Some(Self::Vbn),
            _ => None,
        }
    }

    /// Whether the tag marks a noun usable as a food-word candidate.
    #[must_use]
    pub fn is_noun(self) -> bool {
        matches!(self, Self::Nn | Self::Nns)
    }
}

/// A token paired with its grammatical tag. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// The token text as given to the tagger.
    pub text: String,
    /// The assigned grammatical tag.
    pub tag: PosTag,
}

/// Part-of-speech classification oracle.
///
/// Implementations must return exactly one tag per input token, in order.
/// The pipeline catches tagging errors per line and skips the line.
pub trait Tagger {
    /// Tag a token sequence.
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>>;

    /// Convenience: tag and keep only the tag sequence (the line "shape").
    fn tag_sequence(&self, tokens: &[String]) -> Result<Vec<PosTag>> {
        let tagged = self.tag(tokens)?;
        if tagged.len() != tokens.len() {
            return Err(Error::TaggingError(format!(
                "tagger returned {} tags for {} tokens",
                tagged.len(),
                tokens.len()
            )));
        }
        Ok(tagged.into_iter().map(|t| t.tag).collect())
    }
}

static CONJUNCTIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["and", "or", "but", "nor", "plus"].into_iter().collect());

static PREPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["of", "in", "on", "with", "for", "from", "at", "by", "into", "over", "without", "about"]
        .into_iter()
        .collect()
});

static DETERMINERS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["a", "an", "the", "this", "that", "each", "some"].into_iter().collect());

static ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "fresh", "large", "small", "medium", "hot", "cold", "dry", "ripe", "raw", "whole",
        "fine", "coarse", "lean", "light", "dark", "sweet", "sour", "soft", "firm",
    ]
    .into_iter()
    .collect()
});

/// Rule-based tagger tuned for ingredient lines.
///
/// Numbers become cardinals, a handful of closed-class word lists cover
/// conjunctions, prepositions and determiners, derivational suffixes cover
/// verb forms and adverbs, and everything else is a noun (plural when it
/// ends in "s"). Crude by NLP standards, but ingredient lines are mostly
/// "CD NN NN" shapes where this is exactly right.
#[derive(Debug, Default, Clone)]
pub struct RuleTagger;

impl RuleTagger {
    /// Create a new rule tagger.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn tag_one(token: &str) -> PosTag {
        let lower = token.to_lowercase();
        if NUMERIC_TOKEN.is_match(&lower) {
            return PosTag::Cd;
        }
        if lower == "to" {
            return PosTag::To;
        }
        if CONJUNCTIONS.contains(lower.as_str()) {
            return PosTag::Cc;
        }
        if PREPOSITIONS.contains(lower.as_str()) {
            return PosTag::In;
        }
        if DETERMINERS.contains(lower.as_str()) {
            return PosTag::Dt;
        }
        if ADJECTIVES.contains(lower.as_str()) {
            return PosTag::Jj;
        }
        if lower.len() > 4 && lower.ends_with("ly") {
            return PosTag::Rb;
        }
        if lower.len() > 4 && lower.ends_with("ing") {
            return PosTag::Vbg;
        }
        if lower.len() > 4 && lower.ends_with("ed") {
            return PosTag::Vbd;
        }
        if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
            return PosTag::Nns;
        }
        PosTag::Nn
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>> {
        Ok(tokens
            .iter()
            .map(|t| TaggedToken { text: t.clone(), tag: Self::tag_one(t) })
            .collect())
    }
}

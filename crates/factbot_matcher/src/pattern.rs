//! Query pattern representation.
//!
//! A pattern is a fixed sequence of literal words and wildcard markers,
//! parsed once at table-construction time and immutable afterwards.

use crate::matcher::{self, Captures};

/// Wildcard marker for a single token in pattern sources.
pub const SINGLE_MARKER: &str = "_";

/// Wildcard marker for zero or more tokens in pattern sources.
pub const MULTI_MARKER: &str = "%";

/// One element of a query pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternElement {
    /// A literal word that must appear verbatim.
    Literal(String),
    /// `_` - matches exactly one input token, captured individually.
    Single,
    /// `%` - matches zero or more input tokens, captured as one
    /// space-joined group.
    Multi,
}

impl PatternElement {
    /// Returns true if this element is a wildcard.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Single | Self::Multi)
    }
}

/// An immutable sequence of pattern elements.
///
/// Wildcards may appear in any position, adjacent to each other or at the
/// pattern's edges. The empty pattern matches only the empty input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    elements: Vec<PatternElement>,
}

impl Pattern {
    /// Creates a pattern from elements.
    #[must_use]
    pub fn new(elements: Vec<PatternElement>) -> Self {
        Self { elements }
    }

    /// Parses a pattern source string.
    ///
    /// The source is split on whitespace; `_` becomes a [`PatternElement::Single`]
    /// wildcard, `%` becomes a [`PatternElement::Multi`] wildcard, and every
    /// other word is a literal.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let elements = source
            .split_whitespace()
            .map(|word| match word {
                SINGLE_MARKER => PatternElement::Single,
                MULTI_MARKER => PatternElement::Multi,
                literal => PatternElement::Literal(literal.to_string()),
            })
            .collect();

        Self { elements }
    }

    /// Returns the pattern's elements.
    #[must_use]
    pub fn elements(&self) -> &[PatternElement] {
        &self.elements
    }

    /// Returns the number of wildcards in this pattern.
    ///
    /// A successful match produces exactly this many captures.
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_wildcard()).count()
    }

    /// Matches this pattern against an input token sequence.
    ///
    /// Returns the captures (one entry per wildcard, in pattern order) on
    /// success, or `None` when the pattern does not describe the input.
    /// See [`matcher`] for the backtracking semantics.
    #[must_use]
    pub fn matches(&self, input: &[String]) -> Option<Captures> {
        matcher::match_elements(&self.elements, input)
    }
}

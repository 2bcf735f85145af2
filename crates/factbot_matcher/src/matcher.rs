//! The backtracking match algorithm.
//!
//! Matching proceeds left to right over the pattern. Literals and `Single`
//! wildcards each consume exactly one token. A `Multi` wildcard tries every
//! possible split of the remaining input between itself and the rest of the
//! pattern, shortest consumption first, succeeding on the first split for
//! which the remainder matches. The search is an explicit recursion over
//! "how many tokens does this `Multi` consume", so the worst case
//! (exponential in the number of adjacent `Multi` wildcards) is visible in
//! the structure rather than hidden in the control flow.
//!
//! Tie-break, documented and pinned by tests: the leftmost wildcard takes
//! the fewest tokens. `% %` against `a b` captures `["", "a b"]`.

use crate::pattern::PatternElement;

/// Captures from a successful match: one entry per wildcard, in
/// left-to-right pattern order.
///
/// A `Single` wildcard contributes the one token it consumed; a `Multi`
/// wildcard contributes the space-joined run of zero or more tokens it
/// consumed (the empty string when it consumed none).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Captures {
    values: Vec<String>,
}

impl Captures {
    /// Creates a capture set from values.
    #[must_use]
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Returns the number of captures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no wildcards captured anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the capture at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Returns the captures as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.values
    }
}

/// Matches pattern elements against an input token sequence.
///
/// Returns the ordered [`Captures`] on success, or `None` when no split of
/// the input satisfies the pattern. `None` is a normal negative outcome,
/// not an error.
#[must_use]
pub fn match_elements(pattern: &[PatternElement], input: &[String]) -> Option<Captures> {
    let mut captures = Vec::new();
    if match_remaining(pattern, input, &mut captures) {
        Some(Captures::new(captures))
    } else {
        None
    }
}

/// Matches the remaining pattern against the remaining input, appending
/// captures as wildcards consume tokens. On failure the captures stack is
/// unwound to its state at entry.
fn match_remaining(
    pattern: &[PatternElement],
    input: &[String],
    captures: &mut Vec<String>,
) -> bool {
    let Some((element, rest)) = pattern.split_first() else {
        // Empty pattern matches only the empty input.
        return input.is_empty();
    };

    match element {
        PatternElement::Literal(word) => match input.split_first() {
            Some((token, remaining)) if token == word => {
                match_remaining(rest, remaining, captures)
            }
            _ => false,
        },
        PatternElement::Single => match input.split_first() {
            Some((token, remaining)) => {
                captures.push(token.clone());
                if match_remaining(rest, remaining, captures) {
                    true
                } else {
                    captures.pop();
                    false
                }
            }
            None => false,
        },
        PatternElement::Multi => {
            // Try consumption lengths in increasing order; the first split
            // for which the rest of the pattern matches wins.
            for taken in 0..=input.len() {
                captures.push(input[..taken].join(" "));
                if match_remaining(rest, &input[taken..], captures) {
                    return true;
                }
                captures.pop();
            }
            false
        }
    }
}

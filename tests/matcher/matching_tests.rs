//! Backtracking match tests.
//!
//! Exercises the matcher's contract end to end: literal equality, both
//! wildcard kinds, backtracking across splits, and the documented
//! tie-break (leftmost wildcard takes the fewest tokens).

use factbot_matcher::{Pattern, tokenize};

// =============================================================================
// Literal Matching
// =============================================================================

#[test]
fn wildcard_free_pattern_requires_exact_input() {
    let pattern = Pattern::parse("what is the answer");

    assert!(pattern.matches(&tokenize("what is the answer")).is_some());
    assert!(pattern.matches(&tokenize("what is the question")).is_none());
    assert!(pattern.matches(&tokenize("what is the")).is_none());
    assert!(pattern.matches(&tokenize("what is the answer then")).is_none());
}

#[test]
fn wildcard_free_match_has_empty_captures() {
    let pattern = Pattern::parse("bye");
    let captures = pattern.matches(&tokenize("bye")).unwrap();
    assert_eq!(captures.len(), 0);
}

// =============================================================================
// Wildcard Captures
// =============================================================================

#[test]
fn lone_multi_captures_the_whole_input() {
    let pattern = Pattern::parse("%");

    let captures = pattern.matches(&tokenize("ada lovelace of london")).unwrap();
    assert_eq!(captures.as_slice(), ["ada lovelace of london"]);

    let captures = pattern.matches(&[]).unwrap();
    assert_eq!(captures.as_slice(), [""]);
}

#[test]
fn interior_multi_capture() {
    let pattern = Pattern::parse("when was % born");
    let captures = pattern
        .matches(&tokenize("when was ada lovelace born"))
        .unwrap();
    assert_eq!(captures.as_slice(), ["ada lovelace"]);
}

#[test]
fn single_and_multi_captures_in_pattern_order() {
    let pattern = Pattern::parse("what is the length of runway _ at %");
    let captures = pattern
        .matches(&tokenize("what is the length of runway 4l at heathrow"))
        .unwrap();
    assert_eq!(captures.as_slice(), ["4l", "heathrow"]);
}

#[test]
fn adjacent_multis_use_documented_tie_break() {
    // Ambiguous split; the leftmost wildcard takes the fewest tokens.
    let pattern = Pattern::parse("% %");
    let captures = pattern.matches(&tokenize("a b")).unwrap();
    assert_eq!(captures.as_slice(), ["", "a b"]);
}

#[test]
fn multi_before_single_leaves_one_token() {
    // The multi must stop short so the trailing single can consume.
    let pattern = Pattern::parse("% _");
    let captures = pattern.matches(&tokenize("a b c")).unwrap();
    assert_eq!(captures.as_slice(), ["a b", "c"]);
}

#[test]
fn capture_count_matches_wildcard_count() {
    for (source, input) in [
        ("%", "anything at all"),
        ("% %", "a b c d"),
        ("when was % born", "when was x born"),
        ("what is the length of runway _ at %", "what is the length of runway 4l at lhr"),
        ("_ % _", "one two three four"),
    ] {
        let pattern = Pattern::parse(source);
        let captures = pattern.matches(&tokenize(input)).unwrap();
        assert_eq!(
            captures.len(),
            pattern.wildcard_count(),
            "pattern {source:?} against {input:?}"
        );
    }
}

// =============================================================================
// Backtracking
// =============================================================================

#[test]
fn multi_retries_longer_splits() {
    let pattern = Pattern::parse("find % in %");
    let captures = pattern
        .matches(&tokenize("find a needle in in a haystack"))
        .unwrap();
    // Shortest-first: the first `%` stops at the first viable "in".
    assert_eq!(captures.as_slice(), ["a needle", "in a haystack"]);
}

#[test]
fn no_viable_split_reports_no_match() {
    let pattern = Pattern::parse("% born %");
    assert!(pattern.matches(&tokenize("nothing to see here")).is_none());
}

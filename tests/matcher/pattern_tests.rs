//! Pattern parsing tests.

use factbot_matcher::{Pattern, PatternElement};

#[test]
fn parse_marks_wildcards() {
    let pattern = Pattern::parse("when was % born");
    assert_eq!(
        pattern.elements(),
        &[
            PatternElement::Literal("when".to_string()),
            PatternElement::Literal("was".to_string()),
            PatternElement::Multi,
            PatternElement::Literal("born".to_string()),
        ]
    );
}

#[test]
fn parse_single_marker() {
    let pattern = Pattern::parse("runway _ length");
    assert_eq!(pattern.elements()[1], PatternElement::Single);
    assert_eq!(pattern.wildcard_count(), 1);
}

#[test]
fn markers_embedded_in_words_stay_literal() {
    // Only standalone `_` / `%` tokens are wildcards.
    let pattern = Pattern::parse("50% of_the time");
    assert_eq!(
        pattern.elements(),
        &[
            PatternElement::Literal("50%".to_string()),
            PatternElement::Literal("of_the".to_string()),
            PatternElement::Literal("time".to_string()),
        ]
    );
    assert_eq!(pattern.wildcard_count(), 0);
}

#[test]
fn patterns_compare_by_structure() {
    assert_eq!(Pattern::parse("a % b"), Pattern::parse("a  %  b"));
    assert_ne!(Pattern::parse("a % b"), Pattern::parse("a _ b"));
}

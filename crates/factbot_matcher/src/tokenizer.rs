//! Utterance tokenization.
//!
//! Converts a raw query line into the token sequence the matcher operates
//! on. Normalization happens here, once, on the caller side of the match:
//! the matcher itself compares tokens case-sensitively.

/// Tokenizes a raw utterance.
///
/// - Strips one trailing query mark (`?`)
/// - Lowercases every token
/// - Splits on whitespace
///
/// Interior question marks are ordinary characters and stay inside their
/// tokens. Wildcard markers (`_`, `%`) appearing in the input are ordinary
/// tokens; they are only special in pattern sources.
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_suffix('?').unwrap_or(trimmed);

    trimmed
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

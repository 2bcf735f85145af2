//! Tokenization and wildcard pattern matching for factbot.
//!
//! This crate transforms a user utterance like `"When was Ada Lovelace born?"`
//! into tokens and matches them against query patterns:
//!
//! ```text
//! "When was Ada Lovelace born?"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["when", "was", "ada", "lovelace", "born"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PATTERN         │  → "when was % born" matches,
//! │ MATCHING        │    capturing ["ada lovelace"]
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to a token sequence
//! - [`pattern`] - Pattern representation and parsing (`_` and `%` wildcards)
//! - [`matcher`] - Backtracking match algorithm and capture collection

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod matcher;
pub mod pattern;
pub mod tokenizer;

pub use matcher::Captures;
pub use pattern::{Pattern, PatternElement};
pub use tokenizer::tokenize;

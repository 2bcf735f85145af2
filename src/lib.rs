//! Factbot - Wikipedia fact-query chatbot
//!
//! This crate re-exports all layers of the factbot system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: factbot_runtime    — REPL, CLI entry point, standard query table
//! Layer 2: factbot_wiki       — article lookup: search, fetch, infobox, fields
//!          factbot_dispatch   — pattern table, actions, dispatch loop
//! Layer 1: factbot_matcher    — tokenization, patterns, backtracking matcher
//! Layer 0: factbot_foundation — error kinds, field specs, lookup trait
//! ```

pub use factbot_dispatch as dispatch;
pub use factbot_foundation as foundation;
pub use factbot_matcher as matcher;
pub use factbot_runtime as runtime;
pub use factbot_wiki as wiki;

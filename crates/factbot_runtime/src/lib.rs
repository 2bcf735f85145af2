//! REPL and CLI for factbot.
//!
//! This crate provides:
//! - [`Repl`] - Interactive query loop
//! - [`LineEditor`] - Line editing abstraction (rustyline by default)
//! - [`standard_table`] - The declarative standard query vocabulary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod queries;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use queries::standard_table;
pub use repl::Repl;

//! Pattern-action dispatch for factbot.
//!
//! This crate owns the ordered table of (pattern, action) pairs and the
//! loop that resolves a token sequence against it:
//!
//! ```text
//! ["when", "was", "ada", "lovelace", "born"]
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PATTERN TABLE   │  → first entry whose pattern matches wins
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ACTION          │  → field lookup, unit suffix, answer list
//! └─────────────────┘
//!          │
//!          ▼
//! Response::Answers(["1815-12-10"])
//! ```
//!
//! # Modules
//!
//! - [`action`] - The [`Action`] trait and the query-kind adapters
//! - [`table`] - Ordered, immutable pattern table
//! - [`dispatch`] - The dispatch loop and its sentinel policy

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod dispatch;
pub mod table;

pub use action::{Action, EndSession, FieldQuery, Outcome, RunwayLengthQuery};
pub use dispatch::{DONT_UNDERSTAND, NO_ANSWERS, Response, dispatch};
pub use table::{PatternTable, TableEntry};

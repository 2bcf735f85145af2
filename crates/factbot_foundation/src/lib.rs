//! Core types for the factbot system.
//!
//! This crate provides:
//! - [`Error`] - Error types shared by every layer
//! - [`FieldSpec`] - Which scalar property a query extracts from an article
//! - [`FieldLookup`] - The seam between the dispatch layer and the article source

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod lookup;

pub use error::{Error, ErrorKind, Result};
pub use lookup::{FieldLookup, FieldSpec};

//! Error types for the factbot system.
//!
//! Uses `thiserror` for ergonomic error definition. The two lookup failure
//! kinds ([`ErrorKind::TopicNotFound`] and [`ErrorKind::FieldNotFound`])
//! pass through the dispatch layer uncaught; the interactive caller
//! reports them per-query and continues the session.

use thiserror::Error;

/// The main error type for factbot operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a topic-not-found error.
    #[must_use]
    pub fn topic_not_found(topic: impl Into<String>) -> Self {
        Self::new(ErrorKind::TopicNotFound(topic.into()))
    }

    /// Creates a field-not-found error.
    #[must_use]
    pub fn field_not_found(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::FieldNotFound(detail.into()))
    }

    /// Creates an HTTP transport error.
    #[must_use]
    pub fn http(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Http(detail.into()))
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch { expected, actual })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(detail.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No article resolves for the requested topic.
    #[error("no article found for topic: {0}")]
    TopicNotFound(String),

    /// The article exists but has no extractable value for the field.
    #[error("{0}")]
    FieldNotFound(String),

    /// Transport or decoding failure while talking to the article source.
    #[error("http request failed: {0}")]
    Http(String),

    /// An action received a capture set whose shape contradicts its pattern.
    #[error("arity mismatch: expected {expected} captures, got {actual}")]
    ArityMismatch {
        /// Number of captures the action's bound pattern produces.
        expected: usize,
        /// Number of captures actually received.
        actual: usize,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias using the factbot [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

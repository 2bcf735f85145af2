//! Query actions.
//!
//! An action maps the captures of a matched pattern to an answer list or a
//! session-termination signal. Each adapter is typed over the fixed capture
//! arity its bound pattern implies and checks it explicitly; a mismatch is
//! a table-construction bug, not user error.
//!
//! Lookup failures are not caught here. They propagate out of
//! [`dispatch`](crate::dispatch::dispatch) to the interactive caller, which
//! reports them per-query and continues the session.

use std::sync::Arc;

use factbot_foundation::{Error, FieldLookup, FieldSpec, Result};
use factbot_matcher::Captures;

/// What an action produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// An ordered list of answer strings (possibly empty).
    Answers(Vec<String>),
    /// The session should end. A tagged variant rather than an out-of-band
    /// signal, so callers handle it with ordinary control flow.
    Terminate,
}

/// A capability invoked with the captures of its matched pattern.
pub trait Action {
    /// Runs the action.
    ///
    /// # Errors
    ///
    /// Returns lookup failures (`TopicNotFound`, `FieldNotFound`, `Http`)
    /// unhandled, and `ArityMismatch` when the capture set's shape
    /// contradicts the bound pattern.
    fn invoke(&self, captures: &Captures) -> Result<Outcome>;
}

/// Checks that a capture set has the arity the action's pattern implies.
fn require_arity(captures: &Captures, expected: usize) -> Result<&[String]> {
    if captures.len() == expected {
        Ok(captures.as_slice())
    } else {
        Err(Error::arity_mismatch(expected, captures.len()))
    }
}

/// Looks up one scalar field of the topic captured by the pattern's `%`.
///
/// Expects exactly one capture: the topic. Optionally appends a unit
/// suffix to the raw lookup value.
pub struct FieldQuery {
    lookup: Arc<dyn FieldLookup>,
    field: FieldSpec,
    suffix: Option<&'static str>,
}

impl FieldQuery {
    /// Creates a field query action.
    #[must_use]
    pub fn new(lookup: Arc<dyn FieldLookup>, field: FieldSpec) -> Self {
        Self {
            lookup,
            field,
            suffix: None,
        }
    }

    /// Appends a unit suffix (e.g. `" ft"`) to the raw lookup value.
    #[must_use]
    pub const fn with_suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = Some(suffix);
        self
    }
}

impl Action for FieldQuery {
    fn invoke(&self, captures: &Captures) -> Result<Outcome> {
        let slots = require_arity(captures, 1)?;
        let topic = &slots[0];

        let value = self.lookup.lookup_field(topic, &self.field)?;
        let answer = match self.suffix {
            Some(suffix) => format!("{value}{suffix}"),
            None => value,
        };

        Ok(Outcome::Answers(vec![answer]))
    }
}

/// Looks up the length of one named runway at an airport.
///
/// Expects exactly two captures: the runway designation (`_`) and the
/// airport topic (`%`). The designation becomes part of the field spec;
/// the answer carries a `" ft"` suffix.
pub struct RunwayLengthQuery {
    lookup: Arc<dyn FieldLookup>,
}

impl RunwayLengthQuery {
    /// Creates a runway length query action.
    #[must_use]
    pub fn new(lookup: Arc<dyn FieldLookup>) -> Self {
        Self { lookup }
    }
}

impl Action for RunwayLengthQuery {
    fn invoke(&self, captures: &Captures) -> Result<Outcome> {
        let slots = require_arity(captures, 2)?;
        let field = FieldSpec::RunwayLength {
            designation: slots[0].clone(),
        };

        let value = self.lookup.lookup_field(&slots[1], &field)?;

        Ok(Outcome::Answers(vec![format!("{value} ft")]))
    }
}

/// Ends the session. Ignores its captures.
pub struct EndSession;

impl Action for EndSession {
    fn invoke(&self, _captures: &Captures) -> Result<Outcome> {
        Ok(Outcome::Terminate)
    }
}

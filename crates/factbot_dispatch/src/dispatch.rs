//! The dispatch loop.
//!
//! Resolves a token sequence against the pattern table: the first entry
//! whose pattern matches is invoked with its captures, and the action's
//! outcome is normalized into the final response. Two user-visible
//! sentinels ([`NO_ANSWERS`], [`DONT_UNDERSTAND`]) are ordinary answer
//! lists, never errors; only lookup failures leave this layer as `Err`.

use factbot_foundation::Result;

use crate::action::Outcome;
use crate::table::PatternTable;

/// Sentinel answer when a pattern matched but its action produced nothing.
pub const NO_ANSWERS: &str = "No answers";

/// Sentinel answer when no pattern in the table matches the input.
pub const DONT_UNDERSTAND: &str = "I don't understand";

/// The dispatcher's normalized result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// An ordered, non-empty list of answer lines to print.
    Answers(Vec<String>),
    /// The designated termination action fired; the caller should end the
    /// session gracefully.
    Terminate,
}

/// Dispatches a token sequence against the table.
///
/// Table order is match priority: entries are tried in declared order and
/// only the first matching entry's action runs. Mapping of outcomes:
///
/// - non-empty answer list → returned verbatim
/// - empty answer list → `[`[`NO_ANSWERS`]`]`
/// - termination → [`Response::Terminate`]
/// - no pattern matches → `[`[`DONT_UNDERSTAND`]`]`
///
/// # Errors
///
/// Lookup failures raised by the matched action propagate unhandled; the
/// per-query recovery decision belongs to the interactive caller.
pub fn dispatch(table: &PatternTable, input: &[String]) -> Result<Response> {
    for entry in table.entries() {
        let Some(captures) = entry.pattern().matches(input) else {
            continue;
        };

        return match entry.action().invoke(&captures)? {
            Outcome::Terminate => Ok(Response::Terminate),
            Outcome::Answers(answers) if answers.is_empty() => {
                Ok(Response::Answers(vec![NO_ANSWERS.to_string()]))
            }
            Outcome::Answers(answers) => Ok(Response::Answers(answers)),
        };
    }

    Ok(Response::Answers(vec![DONT_UNDERSTAND.to_string()]))
}

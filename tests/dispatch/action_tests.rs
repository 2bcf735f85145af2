//! Action adapter tests over a canned field lookup.

use std::cell::RefCell;
use std::sync::Arc;

use factbot_dispatch::{Action, EndSession, FieldQuery, Outcome, RunwayLengthQuery};
use factbot_foundation::{Error, ErrorKind, FieldLookup, FieldSpec, Result};
use factbot_matcher::Captures;

/// Lookup that records every call and answers from a fixed value.
struct RecordingLookup {
    value: &'static str,
    calls: RefCell<Vec<(String, FieldSpec)>>,
}

impl RecordingLookup {
    fn new(value: &'static str) -> Self {
        Self {
            value,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FieldLookup for RecordingLookup {
    fn lookup_field(&self, topic: &str, field: &FieldSpec) -> Result<String> {
        self.calls.borrow_mut().push((topic.to_string(), field.clone()));
        Ok(self.value.to_string())
    }
}

fn captures(values: &[&str]) -> Captures {
    Captures::new(values.iter().map(ToString::to_string).collect())
}

#[test]
fn field_query_passes_topic_and_field_through() {
    let lookup = Arc::new(RecordingLookup::new("6,356.8"));
    let action = FieldQuery::new(lookup.clone(), FieldSpec::PolarRadius);

    let outcome = action.invoke(&captures(&["venus"])).unwrap();
    assert_eq!(outcome, Outcome::Answers(vec!["6,356.8".to_string()]));
    assert_eq!(
        lookup.calls.borrow().as_slice(),
        [("venus".to_string(), FieldSpec::PolarRadius)]
    );
}

#[test]
fn field_query_suffix_applies_after_lookup() {
    let lookup = Arc::new(RecordingLookup::new("668"));
    let action = FieldQuery::new(lookup, FieldSpec::Elevation).with_suffix(" ft");

    let outcome = action.invoke(&captures(&["o'hare international airport"])).unwrap();
    assert_eq!(outcome, Outcome::Answers(vec!["668 ft".to_string()]));
}

#[test]
fn runway_query_splits_designation_and_topic() {
    let lookup = Arc::new(RecordingLookup::new("12,799"));
    let action = RunwayLengthQuery::new(lookup.clone());

    let outcome = action.invoke(&captures(&["4l", "heathrow"])).unwrap();
    assert_eq!(outcome, Outcome::Answers(vec!["12,799 ft".to_string()]));
    assert_eq!(
        lookup.calls.borrow().as_slice(),
        [(
            "heathrow".to_string(),
            FieldSpec::RunwayLength {
                designation: "4l".to_string()
            }
        )]
    );
}

#[test]
fn adapters_enforce_capture_arity() {
    let lookup = Arc::new(RecordingLookup::new("x"));

    let field = FieldQuery::new(lookup.clone(), FieldSpec::BirthDate);
    let err = field.invoke(&captures(&[])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ArityMismatch { expected: 1, actual: 0 }));

    let runway = RunwayLengthQuery::new(lookup.clone());
    let err = runway.invoke(&captures(&["4l"])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ArityMismatch { expected: 2, actual: 1 }));

    // Arity failures never reach the lookup.
    assert!(lookup.calls.borrow().is_empty());
}

#[test]
fn field_not_found_propagates_with_its_message() {
    struct Missing;

    impl FieldLookup for Missing {
        fn lookup_field(&self, _topic: &str, _field: &FieldSpec) -> Result<String> {
            Err(Error::field_not_found(
                "article infobox has no polar radius information",
            ))
        }
    }

    let action = FieldQuery::new(Arc::new(Missing), FieldSpec::PolarRadius);
    let err = action.invoke(&captures(&["pluto"])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::FieldNotFound(_)));
    assert!(format!("{err}").contains("polar radius"));
}

#[test]
fn end_session_ignores_captures() {
    let outcome = EndSession.invoke(&captures(&["whatever", "extra"])).unwrap();
    assert_eq!(outcome, Outcome::Terminate);
}

//! The standard query vocabulary.
//!
//! The declarative pattern-action table the bot ships with. Declared once
//! at startup; insertion order is match priority, so the `bye` entry is
//! consulted last, in its declared position.

use std::sync::Arc;

use factbot_dispatch::{EndSession, FieldQuery, PatternTable, RunwayLengthQuery};
use factbot_foundation::{FieldLookup, FieldSpec};
use factbot_matcher::Pattern;

/// Builds the standard pattern-action table over the given article source.
#[must_use]
pub fn standard_table(lookup: Arc<dyn FieldLookup>) -> PatternTable {
    PatternTable::new()
        .with_entry(
            Pattern::parse("when was % born"),
            Box::new(FieldQuery::new(lookup.clone(), FieldSpec::BirthDate)),
        )
        .with_entry(
            Pattern::parse("what is the polar radius of %"),
            Box::new(FieldQuery::new(lookup.clone(), FieldSpec::PolarRadius)),
        )
        .with_entry(
            Pattern::parse("what is the address of %"),
            Box::new(FieldQuery::new(lookup.clone(), FieldSpec::Address)),
        )
        .with_entry(
            Pattern::parse("what is the elevation of %"),
            Box::new(FieldQuery::new(lookup.clone(), FieldSpec::Elevation).with_suffix(" ft")),
        )
        .with_entry(
            Pattern::parse("what is the length of runway _ at %"),
            Box::new(RunwayLengthQuery::new(lookup)),
        )
        .with_entry(Pattern::parse("bye"), Box::new(EndSession))
}

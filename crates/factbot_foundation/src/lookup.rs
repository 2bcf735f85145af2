//! The field-lookup seam.
//!
//! The dispatch layer's actions answer queries by extracting one scalar
//! property from a topic's reference article. [`FieldSpec`] names the
//! property; [`FieldLookup`] is the trait the article source implements.
//! Keeping the trait here lets the dispatch layer stay ignorant of where
//! articles come from (live Wikipedia, canned fixtures in tests).

use std::fmt;

use crate::error::Result;

/// Which scalar property to extract from a topic's article.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldSpec {
    /// Birth date of a person, in `xxxx-xx-xx` form.
    BirthDate,
    /// Polar radius of a planet, in kilometers.
    PolarRadius,
    /// Street address of an institution.
    Address,
    /// Elevation above mean sea level of an airport, in feet.
    Elevation,
    /// Length of one named runway at an airport, in feet.
    RunwayLength {
        /// Runway designation as it appears in the article (e.g. `09l/27r`).
        designation: String,
    },
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BirthDate => write!(f, "birth date"),
            Self::PolarRadius => write!(f, "polar radius"),
            Self::Address => write!(f, "address"),
            Self::Elevation => write!(f, "elevation"),
            Self::RunwayLength { designation } => {
                write!(f, "length of runway {designation}")
            }
        }
    }
}

/// A source of scalar facts about topics.
///
/// Synchronous and blocking; a call resolves the topic to its canonical
/// article and extracts the requested field from it.
///
/// # Errors
///
/// Implementations fail with [`ErrorKind::TopicNotFound`] when no article
/// resolves for the topic and [`ErrorKind::FieldNotFound`] when the article
/// has no extractable value for the field.
///
/// [`ErrorKind::TopicNotFound`]: crate::error::ErrorKind::TopicNotFound
/// [`ErrorKind::FieldNotFound`]: crate::error::ErrorKind::FieldNotFound
pub trait FieldLookup {
    /// Extracts `field` from the canonical article for `topic`.
    fn lookup_field(&self, topic: &str, field: &FieldSpec) -> Result<String>;
}

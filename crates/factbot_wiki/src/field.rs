//! Per-field value extraction.
//!
//! Each [`FieldSpec`] maps to one regular expression with a named capture
//! group for the value, applied to cleaned infobox text. All patterns run
//! case-insensitive with dot-matches-newline, since infobox text keeps its
//! line structure.

use regex::Regex;

use factbot_foundation::{Error, FieldSpec, Result};

/// How to pull one field's value out of infobox text.
struct FieldExtraction {
    /// Regular expression with one named capture group for the value.
    pattern: String,
    /// Name of the capture group holding the value.
    group: &'static str,
    /// Failure message when the expression finds nothing.
    missing: &'static str,
}

impl FieldExtraction {
    fn for_field(field: &FieldSpec) -> Self {
        match field {
            FieldSpec::BirthDate => Self {
                pattern: r"(?si)Born\D*(?P<birth>\d{4}-\d{2}-\d{2})".to_string(),
                group: "birth",
                missing: "article infobox has no birth information \
                          (at least none in xxxx-xx-xx form)",
            },
            FieldSpec::PolarRadius => Self {
                pattern: r"(?si)Polar radius.*?(?: ?\d+ )?(?P<radius>[\d,.]+).*?km".to_string(),
                group: "radius",
                missing: "article infobox has no polar radius information",
            },
            FieldSpec::Address => Self {
                pattern: r"(?si)Address\s*:?\s*(?P<address>[\w\s.,]+?)(?:\s*(?:Street|Coordinates)|$)"
                    .to_string(),
                group: "address",
                missing: "article infobox has no address information",
            },
            FieldSpec::Elevation => Self {
                pattern: r"(?si)Elevation AMSL.*?(?P<elevation>[\d,.]+).*?ft".to_string(),
                group: "elevation",
                missing: "article infobox has no elevation information",
            },
            FieldSpec::RunwayLength { designation } => Self {
                // The infobox's runway table flattens to one line per cell;
                // the length cell follows the designation's line.
                pattern: format!(r"(?i){}\n(?P<length>[^\n]*)", regex::escape(designation)),
                group: "length",
                missing: "article infobox has no runway length information",
            },
        }
    }
}

/// Extracts one field's value from cleaned infobox text.
///
/// # Errors
///
/// Returns `FieldNotFound` when the field's expression finds no value in
/// the text.
pub fn extract_field(text: &str, field: &FieldSpec) -> Result<String> {
    let extraction = FieldExtraction::for_field(field);

    let regex = Regex::new(&extraction.pattern)
        .map_err(|e| Error::internal(format!("field regex for {field}: {e}")))?;

    let captures = regex
        .captures(text)
        .ok_or_else(|| Error::field_not_found(extraction.missing))?;

    let value = captures
        .name(extraction.group)
        .ok_or_else(|| Error::internal(format!("missing capture group for {field}")))?;

    Ok(value.as_str().to_string())
}

//! Infobox isolation and text cleanup.
//!
//! A Wikipedia article's first element with class `infobox` is its summary
//! box; every field query extracts its value from that box's flattened
//! text. The flattened text is noisy (non-ASCII glyphs, runs of blanks
//! from table markup), so it is sanitized before the field regexes see it.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use factbot_foundation::{Error, Result};

static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(" +").expect("valid regex"));
static NEWLINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new("\n+").expect("valid regex"));

/// Extracts the flattened text of the first infobox in an article.
///
/// # Errors
///
/// Returns `FieldNotFound` when the article has no infobox: the topic
/// resolved, but the article cannot answer field queries.
pub fn first_infobox_text(html: &str) -> Result<String> {
    let selector = Selector::parse(".infobox")
        .map_err(|e| Error::internal(format!("infobox selector: {e}")))?;

    let document = Html::parse_document(html);
    let infobox = document
        .select(&selector)
        .next()
        .ok_or_else(|| Error::field_not_found("article has no infobox"))?;

    Ok(infobox.text().collect())
}

/// Sanitizes flattened infobox text.
///
/// Non-ASCII and non-printable characters become spaces, then runs of
/// spaces and runs of newlines each collapse to one.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let printable: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() || c == ' ' || c == '\n' || c == '\t' {
                c
            } else {
                ' '
            }
        })
        .collect();

    let collapsed = SPACE_RUNS.replace_all(&printable, " ");
    NEWLINE_RUNS.replace_all(&collapsed, "\n").into_owned()
}

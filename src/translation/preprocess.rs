/*!
 * Text normalisation applied before translation.
 */

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// Any run of whitespace, including line breaks
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse whitespace runs to a single space and trim both ends
///
/// Whitespace-only input yields an empty string. Applying it twice gives the
/// same result as applying it once.
pub fn clean_text(raw: &str) -> String {
    let cleaned = WHITESPACE_RUN.replace_all(raw.trim(), " ").into_owned();
    if cleaned.len() != raw.len() {
        trace!("Normalised text from {} to {} bytes", raw.len(), cleaned.len());
    }
    cleaned
}

/// Normalise every text of a chunk, keeping positions
pub fn clean_texts(texts: &[String]) -> Vec<String> {
    texts.iter().map(|t| clean_text(t)).collect()
}

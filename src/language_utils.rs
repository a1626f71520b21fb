//! Language utilities for ISO language code handling
//!
//! Request bodies carry free-form language codes. These helpers resolve
//! ISO 639-1 (2-letter) and ISO 639-2 (3-letter) codes to English names so
//! prompts read naturally, while tolerating codes isolang does not know.

use anyhow::{Result, anyhow};
use isolang::Language;

/// ISO 639-2/B codes that differ from their ISO 639-2/T form
const BIBLIOGRAPHIC_CODES: &[(&str, &str)] = &[
    ("fre", "fra"),
    ("ger", "deu"),
    ("dut", "nld"),
    ("gre", "ell"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("ice", "isl"),
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("per", "fas"),
    ("geo", "kat"),
    ("may", "msa"),
    ("mac", "mkd"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

/// Resolve a language code (optionally with a region, e.g. `pt-BR`) to an isolang language
fn lookup(code: &str) -> Option<Language> {
    let normalized = code.trim().to_lowercase();
    // Region subtags do not change the base language name
    let base = normalized
        .split(['-', '_'])
        .next()
        .unwrap_or_default();

    match base.len() {
        2 => Language::from_639_1(base),
        3 => {
            let part2t = BIBLIOGRAPHIC_CODES
                .iter()
                .find(|(b, _)| *b == base)
                .map(|(_, t)| *t)
                .unwrap_or(base);
            Language::from_639_3(part2t)
        }
        _ => None,
    }
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    lookup(code)
        .map(|lang| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Unknown language code: {}", code))
}

/// Human-readable label for prompts: `English (en)`, or the raw code when unknown
pub fn display_language(code: &str) -> String {
    match get_language_name(code) {
        Ok(name) => format!("{} ({})", name, code.trim()),
        Err(_) => code.trim().to_string(),
    }
}

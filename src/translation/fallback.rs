/*!
 * Placeholder output used when no real translation is available.
 */

use crate::models::TranslationMap;

/// Keyword groups checked against the guidance, in priority order.
///
/// Each entry pairs the substrings to look for with the token prefix used
/// when one of them is present.
const CONTEXT_TOKENS: &[(&[&str], &str)] = &[
    (&["occupational", "prl"], "WORKPLACE_SAFETY"),
    (&["technical"], "TECHNICAL"),
    (&["educational"], "EDUCATIONAL"),
];

/// Pick the placeholder token for a target language and optional guidance
pub fn placeholder_token(target_lang: &str, context: Option<&str>) -> String {
    let target = target_lang.trim().to_uppercase();
    let lowered = context.map(str::to_lowercase).unwrap_or_default();

    CONTEXT_TOKENS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, prefix)| format!("{}_{}", prefix, target))
        .unwrap_or_else(|| format!("{}_TRANSLATION", target))
}

/// Produce one placeholder per text; empty texts stay empty
pub fn synthesize(texts: &[String], target_lang: &str, context: Option<&str>) -> TranslationMap {
    let token = placeholder_token(target_lang, context);

    texts
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let value = if text.is_empty() {
                String::new()
            } else {
                format!("[{}_{}]", token, index)
            };
            (index, value)
        })
        .collect()
}

/*!
 * Parsing of model replies into translation maps.
 */

use serde_json::{Map, Value};

use crate::errors::ProviderError;
use crate::models::TranslationMap;

/// Remove an optional markdown code fence around a reply
pub fn strip_code_fences(reply: &str) -> &str {
    let mut cleaned = reply.trim();

    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest.trim();
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest.trim();
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest.trim();
    }

    cleaned
}

/// Accept only the canonical decimal form of an index (`"0"`, not `"00"` or `"+0"`)
fn parse_index(key: &str) -> Result<usize, ProviderError> {
    key.parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == key)
        .ok_or_else(|| ProviderError::ParseError(format!("unexpected key '{}'", key)))
}

/// Parse a reply into a map covering exactly the input positions
///
/// Keys must be integer indices into `texts`. Every non-empty input must be
/// translated; missing entries for empty inputs are filled with `""`.
pub fn parse_translation_reply(reply: &str, texts: &[String]) -> Result<TranslationMap, ProviderError> {
    let cleaned = strip_code_fences(reply);
    if cleaned.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    let object: Map<String, Value> = serde_json::from_str(cleaned)
        .map_err(|e| ProviderError::ParseError(format!("reply is not a JSON object: {}", e)))?;

    let mut translations = TranslationMap::new();
    for (key, value) in object {
        let index = parse_index(&key)?;
        if index >= texts.len() {
            return Err(ProviderError::ParseError(format!(
                "index {} is out of range for {} texts",
                index,
                texts.len()
            )));
        }

        let translated = match value {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => {
                return Err(ProviderError::ParseError(format!(
                    "translation for index {} is not a string: {}",
                    index, other
                )))
            }
        };
        if translations.insert(index, translated).is_some() {
            return Err(ProviderError::ParseError(format!("duplicate index {}", index)));
        }
    }

    for (index, text) in texts.iter().enumerate() {
        if translations.contains_key(&index) {
            continue;
        }
        if text.is_empty() {
            translations.insert(index, String::new());
        } else {
            return Err(ProviderError::ParseError(format!(
                "missing translation for index {}",
                index
            )));
        }
    }

    Ok(translations)
}

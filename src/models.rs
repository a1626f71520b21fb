/*!
 * Request and response bodies exchanged with the HTTP layer.
 *
 * Field names follow the JSON wire format (camelCase). Requests are
 * validated here, at the boundary, before any pipeline logic runs.
 */

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::errors::ValidationError;

/// Translations keyed by zero-based input position; serialised with string keys
pub type TranslationMap = BTreeMap<usize, String>;

fn default_total_chunks() -> usize {
    1
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_context_target_lang() -> String {
    "es".to_string()
}

fn default_content_type() -> String {
    "educational".to_string()
}

/// Require `field` to be present and hold a JSON array
fn require_array(body: &Value, field: &'static str) -> Result<(), ValidationError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(Value::Array(_)) => Ok(()),
        Some(_) => Err(ValidationError::InvalidField {
            field,
            reason: "expected an array of strings".to_string(),
        }),
    }
}

fn invalid_body(error: serde_json::Error) -> ValidationError {
    ValidationError::InvalidField {
        field: "body",
        reason: error.to_string(),
    }
}

/// One chunk of texts to translate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    /// Source strings, in document order
    #[serde(default)]
    pub chunk_texts: Vec<String>,

    /// Position of this chunk in the caller's job
    #[serde(default)]
    pub chunk_index: usize,

    /// Number of chunks in the caller's job
    #[serde(default = "default_total_chunks")]
    pub total_chunks: usize,

    /// Source language code
    #[serde(default = "default_source_lang")]
    pub source_lang: String,

    /// Target language code (required)
    #[serde(default)]
    pub target_lang: Option<String>,

    /// Guidance block from the context generator
    #[serde(default)]
    pub translation_context: Option<String>,

    /// Full source document; carried but not used
    #[serde(default)]
    pub source_content: Option<String>,
}

impl TranslationRequest {
    /// Create a request for a single-chunk job
    pub fn new(chunk_texts: Vec<String>, target_lang: impl Into<String>) -> Self {
        Self {
            chunk_texts,
            chunk_index: 0,
            total_chunks: default_total_chunks(),
            source_lang: default_source_lang(),
            target_lang: Some(target_lang.into()),
            translation_context: None,
            source_content: None,
        }
    }

    /// Set the source language
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = source_lang.into();
        self
    }

    /// Set the contextual guidance
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.translation_context = Some(context.into());
        self
    }

    /// Set the chunk position
    pub fn with_chunk(mut self, chunk_index: usize, total_chunks: usize) -> Self {
        self.chunk_index = chunk_index;
        self.total_chunks = total_chunks;
        self
    }

    /// Parse and validate a raw JSON body
    pub fn from_json(body: Value) -> Result<Self, ValidationError> {
        require_array(&body, "chunkTexts")?;
        let request: Self = serde_json::from_value(body).map_err(invalid_body)?;
        request.validate()?;
        Ok(request)
    }

    /// Check the required fields
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.chunk_texts.is_empty() {
            return Err(ValidationError::EmptyField("chunkTexts"));
        }

        match self.target_lang.as_deref() {
            None => Err(ValidationError::MissingField("targetLang")),
            Some(lang) if lang.trim().is_empty() => Err(ValidationError::EmptyField("targetLang")),
            Some(_) => Ok(()),
        }
    }

    /// Target language; empty when the request has not been validated
    pub fn target(&self) -> &str {
        self.target_lang.as_deref().unwrap_or_default()
    }

    /// Guidance text when it carries any content
    pub fn context(&self) -> Option<&str> {
        self.translation_context
            .as_deref()
            .filter(|c| !c.trim().is_empty())
    }
}

/// Counters reported with every translated chunk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranslationStats {
    pub texts_processed: usize,
    /// Entries produced by the model; zero when placeholders were used
    pub real_translations: usize,
    pub chunk_complete: bool,
    pub contextual_translation: bool,
    pub processing_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranslationMetadata {
    pub source_lang: String,
    pub target_lang: String,
    /// One-based progress label, `"<chunkIndex + 1>/<totalChunks>"`
    pub chunk_info: String,
    pub timestamp: String,
}

/// Wire form of a translated chunk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub success: bool,
    pub chunk_index: usize,
    pub translations: TranslationMap,
    pub stats: TranslationStats,
    pub metadata: TranslationMetadata,
}

/// Samples to derive translation guidance from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContextRequest {
    /// Representative source strings
    #[serde(default)]
    pub sample_texts: Vec<String>,

    /// Free-text requirements from the user
    #[serde(default)]
    pub user_context: String,

    /// Target language code
    #[serde(default = "default_context_target_lang")]
    pub target_lang: String,

    /// Advisory content-type hint; not validated
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

impl ContextRequest {
    /// Create a request with default hints
    pub fn new(sample_texts: Vec<String>, target_lang: impl Into<String>) -> Self {
        Self {
            sample_texts,
            user_context: String::new(),
            target_lang: target_lang.into(),
            content_type: default_content_type(),
        }
    }

    /// Set the user requirements
    pub fn with_user_context(mut self, user_context: impl Into<String>) -> Self {
        self.user_context = user_context.into();
        self
    }

    /// Set the content-type hint
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Parse and validate a raw JSON body
    pub fn from_json(body: Value) -> Result<Self, ValidationError> {
        require_array(&body, "sampleTexts")?;
        let request: Self = serde_json::from_value(body).map_err(invalid_body)?;
        request.validate()?;
        Ok(request)
    }

    /// Check the required fields
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sample_texts.is_empty() {
            return Err(ValidationError::EmptyField("sampleTexts"));
        }
        Ok(())
    }

    /// User requirements when any were given
    pub fn user_requirements(&self) -> Option<&str> {
        let trimmed = self.user_context.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// How a context block was produced, as reported to clients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMethod {
    Claude,
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContextStats {
    pub sample_texts_analyzed: usize,
    /// Length of the block in characters
    pub context_length: usize,
    pub user_context_provided: bool,
    pub processing_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContextMetadata {
    pub target_lang: String,
    pub content_type: String,
    pub generation_method: GenerationMethod,
    pub timestamp: String,
}

/// Wire form of a generated context block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContextResponse {
    pub success: bool,
    pub translation_context: String,
    pub stats: ContextStats,
    pub metadata: ContextMetadata,
}

/// Current time as an ISO-8601 UTC timestamp
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

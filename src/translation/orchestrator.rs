/*!
 * End-to-end translation of one chunk of XLIFF texts.
 *
 * The orchestrator validates the request, normalises the texts, asks the
 * text generator for a JSON translation map and, when anything about that
 * call fails, substitutes deterministic placeholders so the caller always
 * receives a well-shaped result.
 */

use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Instant;

use crate::app_config::AnthropicConfig;
use crate::errors::{ProviderError, ValidationError};
use crate::models::{
    timestamp_now, TranslationMap, TranslationMetadata, TranslationRequest, TranslationResponse,
    TranslationStats,
};
use crate::providers::TextGenerator;

use super::fallback;
use super::parsing::parse_translation_reply;
use super::preprocess::clean_texts;
use super::prompts::build_translation_prompt;

/// How the translations of a chunk were obtained
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationOutcome {
    /// Parsed from the model's reply
    Real(TranslationMap),
    /// Placeholders, with the reason the model could not be used
    Fallback {
        translations: TranslationMap,
        reason: String,
    },
}

impl TranslationOutcome {
    /// The translation map, whatever its origin
    pub fn translations(&self) -> &TranslationMap {
        match self {
            Self::Real(translations) => translations,
            Self::Fallback { translations, .. } => translations,
        }
    }

    /// Whether placeholders were used
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    fn into_translations(self) -> TranslationMap {
        match self {
            Self::Real(translations) => translations,
            Self::Fallback { translations, .. } => translations,
        }
    }
}

/// Result of translating one chunk
#[derive(Debug, Clone)]
pub struct TranslationResult {
    pub outcome: TranslationOutcome,
    pub chunk_index: usize,
    pub stats: TranslationStats,
    pub metadata: TranslationMetadata,
}

impl TranslationResult {
    /// Collapse into the wire shape; real and fallback results look the same
    pub fn into_response(self) -> TranslationResponse {
        TranslationResponse {
            success: true,
            chunk_index: self.chunk_index,
            translations: self.outcome.into_translations(),
            stats: self.stats,
            metadata: self.metadata,
        }
    }
}

/// Drives chunk translation against a text generator
#[derive(Debug, Clone)]
pub struct TranslationOrchestrator {
    /// Backend used for the remote attempt
    generator: Arc<dyn TextGenerator>,
    /// Output token budget per chunk
    max_tokens: u32,
}

impl TranslationOrchestrator {
    /// Create a new orchestrator
    pub fn new(generator: Arc<dyn TextGenerator>, max_tokens: u32) -> Self {
        Self {
            generator,
            max_tokens,
        }
    }

    /// Create an orchestrator with the budget from the configuration
    pub fn from_config(generator: Arc<dyn TextGenerator>, config: &AnthropicConfig) -> Self {
        Self::new(generator, config.translation_max_tokens)
    }

    /// Translate one chunk
    ///
    /// Only validation failures are returned as errors; every problem with
    /// the remote call is absorbed into a `TranslationOutcome::Fallback`.
    pub async fn process_translation(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, ValidationError> {
        request.validate()?;
        let start = Instant::now();

        let target_lang = request.target();
        let context = request.context();
        info!(
            "Translating chunk {}/{} ({} texts, {} -> {}, context: {})",
            request.chunk_index + 1,
            request.total_chunks,
            request.chunk_texts.len(),
            request.source_lang,
            target_lang,
            if context.is_some() { "yes" } else { "no" }
        );

        let texts = clean_texts(&request.chunk_texts);

        let outcome = match self.translate_remote(&texts, &request.source_lang, target_lang, context).await {
            Ok(translations) => TranslationOutcome::Real(translations),
            Err(e) => {
                if e.is_configuration() {
                    warn!("Translation service not configured ({}), using placeholders", e);
                } else {
                    warn!("Remote translation failed ({}), using placeholders", e);
                }
                TranslationOutcome::Fallback {
                    translations: fallback::synthesize(&texts, target_lang, context),
                    reason: e.to_string(),
                }
            }
        };

        let real_translations = match &outcome {
            TranslationOutcome::Real(translations) => translations.len(),
            TranslationOutcome::Fallback { .. } => 0,
        };
        let processing_time_ms = start.elapsed().as_millis() as u64;

        info!(
            "Chunk {} done in {} ms ({} real translations)",
            request.chunk_index + 1,
            processing_time_ms,
            real_translations
        );

        Ok(TranslationResult {
            outcome,
            chunk_index: request.chunk_index,
            stats: TranslationStats {
                texts_processed: texts.len(),
                real_translations,
                chunk_complete: true,
                contextual_translation: context.is_some(),
                processing_time_ms,
            },
            metadata: TranslationMetadata {
                source_lang: request.source_lang.clone(),
                target_lang: target_lang.to_string(),
                chunk_info: format!("{}/{}", request.chunk_index + 1, request.total_chunks),
                timestamp: timestamp_now(),
            },
        })
    }

    /// Build the prompt, call the generator and parse its reply
    async fn translate_remote(
        &self,
        texts: &[String],
        source_lang: &str,
        target_lang: &str,
        context: Option<&str>,
    ) -> Result<TranslationMap, ProviderError> {
        let prompt = build_translation_prompt(texts, source_lang, target_lang, context);
        debug!(
            "Sending {}-character translation prompt to {}",
            prompt.chars().count(),
            self.generator.name()
        );

        let reply = self.generator.generate(&prompt, self.max_tokens).await?;
        parse_translation_reply(&reply, texts)
    }
}

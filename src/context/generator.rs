/*!
 * Translation context generation.
 *
 * A context block is a short, fixed-field description of the content
 * (domain, tone, terminology) that clients pass back into translation
 * requests. It is produced by the text generator when possible and composed
 * locally from the classifier otherwise.
 */

use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Instant;

use crate::app_config::{AnthropicConfig, ContextConfig};
use crate::errors::{ProviderError, ValidationError};
use crate::language_utils::display_language;
use crate::models::{
    timestamp_now, ContextMetadata, ContextRequest, ContextResponse, ContextStats, GenerationMethod,
};
use crate::providers::TextGenerator;
use crate::translation::prompts::build_context_prompt;

use super::classifier::{analyze_patterns, detect_domain, terminology_approach};

/// Substring present only in locally composed blocks
pub const LOCAL_ANALYSIS_MARKER: &str = "(local analysis)";

/// How a context block was obtained
#[derive(Debug, Clone, PartialEq)]
pub enum ContextOutcome {
    /// Written by the text generator
    Remote(String),
    /// Composed from the classifier, with the reason the generator was not used
    Local { block: String, reason: String },
}

impl ContextOutcome {
    /// The block text
    pub fn block(&self) -> &str {
        match self {
            Self::Remote(block) => block,
            Self::Local { block, .. } => block,
        }
    }

    /// Whether the local composition was used
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local { .. })
    }
}

/// Result of a context generation request
#[derive(Debug, Clone)]
pub struct ContextResult {
    pub outcome: ContextOutcome,
    pub stats: ContextStats,
    pub metadata: ContextMetadata,
}

impl ContextResult {
    /// Collapse into the wire shape
    pub fn into_response(self) -> ContextResponse {
        let translation_context = match self.outcome {
            ContextOutcome::Remote(block) => block,
            ContextOutcome::Local { block, .. } => block,
        };

        ContextResponse {
            success: true,
            translation_context,
            stats: self.stats,
            metadata: self.metadata,
        }
    }
}

/// Infer the generation method from the block text
///
/// Only used for reporting; control flow relies on `ContextOutcome`.
pub fn generation_method_of(block: &str) -> GenerationMethod {
    if block.contains(LOCAL_ANALYSIS_MARKER) {
        GenerationMethod::Local
    } else {
        GenerationMethod::Claude
    }
}

/// Compose a context block from the keyword heuristics
pub fn build_local_context(request: &ContextRequest) -> String {
    let analysis = analyze_patterns(&request.sample_texts, &request.content_type);
    let classification = detect_domain(&request.sample_texts);

    let considerations = if analysis.special_considerations.is_empty() {
        "Keep inline tags and formatting intact".to_string()
    } else {
        analysis.special_considerations.join(", ")
    };

    let mut lines = vec![
        format!("**CONTENT TYPE**: {}", analysis.content_type),
        format!(
            "**DOMAIN**: {} ({}% confidence)",
            classification.domain.label(),
            classification.confidence
        ),
        format!(
            "**TERMINOLOGY APPROACH**: {}",
            terminology_approach(classification.domain.key())
        ),
        format!("**TONE**: {}", analysis.tone),
        format!("**AUDIENCE**: {}", analysis.audience),
        format!("**SPECIAL CONSIDERATIONS**: {}", considerations),
    ];

    if let Some(requirements) = request.user_requirements() {
        lines.push(format!("**USER REQUIREMENTS**: {}", requirements));
    }

    lines.push(format!(
        "**QUALITY STANDARDS**: Natural, fluent {} that keeps every inline tag intact and reads as if originally written in it {}",
        display_language(&request.target_lang),
        LOCAL_ANALYSIS_MARKER
    ));

    lines.join("\n")
}

/// Produces translation context blocks
#[derive(Debug, Clone)]
pub struct ContextGenerator {
    /// Backend used for the remote attempt
    generator: Arc<dyn TextGenerator>,
    /// Output token budget per block
    max_tokens: u32,
    /// Leading samples sent to the generator
    max_samples: usize,
}

impl ContextGenerator {
    /// Create a new context generator
    pub fn new(generator: Arc<dyn TextGenerator>, max_tokens: u32, max_samples: usize) -> Self {
        Self {
            generator,
            max_tokens,
            max_samples,
        }
    }

    /// Create a context generator from the configuration
    pub fn from_config(
        generator: Arc<dyn TextGenerator>,
        anthropic: &AnthropicConfig,
        context: &ContextConfig,
    ) -> Self {
        Self::new(generator, anthropic.context_max_tokens, context.max_samples)
    }

    /// Derive a context block for the samples
    ///
    /// Only validation failures are returned as errors.
    pub async fn generate_translation_context(
        &self,
        request: &ContextRequest,
    ) -> Result<ContextResult, ValidationError> {
        request.validate()?;
        let start = Instant::now();
        let user_requirements = request.user_requirements();

        info!(
            "Generating translation context from {} samples (target: {}, hint: {})",
            request.sample_texts.len(),
            request.target_lang,
            request.content_type
        );

        let outcome = match self.generate_remote(request).await {
            Ok(block) => ContextOutcome::Remote(block),
            Err(e) => {
                warn!("Remote context generation failed ({}), using local analysis", e);
                ContextOutcome::Local {
                    block: build_local_context(request),
                    reason: e.to_string(),
                }
            }
        };

        let block = outcome.block();
        let processing_time_ms = start.elapsed().as_millis() as u64;
        let stats = ContextStats {
            sample_texts_analyzed: request.sample_texts.len(),
            context_length: block.chars().count(),
            user_context_provided: user_requirements.is_some(),
            processing_time_ms,
        };
        let metadata = ContextMetadata {
            target_lang: request.target_lang.clone(),
            content_type: request.content_type.clone(),
            generation_method: generation_method_of(block),
            timestamp: timestamp_now(),
        };

        info!(
            "Context of {} characters ready in {} ms ({:?})",
            stats.context_length, processing_time_ms, metadata.generation_method
        );

        Ok(ContextResult {
            outcome,
            stats,
            metadata,
        })
    }

    async fn generate_remote(&self, request: &ContextRequest) -> Result<String, ProviderError> {
        let prompt = build_context_prompt(
            &request.sample_texts,
            self.max_samples,
            request.user_requirements(),
            &request.target_lang,
            &request.content_type,
        );
        debug!("Sending context prompt to {}", self.generator.name());

        let reply = self.generator.generate(&prompt, self.max_tokens).await?;
        let block = reply.trim();
        if block.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(block.to_string())
    }
}

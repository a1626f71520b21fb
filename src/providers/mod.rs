/*!
 * Provider implementations for the text generation API.
 *
 * This module contains:
 * - `TextGenerator`: the narrow capability the pipelines depend on
 * - `anthropic`: Anthropic Messages API client
 * - `mock`: Scriptable generator for tests and offline runs
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for text generation backends
///
/// The translation and context pipelines only ever need a single
/// prompt-in, text-out call, so this is all a backend must provide.
#[async_trait]
pub trait TextGenerator: Send + Sync + Debug {
    /// Generate a reply to a single user prompt
    ///
    /// # Arguments
    /// * `prompt` - The full user message
    /// * `max_tokens` - Output token budget
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The reply text or an error
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, ProviderError>;

    /// Short identifier used in logs
    fn name(&self) -> &str;
}

pub mod anthropic;
pub mod mock;

/*!
 * Mock text generator for testing.
 *
 * This module provides a generator that simulates different behaviors
 * without touching the network:
 * - `MockGenerator::replying(text)` - Always answers with the given text
 * - `MockGenerator::with_responder(f)` - Answers with `f(prompt)`
 * - `MockGenerator::failing()` - Always fails with an API error
 * - `MockGenerator::empty()` - Always fails with an empty response
 * - `MockGenerator::unconfigured()` - Behaves like a client without API key
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::TextGenerator;

/// Behavior mode for the mock generator
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always succeeds with a fixed reply
    Reply(String),
    /// Succeeds with a reply computed from the prompt
    Responder(fn(&str) -> String),
    /// Always fails with an API error
    Failing,
    /// Returns no text
    Empty,
    /// Fails as if no API key was configured
    Unconfigured,
}

/// Mock generator for testing pipeline behavior
#[derive(Debug, Clone)]
pub struct MockGenerator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of generate calls, shared between clones
    request_count: Arc<AtomicUsize>,
    /// Prompts received, shared between clones
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    /// Create a new mock generator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a generator that always answers with `text`
    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Reply(text.into()))
    }

    /// Create a generator that answers with `responder(prompt)`
    pub fn with_responder(responder: fn(&str) -> String) -> Self {
        Self::new(MockBehavior::Responder(responder))
    }

    /// Create a failing generator that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a generator that returns empty replies
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a generator that behaves like a client without credentials
    pub fn unconfigured() -> Self {
        Self::new(MockBehavior::Unconfigured)
    }

    /// Number of calls made so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Most recent prompt, if any
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().ok().and_then(|p| p.last().cloned())
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str, _max_tokens: u32) -> Result<String, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.behavior {
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Responder(responder) => Ok(responder(prompt)),
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),
            MockBehavior::Empty => Err(ProviderError::EmptyResponse),
            MockBehavior::Unconfigured => Err(ProviderError::MissingApiKey),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

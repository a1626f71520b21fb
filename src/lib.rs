/*!
 * # xlf-translator - XLIFF fragment translation with AI
 *
 * A Rust library and HTTP service translating text fragments extracted
 * from XLIFF (XLF) files through the Anthropic API.
 *
 * ## Features
 *
 * - Chunk translation with a strict JSON reply format and inline tag preservation
 * - Translation context generation (domain, tone, terminology) to steer prompts
 * - Deterministic local fallbacks whenever the API is unavailable
 * - Keyword-based content classification
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `models`: Request and response bodies
 * - `translation`: Chunk translation pipeline:
 *   - `translation::preprocess`: Text normalisation
 *   - `translation::prompts`: Prompt templates
 *   - `translation::parsing`: Reply parsing
 *   - `translation::fallback`: Placeholder synthesis
 *   - `translation::orchestrator`: The pipeline itself
 * - `context`: Content classification and context blocks
 * - `providers`: Text generation backends (Anthropic, mock)
 * - `language_utils`: ISO language code utilities
 * - `server`: axum routes and shared state
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod context;
pub mod errors;
pub mod language_utils;
pub mod models;
pub mod providers;
pub mod server;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use context::ContextGenerator;
pub use errors::{AppError, ProviderError, ValidationError};
pub use models::{ContextRequest, ContextResponse, TranslationRequest, TranslationResponse};
pub use translation::TranslationOrchestrator;

/*!
 * Translation of XLIFF text chunks using a text generation API.
 *
 * This module contains the translation pipeline. It is split into several
 * submodules:
 *
 * - `preprocess`: Whitespace normalisation of source texts
 * - `prompts`: Prompt templates for translation and context analysis
 * - `parsing`: Turning model replies into index-keyed translation maps
 * - `fallback`: Deterministic placeholders when the API cannot be used
 * - `orchestrator`: The chunk translation pipeline itself
 */

// Re-export main types for easier usage
pub use self::orchestrator::{TranslationOrchestrator, TranslationOutcome, TranslationResult};
pub use self::preprocess::clean_text;

// Submodules
pub mod fallback;
pub mod orchestrator;
pub mod parsing;
pub mod preprocess;
pub mod prompts;

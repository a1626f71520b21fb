/*!
 * Translation context: content classification and guidance blocks.
 *
 * - `classifier`: Pattern analysis and keyword-weighted domain detection
 * - `generator`: Remote context generation with local composition fallback
 */

pub mod classifier;
pub mod generator;

// Re-export main types
pub use classifier::{ContentAnalysis, Domain, DomainClassification};
pub use generator::{ContextGenerator, ContextOutcome, ContextResult};

//! Query resolution for Continuity.
//!
//! This crate owns the lookup, fallback and learn loop: questions are first
//! answered from the knowledge store, then from a language model whose answer
//! is written back to the store for reuse.

pub mod error;
pub mod llm;
pub mod prompt;
pub mod resolver;

pub use error::{ProviderError, ResolutionError};
/// Language model capability and the default Gemini backend.
pub use llm::{GeminiClient, LanguageModelClient};
pub use prompt::build_prompt;
pub use resolver::{QueryResolver, Resolution, ResolutionSource};

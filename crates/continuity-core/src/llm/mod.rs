//! Language model capability used on a knowledge store miss.

mod gemini;

pub use gemini::{DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL, GeminiClient};

use crate::error::ProviderError;
use async_trait::async_trait;

/// Text completion backend.
#[async_trait]
pub trait LanguageModelClient: Send + Sync {
    /// Complete `prompt`, returning the generated text.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Human-readable provider name used in resolution context.
    fn provider_name(&self) -> &str;
}

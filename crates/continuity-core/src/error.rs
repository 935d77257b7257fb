//! Error types for the resolver and language model clients.

use continuity_memory::MemoryError;
use std::time::Duration;
use thiserror::Error;

/// Failures reported by a language model provider.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// No credential was configured for the provider.
    #[error("missing api key for {0}")]
    MissingApiKey(String),
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The provider rejected the credential.
    #[error("authentication rejected ({status}): {message}")]
    Auth { status: u16, message: String },
    /// The provider refused the call for rate or quota reasons.
    #[error("quota exceeded: {0}")]
    Quota(String),
    /// Any other non-success status.
    #[error("provider returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The reply could not be turned into completion text.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
    /// The call exceeded the configured deadline.
    #[error("provider call timed out after {0:?}")]
    Timeout(Duration),
}

/// Errors returned by `QueryResolver::resolve`.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The question was blank.
    #[error("question cannot be empty")]
    EmptyQuestion,
    /// The language model call failed; nothing was learned.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
    /// The knowledge store failed.
    #[error("memory error: {0}")]
    Memory(#[from] MemoryError),
}

//! Memory-first question resolution with auto-learning.

use crate::error::{ProviderError, ResolutionError};
use crate::llm::LanguageModelClient;
use crate::prompt::build_prompt;
use continuity_memory::{KnowledgeStore, MemoryRecord};
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;

/// Where a resolved answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Served from a stored record.
    Memory,
    /// Produced by the language model and learned.
    Generated,
}

/// Answer produced by `QueryResolver::resolve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Answer text.
    pub response: String,
    /// Origin of the answer.
    pub source: ResolutionSource,
    /// Issue of the stored record that matched, on a memory hit.
    pub matched_issue: Option<String>,
    /// Provider that generated the answer, on a memory miss.
    pub provider: Option<String>,
}

impl Resolution {
    /// One-line description of how the answer was obtained.
    pub fn context(&self) -> String {
        match self.source {
            ResolutionSource::Memory => format!(
                "Found in memory: {}",
                self.matched_issue.as_deref().unwrap_or_default()
            ),
            ResolutionSource::Generated => format!(
                "Generated and learned from {}",
                self.provider.as_deref().unwrap_or("language model")
            ),
        }
    }
}

/// Resolves questions from the knowledge store, falling back to a language
/// model and storing what it generates.
#[derive(Clone)]
pub struct QueryResolver {
    store: Arc<dyn KnowledgeStore>,
    model: Arc<dyn LanguageModelClient>,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for QueryResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryResolver")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl QueryResolver {
    /// Create a resolver over an injected store and model client.
    pub fn new(store: Arc<dyn KnowledgeStore>, model: Arc<dyn LanguageModelClient>) -> Self {
        Self {
            store,
            model,
            timeout: None,
        }
    }

    /// Bound each language model call; `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Knowledge store the resolver reads and learns into.
    pub fn store(&self) -> &Arc<dyn KnowledgeStore> {
        &self.store
    }

    /// Name of the fallback language model provider.
    pub fn provider_name(&self) -> &str {
        self.model.provider_name()
    }

    /// Answer `question`, preferring stored knowledge.
    ///
    /// The lookup happens once, before generation, so repeating an unmatched
    /// question learns a duplicate record each time.
    pub async fn resolve(&self, question: &str) -> Result<Resolution, ResolutionError> {
        if question.trim().is_empty() {
            return Err(ResolutionError::EmptyQuestion);
        }

        if let Some(record) = self.store.find_by_substring(question).await? {
            info!(
                "answered from memory (question_len={}, issue_len={})",
                question.len(),
                record.issue.len()
            );
            return Ok(Resolution {
                response: record.solution,
                source: ResolutionSource::Memory,
                matched_issue: Some(record.issue),
                provider: None,
            });
        }

        debug!(
            "memory miss, asking {} (question_len={})",
            self.model.provider_name(),
            question.len()
        );
        let completion = self.generate(&build_prompt(question)).await?;
        self.store
            .append(MemoryRecord::new(question, completion.clone()))
            .await?;
        info!(
            "learned new answer from {} (question_len={}, completion_len={})",
            self.model.provider_name(),
            question.len(),
            completion.len()
        );

        Ok(Resolution {
            response: completion,
            source: ResolutionSource::Generated,
            matched_issue: None,
            provider: Some(self.model.provider_name().to_string()),
        })
    }

    /// Call the model, applying the timeout and rejecting blank completions.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let completion = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.model.complete(prompt))
                .await
                .map_err(|_| ProviderError::Timeout(limit))?,
            None => self.model.complete(prompt).await,
        };
        let completion = completion.inspect_err(|err| {
            warn!("{} call failed: {err}", self.model.provider_name());
        })?;
        if completion.trim().is_empty() {
            return Err(ProviderError::MalformedResponse(
                "empty completion".to_string(),
            ));
        }
        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::{Resolution, ResolutionSource};
    use pretty_assertions::assert_eq;

    #[test]
    fn context_describes_memory_hit() {
        let resolution = Resolution {
            response: "toggle the adapter".to_string(),
            source: ResolutionSource::Memory,
            matched_issue: Some("wifi".to_string()),
            provider: None,
        };
        assert_eq!(resolution.context(), "Found in memory: wifi");
    }

    #[test]
    fn context_describes_generated_answer() {
        let resolution = Resolution {
            response: "restart".to_string(),
            source: ResolutionSource::Generated,
            matched_issue: None,
            provider: Some("Gemini".to_string()),
        };
        assert_eq!(resolution.context(), "Generated and learned from Gemini");
    }
}

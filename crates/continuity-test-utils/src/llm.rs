use async_trait::async_trait;
use continuity_core::{LanguageModelClient, ProviderError};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FixedLLM {
    completion: String,
}

impl FixedLLM {
    pub fn new(completion: impl Into<String>) -> Self {
        Self {
            completion: completion.into(),
        }
    }
}

#[async_trait]
impl LanguageModelClient for FixedLLM {
    async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        Ok(self.completion.clone())
    }

    fn provider_name(&self) -> &str {
        "Stub"
    }
}

#[derive(Debug, Clone)]
pub struct RecordingLLM {
    completion: String,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl RecordingLLM {
    pub fn new(completion: impl Into<String>) -> Self {
        Self {
            completion: completion.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().len()
    }
}

#[async_trait]
impl LanguageModelClient for RecordingLLM {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().push(prompt.to_string());
        Ok(self.completion.clone())
    }

    fn provider_name(&self) -> &str {
        "Recording"
    }
}

#[derive(Debug, Clone)]
pub struct FailingLLM {
    error: ProviderError,
}

impl FailingLLM {
    pub fn new(error: ProviderError) -> Self {
        Self { error }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ProviderError::Transport(message.into()))
    }
}

#[async_trait]
impl LanguageModelClient for FailingLLM {
    async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(self.error.clone())
    }

    fn provider_name(&self) -> &str {
        "Failing"
    }
}

#[derive(Debug, Clone)]
pub struct SlowLLM {
    delay: Duration,
    completion: String,
}

impl SlowLLM {
    pub fn new(delay: Duration, completion: impl Into<String>) -> Self {
        Self {
            delay,
            completion: completion.into(),
        }
    }
}

#[async_trait]
impl LanguageModelClient for SlowLLM {
    async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.completion.clone())
    }

    fn provider_name(&self) -> &str {
        "Slow"
    }
}

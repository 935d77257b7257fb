//! Google Gemini `generateContent` client.

use super::LanguageModelClient;
use crate::error::ProviderError;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Base URL of the public Generative Language API.
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
/// Model used when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";

/// Language model client backed by the Gemini REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl GeminiClient {
    /// Create a client for the default model and endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey("gemini".to_string()));
        }
        Ok(Self {
            client: Client::new(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_key,
        })
    }

    /// Use a different model id, e.g. `gemini-2.5-flash`.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different API base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Reuse an existing HTTP client.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Configured model id.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl LanguageModelClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                    thought: false,
                }],
            }],
        };

        debug!(
            "sending gemini request (model={}, prompt_len={})",
            self.model,
            prompt.len()
        );
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;
        if !status.is_success() {
            warn!(
                "gemini request failed (model={}, status={})",
                self.model,
                status.as_u16()
            );
            return Err(error_from_status(status.as_u16(), &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|err| ProviderError::MalformedResponse(err.to_string()))?;
        let text = extract_text(parsed)?;
        debug!(
            "gemini completion received (model={}, completion_len={})",
            self.model,
            text.len()
        );
        Ok(text)
    }

    fn provider_name(&self) -> &str {
        "Gemini"
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(ProviderError::MalformedResponse(format!(
            "prompt blocked: {reason}"
        )));
    }
    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(ProviderError::MalformedResponse(
            "response has no candidates".to_string(),
        ));
    };
    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter(|part| !part.thought)
        .filter_map(|part| part.text)
        .collect();
    if text.trim().is_empty() {
        let reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
        return Err(ProviderError::MalformedResponse(format!(
            "candidate has no text (finish_reason={reason})"
        )));
    }
    Ok(text)
}

/// Map a non-success HTTP status and body to a provider error.
fn error_from_status(status: u16, body: &str) -> ProviderError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(code) => format!("{code}: {}", envelope.error.message),
            None => envelope.error.message,
        },
        Err(_) => body.trim().to_string(),
    };
    match status {
        401 | 403 => ProviderError::Auth { status, message },
        429 => ProviderError::Quota(message),
        _ => ProviderError::Status { status, message },
    }
}

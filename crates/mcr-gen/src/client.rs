//! HTTP client for an OpenAI-compatible chat-completions endpoint.
//!
//! Wraps `reqwest` with generation-specific error handling, bearer-key
//! management, and typed response deserialization. The completion text of
//! the first choice is returned verbatim; callers must not trust its shape
//! without validation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use mcr_core::GenSettings;

use crate::error::GenError;

/// Single-call text generation capability.
///
/// The one suspension point of a merge. Implementations may be arbitrarily
/// unreliable; the pipeline survives errors, timeouts, and malformed text.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate text for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns [`GenError`] on transport failure, API-level errors, or an
    /// empty completion.
    async fn generate(&self, prompt: &str) -> Result<String, GenError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Production [`Generator`] backed by `POST {base}/v1/chat/completions`.
///
/// Use [`HttpGenerator::new`] with settings from the environment, or
/// [`HttpGenerator::with_base_url`] to point at a mock server in tests.
pub struct HttpGenerator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl HttpGenerator {
    /// Creates a generator from [`GenSettings`].
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(settings: &GenSettings) -> Result<Self, GenError> {
        Self::with_base_url(settings, &settings.base_url)
    }

    /// Creates a generator with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(settings: &GenSettings, base_url: &str) -> Result<Self, GenError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("mcr/0.1 (contact-reconciliation)")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl Generator for HttpGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.2,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Prefer the API's own error message when the body carries one.
            if let Ok(err) = serde_json::from_str::<ApiErrorBody>(&body) {
                return Err(GenError::Api(format!(
                    "{status}: {}",
                    err.error.message
                )));
            }
            return Err(GenError::Api(format!("{status}: {body}")));
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| GenError::Deserialize {
                context: "chat/completions response".to_owned(),
                source: e,
            })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(GenError::EmptyCompletion)
    }
}

//! GeminiProvider -- concrete [`LlmProvider`] implementation for Google Gemini.
//!
//! Sends one `generateContent` call per completion: the system preamble as
//! `systemInstruction` and the rendered dialogue as a single user turn.
//!
//! The API key travels as the `key` query parameter. It is held in a
//! [`SecretString`] and never appears in logs or error messages.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use eightspace_core::llm::provider::LlmProvider;
use eightspace_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use super::types::{GeminiContent, GenerateContentRequest, GenerateContentResponse, error_message};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini LLM provider.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("failed to build tuned HTTP client ({e}), using defaults");
                reqwest::Client::new()
            });

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        }
    }

    /// Override the base URL (proxies, regional endpoints, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }

    fn to_gemini_request(request: &CompletionRequest) -> GenerateContentRequest {
        let system_instruction = (!request.system.trim().is_empty())
            .then(|| GeminiContent::text(None, request.system.clone()));

        GenerateContentRequest {
            contents: vec![GeminiContent::text(Some("user"), request.prompt.clone())],
            system_instruction,
        }
    }
}

// No Debug derive: keeps the client and key out of debug output entirely.

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    #[tracing::instrument(
        name = "gemini.generate_content",
        skip_all,
        fields(
            gen_ai.system = "gemini",
            gen_ai.request.model = %request.model,
            gen_ai.operation.name = "chat",
        )
    )]
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let model = if request.model.is_empty() {
            self.model.as_str()
        } else {
            request.model.as_str()
        };
        let body = Self::to_gemini_request(request);
        let url = self.url(model);
        tracing::debug!(%url, "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                // Strip the URL: it carries the key as a query parameter.
                message: format!("HTTP request failed: {}", e.without_url()),
            })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after_ms = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok())
                .map(|secs| secs.saturating_mul(1000));
            let error_body = response.text().await.unwrap_or_default();

            return Err(match status.as_u16() {
                401 | 403 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited { retry_after_ms },
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {}", error_message(&error_body)),
                },
            });
        }

        let gemini_resp: GenerateContentResponse = response.json().await.map_err(|e| {
            LlmError::Deserialization(format!("failed to parse response: {}", e.without_url()))
        })?;

        let text = gemini_resp.text();
        tracing::debug!(
            chars = text.len(),
            finish_reason = ?gemini_resp.candidates.first().and_then(|c| c.finish_reason.as_deref()),
            "generateContent response received"
        );

        Ok(CompletionResponse {
            text,
            model: gemini_resp.model_version.unwrap_or_else(|| model.to_string()),
        })
    }
}

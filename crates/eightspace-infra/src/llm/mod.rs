//! LLM provider implementations.
//!
//! Contains the Gemini implementation of the [`LlmProvider`] trait defined
//! in `eightspace-core` and the provider factory ([`create_provider`]).

pub mod gemini;

use secrecy::SecretString;

use eightspace_core::llm::box_provider::BoxLlmProvider;
use eightspace_core::llm::provider::LlmProvider;
use eightspace_types::config::CuratorConfig;
use eightspace_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use crate::secret::env::EnvCredentialSource;

use self::gemini::GeminiProvider;

/// Stand-in provider used when no API key is configured.
///
/// Every call fails with [`LlmError::MissingCredential`], so the curator
/// still answers (with its fallback reply) instead of the app failing to
/// start.
pub struct UnconfiguredProvider;

impl LlmProvider for UnconfiguredProvider {
    fn name(&self) -> &str {
        "unconfigured"
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        Err(LlmError::MissingCredential)
    }
}

/// Create a [`BoxLlmProvider`] for the curator.
///
/// Without an API key this returns an [`UnconfiguredProvider`].
pub fn create_provider(config: &CuratorConfig, api_key: Option<SecretString>) -> BoxLlmProvider {
    match api_key {
        Some(key) => BoxLlmProvider::new(
            GeminiProvider::new(key, config.model.clone()).with_base_url(config.base_url.clone()),
        ),
        None => BoxLlmProvider::new(UnconfiguredProvider),
    }
}

/// Resolve the API key from the configured environment variables and build
/// the provider. A missing key is logged once here, at start-up.
pub fn provider_from_env(config: &CuratorConfig) -> BoxLlmProvider {
    let source = EnvCredentialSource::new(config.api_key_env.iter().cloned());
    match source.resolve() {
        Some(credential) => {
            tracing::debug!(source = %credential.source, "curator API key found");
            create_provider(config, Some(credential.secret))
        }
        None => {
            tracing::warn!(
                checked = ?source.names(),
                "no API key configured; the curator will answer with its fallback reply"
            );
            create_provider(config, None)
        }
    }
}

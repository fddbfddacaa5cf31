//! LLM request/response types for The Eight Space.
//!
//! The curator sends exactly one request per visitor question: a system
//! preamble plus the rendered dialogue. Replies are plain text.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chat::FallbackKind;

/// Request to an LLM provider for a completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier; empty means "the provider's configured default".
    pub model: String,
    /// System preamble (persona, mission, exhibition and artist notes).
    pub system: String,
    /// Rendered dialogue, ending with the curator's cue.
    pub prompt: String,
}

/// Response from an LLM provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Reply text. Empty when the model produced no text parts.
    pub text: String,
    pub model: String,
}

/// Errors from LLM provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("no API key configured for the model endpoint")]
    MissingCredential,

    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

impl LlmError {
    /// Classify this error for reporting alongside a fallback reply.
    pub fn fallback_kind(&self) -> FallbackKind {
        match self {
            LlmError::MissingCredential => FallbackKind::MissingCredential,
            LlmError::AuthenticationFailed => FallbackKind::Authentication,
            LlmError::Timeout(_) => FallbackKind::Timeout,
            LlmError::Provider { .. }
            | LlmError::Deserialization(_)
            | LlmError::RateLimited { .. } => FallbackKind::Remote,
        }
    }
}

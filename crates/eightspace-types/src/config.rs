//! Configuration types for The Eight Space.
//!
//! `GalleryConfig` represents the top-level `config.toml`. Every field has a
//! default, so an empty or missing file yields a working configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// Loaded from `~/.eightspace/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub curator: CuratorConfig,
}

/// Settings for the curator's model endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratorConfig {
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Generative Language API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variables checked, in order, for the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: Vec<String>,

    /// Client-side deadline for one request, in seconds. `0` (or `None`)
    /// waits indefinitely.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: Option<u64>,
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_api_key_env() -> Vec<String> {
    vec!["API_KEY".to_string(), "GEMINI_API_KEY".to_string()]
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(60)
}

impl CuratorConfig {
    /// The effective deadline, treating `0` as "no deadline".
    pub fn request_timeout(&self) -> Option<std::time::Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(std::time::Duration::from_secs)
    }
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

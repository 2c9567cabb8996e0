//! `[provider]` configuration for the text-generation backend.
//!
//! # Example
//!
//! ```toml
//! [provider]
//! endpoint = "https://api.openai.com/v1/chat/completions"
//! model = "gpt-4o-mini"
//! api_key_env = "OPENAI_API_KEY"
//! temperature = 0.8
//! max_tokens = 1500
//! timeout_secs = 60
//! ```

use serde::{Deserialize, Serialize};

/// Text-generation provider settings.
///
/// The provider is an OpenAI-style chat-completions endpoint. The API key
/// is never stored in the config file; only the name of the environment
/// variable that holds it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Chat-completions endpoint URL.
    pub endpoint: String,

    /// Model identifier sent with each request.
    pub model: String,

    /// Environment variable holding the bearer token.
    pub api_key_env: String,

    /// Sampling temperature (0.0 - 2.0).
    pub temperature: f32,

    /// Completion length budget per request.
    pub max_tokens: u32,

    /// Per-slot timeout. A request that has not settled by then is
    /// classified as provider-unavailable rather than left pending.
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: 0.8,
            max_tokens: 1500,
            timeout_secs: 60,
        }
    }
}

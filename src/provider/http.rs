//! HTTP text-generation client (OpenAI-style chat completions).

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use super::{ProviderError, TextProvider};
use crate::config::ProviderConfig;

/// Instruction prefix sent as the system message with every request.
/// The 100x100 coordinate space matches the sanitizer's synthesized
/// viewBox fallback.
const GENERATION_PROTOCOL: &str = "You are a professional logo designer. \
Respond with a single valid SVG document and nothing else: no commentary, \
no code fences, no explanation. Use viewBox=\"0 0 100 100\". Do not use \
<script> elements, external references, or raster images.";

/// Production provider: posts chat-completion requests to the configured
/// endpoint. The bearer key is read from the environment at construction;
/// a missing key is sent as-is and surfaces as an auth error from the
/// provider rather than a local failure.
pub struct HttpProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    temperature: f32,
    max_tokens: u32,
}

impl HttpProvider {
    pub fn from_config(config: &ProviderConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env).ok();
        if api_key.is_none() {
            crate::debug!("provider"; "{} is not set, requests will be unauthenticated", config.api_key_env);
        }
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

#[async_trait]
impl TextProvider for HttpProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": GENERATION_PROTOCOL },
                { "role": "user", "content": prompt },
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ProviderError::AuthConfiguration);
        }
        if !status.is_success() {
            return Err(ProviderError::Unavailable(format!("http status {status}")));
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::Unavailable("empty completion".to_string()))
    }
}

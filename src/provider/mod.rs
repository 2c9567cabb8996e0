//! Text-generation provider boundary.
//!
//! The provider is consumed through a trait so the orchestrator is
//! testable with a fake; the production implementation is the HTTP client
//! in [`http`]. Responses carry no structural guarantee - prose, truncated
//! markup, or nothing resembling SVG are all expected inputs downstream.

mod http;

pub use http::HttpProvider;

use async_trait::async_trait;
use thiserror::Error;

/// Slot-local provider failures, classified at the HTTP boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Rate-limit signal for this slot; recoverable by user retry.
    #[error("provider rate limit hit, retry shortly")]
    RateLimited,

    /// Credentials rejected. Fatal for the whole batch - every slot uses
    /// the same credential, so retrying siblings is pointless.
    #[error("provider rejected credentials")]
    AuthConfiguration,

    /// Network, timeout, or server-side failure; retryable.
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// One generation backend call: enhanced prompt in, free-form text out.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

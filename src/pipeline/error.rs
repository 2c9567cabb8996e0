//! Slot-level error taxonomy.
//!
//! Slot-local errors are recorded on the variant and never thrown past
//! the orchestrator boundary. Batch-fatal kinds abort dispatch (quota) or
//! make sibling retries pointless (auth).

use thiserror::Error;

use crate::provider::ProviderError;
use crate::svg::sanitize::SanitizeError;

/// Classified generation failure, surfaced per slot or per batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Pre-flight gate denied the batch. No network calls were made.
    #[error("generation quota exhausted")]
    QuotaExceeded,

    /// Provider rate-limit signal for one slot; recoverable by retry.
    #[error("provider rate limit hit, retry shortly")]
    RateLimited,

    /// Provider rejected credentials. Every slot shares the credential,
    /// so this is fatal for the batch.
    #[error("provider rejected credentials")]
    AuthConfiguration,

    /// Provider text contained no extractable `<svg>` span.
    #[error("response contained no extractable <svg> markup")]
    MalformedOutput,

    /// Network, timeout, or server-side failure; retryable.
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl GenerationError {
    /// Retrying sibling slots cannot help.
    pub fn is_batch_fatal(&self) -> bool {
        matches!(self, Self::QuotaExceeded | Self::AuthConfiguration)
    }

    /// Worth re-running the same slot.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::ProviderUnavailable(_))
    }
}

impl From<ProviderError> for GenerationError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::RateLimited => Self::RateLimited,
            ProviderError::AuthConfiguration => Self::AuthConfiguration,
            ProviderError::Unavailable(detail) => Self::ProviderUnavailable(detail),
        }
    }
}

impl From<SanitizeError> for GenerationError {
    fn from(_: SanitizeError) -> Self {
        Self::MalformedOutput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_fatal_classification() {
        assert!(GenerationError::QuotaExceeded.is_batch_fatal());
        assert!(GenerationError::AuthConfiguration.is_batch_fatal());
        assert!(!GenerationError::RateLimited.is_batch_fatal());
        assert!(!GenerationError::MalformedOutput.is_batch_fatal());
    }

    #[test]
    fn test_retryable_classification() {
        assert!(GenerationError::RateLimited.is_retryable());
        assert!(GenerationError::ProviderUnavailable("x".into()).is_retryable());
        assert!(!GenerationError::MalformedOutput.is_retryable());
    }

    #[test]
    fn test_provider_error_mapping() {
        assert_eq!(
            GenerationError::from(ProviderError::RateLimited),
            GenerationError::RateLimited
        );
        assert_eq!(
            GenerationError::from(SanitizeError::MalformedOutput),
            GenerationError::MalformedOutput
        );
    }
}

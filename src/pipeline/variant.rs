//! Logo variant records and batch container.

use std::fmt;

use super::error::GenerationError;
use crate::utils::hash;

/// Opaque variant identifier, assigned at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantId(String);

impl VariantId {
    /// Derive from the enhanced prompt, slot index, and batch nonce.
    /// Content-addressed, so a re-run of the same batch names the same
    /// artifacts.
    pub fn derive(enhanced_prompt: &str, slot: usize, nonce: u64) -> Self {
        Self(hash::fingerprint(&format!(
            "{enhanced_prompt}\x1f{slot}\x1f{nonce}"
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Slot lifecycle. Transitions exactly once from `Pending` to a terminal
/// state, then never again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantStatus {
    Pending,
    Succeeded,
    Failed,
}

impl VariantStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// One generation slot's record. Owned exclusively by the orchestrator
/// until terminal, then handed to the caller.
#[derive(Debug, Clone)]
pub struct LogoVariant {
    pub id: VariantId,
    pub slot: usize,
    /// The exact user-authored description, shared across the batch.
    pub prompt: String,
    /// Unmodified provider text, absent when generation failed.
    pub raw_markup: Option<String>,
    /// Sanitizer output: always well-formed per the sanitation contract,
    /// or absent.
    pub sanitized_markup: Option<String>,
    pub status: VariantStatus,
    /// Present only when `status == Failed`.
    pub error: Option<GenerationError>,
}

impl LogoVariant {
    pub fn pending(id: VariantId, slot: usize, prompt: String) -> Self {
        Self {
            id,
            slot,
            prompt,
            raw_markup: None,
            sanitized_markup: None,
            status: VariantStatus::Pending,
            error: None,
        }
    }

    /// Transition to `Succeeded`. Must only be called on a pending slot.
    pub fn succeed(&mut self, raw: String, sanitized: String) {
        debug_assert_eq!(self.status, VariantStatus::Pending);
        self.raw_markup = Some(raw);
        self.sanitized_markup = Some(sanitized);
        self.status = VariantStatus::Succeeded;
    }

    /// Transition to `Failed`. Must only be called on a pending slot.
    pub fn fail(&mut self, error: GenerationError) {
        debug_assert_eq!(self.status, VariantStatus::Pending);
        self.error = Some(error);
        self.status = VariantStatus::Failed;
    }
}

/// The set of slots produced by one user-initiated generation request.
/// Returned only after every slot reached a terminal state.
#[derive(Debug)]
pub struct Batch {
    pub prompt: String,
    pub enhanced_prompt: String,
    pub variants: Vec<LogoVariant>,
}

impl Batch {
    pub fn succeeded(&self) -> impl Iterator<Item = &LogoVariant> {
        self.variants
            .iter()
            .filter(|v| v.status == VariantStatus::Succeeded)
    }

    pub fn failed(&self) -> impl Iterator<Item = &LogoVariant> {
        self.variants
            .iter()
            .filter(|v| v.status == VariantStatus::Failed)
    }

    /// A single classified error when every slot failed, for one
    /// aggregated user-visible message. Precedence: auth > rate limit >
    /// provider unavailable > malformed output.
    pub fn aggregate_failure(&self) -> Option<GenerationError> {
        if self.succeeded().next().is_some() || self.variants.is_empty() {
            return None;
        }
        let errors: Vec<_> = self.failed().filter_map(|v| v.error.clone()).collect();
        for probe in [
            GenerationError::AuthConfiguration,
            GenerationError::RateLimited,
        ] {
            if errors.contains(&probe) {
                return Some(probe);
            }
        }
        if let Some(unavailable) = errors
            .iter()
            .find(|e| matches!(e, GenerationError::ProviderUnavailable(_)))
        {
            return Some(unavailable.clone());
        }
        errors.first().cloned()
    }
}

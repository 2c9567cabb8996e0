//! Quota gate: pre-flight collaborator boundary.
//!
//! Checked once per batch, before any provider dispatch. A denial fails
//! the whole batch with zero network calls. A gate *error* is a policy
//! decision (`[policy] quota_failure`), resolved by the orchestrator -
//! this module only defines the contract and the pass-through default.

use anyhow::Result;
use async_trait::async_trait;

/// Gate verdict for one batch.
#[derive(Debug, Clone, Copy)]
pub struct QuotaDecision {
    pub allowed: bool,
    pub remaining: u32,
}

/// Pre-flight quota check. Called once per batch; no retries implied.
#[async_trait]
pub trait QuotaGate: Send + Sync {
    async fn check(&self, user: &str) -> Result<QuotaDecision>;
}

/// Pass-through gate: always allows. The default when no quota service
/// is wired in.
pub struct Unlimited;

#[async_trait]
impl QuotaGate for Unlimited {
    async fn check(&self, _user: &str) -> Result<QuotaDecision> {
        Ok(QuotaDecision {
            allowed: true,
            remaining: u32::MAX,
        })
    }
}

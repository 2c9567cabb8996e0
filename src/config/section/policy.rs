//! `[policy]` configuration for collaborator failure policies.
//!
//! Both knobs here are product decisions rather than hard contracts:
//! the quota gate fails open by default (generation proceeds when the gate
//! itself is unreachable), and generation history is discarded unless a
//! sink file is configured.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collaborator failure policies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// What to do when the quota gate cannot be reached.
    pub quota_failure: QuotaFailurePolicy,

    /// Append-only JSONL file receiving one record per settled slot.
    /// Unset = history is discarded.
    pub history_file: Option<PathBuf>,
}

/// Behavior when the quota gate errors (not when it denies).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotaFailurePolicy {
    /// Allow generation when the gate is unreachable.
    #[default]
    Open,
    /// Refuse generation when the gate is unreachable.
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults_fail_open() {
        let config = PolicyConfig::default();
        assert_eq!(config.quota_failure, QuotaFailurePolicy::Open);
        assert!(config.history_file.is_none());
    }

    #[test]
    fn test_policy_parses_closed() {
        let config: PolicyConfig = toml::from_str("quota_failure = \"closed\"").unwrap();
        assert_eq!(config.quota_failure, QuotaFailurePolicy::Closed);
    }
}

//! `[generate]` configuration for batch defaults.

use serde::{Deserialize, Serialize};

/// Generation batch defaults. All hints are optional; an empty hint is
/// omitted from the enhanced prompt entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Number of variants per batch.
    pub variants: usize,

    /// Default style hint (e.g. "minimalist", "geometric").
    pub style: String,

    /// Default color scheme hint (e.g. "warm earth tones").
    pub color_scheme: String,

    /// Default complexity hint (e.g. "simple", "detailed").
    pub complexity: String,

    /// Default industry hint (e.g. "coffee shop", "tech startup").
    pub industry: String,

    /// Identity passed to the quota gate.
    pub user: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            variants: 4,
            style: String::new(),
            color_scheme: String::new(),
            complexity: String::new(),
            industry: String::new(),
            user: "anonymous".to_string(),
        }
    }
}

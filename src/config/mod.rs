//! Tool configuration management for `logoforge.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `[provider]` | Text-generation backend (endpoint, model, key)  |
//! | `[generate]` | Batch defaults (variant count, hint defaults)   |
//! | `[export]`   | Raster export (jpeg quality, default size)      |
//! | `[policy]`   | Collaborator failure policies (quota, history)  |
//! | `[palettes]` | User-defined recolor palettes                   |

mod error;
mod section;

pub use error::ConfigError;
pub use section::{
    ExportSectionConfig, GenerateConfig, PolicyConfig, ProviderConfig, QuotaFailurePolicy,
};

use crate::svg::recolor::Palette;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Root configuration structure representing logoforge.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Text-generation provider settings
    pub provider: ProviderConfig,

    /// Generation batch defaults
    pub generate: GenerateConfig,

    /// Raster export settings
    pub export: ExportSectionConfig,

    /// Collaborator failure policies
    pub policy: PolicyConfig,

    /// User-defined palettes, merged over the builtin table by name
    pub palettes: HashMap<String, Palette>,
}

impl LogoConfig {
    /// Load configuration from the given path.
    ///
    /// A missing file is not an error: the tool runs on defaults so that
    /// `logoforge generate "..."` works without any setup.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            crate::debug!("config"; "{} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        // Warn on unknown keys instead of silently dropping them
        let deserializer = toml::Deserializer::new(&raw);
        let mut unknown = Vec::new();
        let config: Self = serde_ignored::deserialize(deserializer, |key: serde_ignored::Path| {
            unknown.push(key.to_string());
        })?;
        for key in unknown {
            crate::log!("config"; "ignoring unknown field `{key}` in {}", path.display());
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate value domains that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.endpoint.is_empty() {
            return Err(ConfigError::Validation(
                "provider.endpoint must not be empty".to_string(),
            ));
        }
        if self.provider.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "provider.timeout_secs must be positive".to_string(),
            ));
        }
        if self.generate.variants == 0 || self.generate.variants > 8 {
            return Err(ConfigError::Validation(format!(
                "generate.variants must be 1-8, got {}",
                self.generate.variants
            )));
        }
        if self.export.jpeg_quality == 0 || self.export.jpeg_quality > 100 {
            return Err(ConfigError::Validation(format!(
                "export.jpeg_quality must be 1-100, got {}",
                self.export.jpeg_quality
            )));
        }
        for (name, palette) in &self.palettes {
            if !palette.is_valid() {
                return Err(ConfigError::Validation(format!(
                    "palettes.{name} has an empty color"
                )));
            }
        }
        Ok(())
    }

    /// Resolve a palette by name: user-defined palettes shadow builtins.
    pub fn palette(&self, name: &str) -> Option<Palette> {
        self.palettes
            .get(name)
            .cloned()
            .or_else(|| crate::svg::recolor::builtin_palette(name))
    }
}

//! `[export]` configuration for raster output.

use serde::{Deserialize, Serialize};

/// Raster export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSectionConfig {
    /// JPEG encode quality (1-100).
    pub jpeg_quality: u8,

    /// Default size bucket name: "small" (256), "medium" (512), "large" (1024).
    pub size: String,
}

impl Default for ExportSectionConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: 90,
            size: "medium".to_string(),
        }
    }
}

//! Logo export: SVG passthrough and raster conversion.
//!
//! # Modules
//!
//! - [`raster`]: offscreen rendering + PNG/JPG encoding
//!
//! The `Svg` format short-circuits here and returns the markup bytes
//! untouched; only raster formats reach the drawing surface.

pub mod raster;

use std::str::FromStr;

use thiserror::Error;

use crate::utils::hash;

/// Export target format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
    Jpg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpg => "jpg",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            other => Err(format!("unknown export format `{other}`")),
        }
    }
}

/// Named output size, edge length in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeBucket {
    Small,
    Medium,
    Large,
}

impl SizeBucket {
    pub fn pixels(self) -> u32 {
        match self {
            Self::Small => 256,
            Self::Medium => 512,
            Self::Large => 1024,
        }
    }
}

impl FromStr for SizeBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(format!("unknown size bucket `{other}`")),
        }
    }
}

/// One export operation. Ephemeral: produces a payload, has no identity.
#[derive(Debug, Clone, Copy)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub width: u32,
    pub height: u32,
    /// JPEG encode quality (ignored for other formats).
    pub jpeg_quality: u8,
}

impl ExportRequest {
    pub fn new(format: ExportFormat, width: u32, height: u32) -> Self {
        Self {
            format,
            width,
            height,
            jpeg_quality: 90,
        }
    }

    /// Square request from a named size bucket.
    pub fn bucket(format: ExportFormat, bucket: SizeBucket) -> Self {
        Self::new(format, bucket.pixels(), bucket.pixels())
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }
}

/// Export failures, all surfaced synchronously to the caller. The
/// variant being exported is never mutated by a failed export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not allocate a {0}x{1} drawing surface")]
    DrawSurfaceUnavailable(u32, u32),

    #[error("markup was rejected by the image decoder: {0}")]
    ImageDecode(String),

    #[error("encoding to {0} failed: {1}")]
    Encode(&'static str, String),
}

/// Produce the export payload for the given markup.
///
/// `Svg` returns the markup as text without touching a drawing surface;
/// raster formats go through [`raster::rasterize`].
pub fn export(markup: &str, request: &ExportRequest) -> Result<Vec<u8>, ExportError> {
    match request.format {
        ExportFormat::Svg => Ok(markup.as_bytes().to_vec()),
        ExportFormat::Png | ExportFormat::Jpg => raster::rasterize(markup, request),
    }
}

/// Download filename: `logo-<shortid>.<ext>`, content-addressed so the
/// same markup always names the same file.
pub fn download_filename(markup: &str, format: ExportFormat) -> String {
    format!("logo-{}.{}", hash::fingerprint(markup), format.extension())
}

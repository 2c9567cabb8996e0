//! Deterministic fill-color remapping.
//!
//! Restyles a generated logo without regenerating it: every fill attribute
//! in the markup is classified into one of three buckets and substituted
//! from the selected palette.
//!
//! The classification is a heuristic over literal fill values, not a
//! semantic read of the vector content - it cannot tell "background" from
//! "foreground" beyond the black/white/other split. That approximation is
//! a known design limitation and part of the contract: anything that is
//! not a recognized black or white spelling maps to `secondary`.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A recolor palette: three roles substituted by fill classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Replaces near-black fills.
    pub primary: String,
    /// Replaces everything that is neither near-black nor near-white.
    pub secondary: String,
    /// Replaces near-white fills.
    pub accent: String,
}

impl Palette {
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            accent: accent.into(),
        }
    }

    /// All three roles present.
    pub fn is_valid(&self) -> bool {
        !self.primary.is_empty() && !self.secondary.is_empty() && !self.accent.is_empty()
    }
}

/// Palette selection for a displayed variant.
///
/// `Original` is the identity sentinel: remapping with it returns the
/// markup unchanged, which keeps every customization resettable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaletteSelection {
    #[default]
    Original,
    Custom(Palette),
}

/// `fill="..."` / `fill='...'` attribute assignments. The leading boundary
/// keeps attributes like `data-fill` untouched.
static FILL_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)(^|\s)fill\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap());

/// Remap every fill attribute in `markup` through the palette.
///
/// Pure and deterministic: identical inputs always produce byte-identical
/// output. `PaletteSelection::Original` is the identity.
pub fn remap(markup: &str, selection: &PaletteSelection) -> String {
    let PaletteSelection::Custom(palette) = selection else {
        return markup.to_string();
    };

    FILL_ATTR
        .replace_all(markup, |caps: &Captures| {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            format!("{}fill=\"{}\"", &caps[1], classify(value, palette))
        })
        .into_owned()
}

/// Three-bucket fill classification, case-insensitive and trimmed.
fn classify<'a>(value: &str, palette: &'a Palette) -> &'a str {
    match value.trim().to_ascii_lowercase().as_str() {
        "#000" | "#000000" | "black" => &palette.primary,
        "#fff" | "#ffffff" | "white" => &palette.accent,
        _ => &palette.secondary,
    }
}

/// Builtin palette table. User-defined `[palettes]` entries shadow these
/// by name.
pub fn builtin_palette(name: &str) -> Option<Palette> {
    let (primary, secondary, accent) = match name {
        "midnight" => ("#1a1a2e", "#0f3460", "#e94560"),
        "forest" => ("#1b4332", "#2d6a4f", "#d8f3dc"),
        "ember" => ("#7f1d1d", "#ea580c", "#fef3c7"),
        "coastal" => ("#0b3d91", "#2e86ab", "#f0f3f5"),
        "slate" => ("#111827", "#6b7280", "#f9fafb"),
        _ => return None,
    };
    Some(Palette::new(primary, secondary, accent))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::new("#111111", "#222222", "#333333")
    }

    #[test]
    fn test_original_is_identity() {
        let markup = "<svg><rect fill=\"#000\"/></svg>";
        assert_eq!(remap(markup, &PaletteSelection::Original), markup);
    }

    #[test]
    fn test_remap_is_deterministic() {
        let markup = "<svg><rect fill=\"#000\"/><circle fill=\"red\"/></svg>";
        let selection = PaletteSelection::Custom(palette());
        assert_eq!(remap(markup, &selection), remap(markup, &selection));
    }

    #[test]
    fn test_classification_exhaustive() {
        let p = palette();
        // near-black -> primary
        for value in ["#000000", "#000", "black", "BLACK", " #000 "] {
            assert_eq!(classify(value, &p), "#111111", "value: {value}");
        }
        // near-white -> accent
        for value in ["#ffffff", "#fff", "white", "White", "#FFF"] {
            assert_eq!(classify(value, &p), "#333333", "value: {value}");
        }
        // everything else -> secondary
        for value in ["#336699", "red", "none", "url(#grad)", "", "rgb(1,2,3)"] {
            assert_eq!(classify(value, &p), "#222222", "value: {value}");
        }
    }

    #[test]
    fn test_remap_substitutes_all_occurrences() {
        let markup = "<svg><rect fill=\"#000\"/><circle fill='white'/><path fill=\"#336699\"/></svg>";
        let out = remap(markup, &PaletteSelection::Custom(palette()));
        assert_eq!(
            out,
            "<svg><rect fill=\"#111111\"/><circle fill=\"#333333\"/><path fill=\"#222222\"/></svg>"
        );
    }

    #[test]
    fn test_data_fill_attribute_untouched() {
        let markup = "<svg data-fill=\"#000\"><rect fill=\"#000\"/></svg>";
        let out = remap(markup, &PaletteSelection::Custom(palette()));
        assert!(out.contains("data-fill=\"#000\""));
        assert!(out.contains("fill=\"#111111\""));
    }

    #[test]
    fn test_builtin_palettes_resolve() {
        assert!(builtin_palette("midnight").is_some());
        assert!(builtin_palette("forest").is_some());
        assert!(builtin_palette("unknown").is_none());
    }
}

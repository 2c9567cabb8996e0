//! Style composition: transform/filter wrapping with named presets.
//!
//! Composition never mutates the sanitized markup. Display output is
//! always recomputed from the retained original, so every combination of
//! settings is reachable and undoable, and reset is a fixed constant
//! rather than "whatever the values were at mount".

use super::recolor::{self, PaletteSelection};

/// Rotation domain, degrees.
pub const ROTATION_RANGE: std::ops::RangeInclusive<i32> = -180..=180;
/// Scale/brightness/contrast domain, percent.
pub const PERCENT_RANGE: std::ops::RangeInclusive<u32> = 50..=150;

/// A named, fixed filter/transform fragment pair.
///
/// The companion transform (when present) is applied *in addition to* the
/// user's explicit scale - e.g. `bold` nudges scale by 1.05x on top.
#[derive(Debug, Clone, Copy)]
pub struct StylePreset {
    pub name: &'static str,
    pub filter: &'static str,
    pub transform: &'static str,
}

/// The fixed preset table. `standard` is the identity.
pub const PRESETS: &[StylePreset] = &[
    StylePreset {
        name: "standard",
        filter: "",
        transform: "",
    },
    StylePreset {
        name: "bold",
        filter: "saturate(1.4) contrast(1.15)",
        transform: "scale(1.05)",
    },
    StylePreset {
        name: "mono",
        filter: "grayscale(1)",
        transform: "",
    },
    StylePreset {
        name: "vintage",
        filter: "sepia(0.35) contrast(0.9) brightness(1.05)",
        transform: "",
    },
    StylePreset {
        name: "neon",
        filter: "saturate(1.8) brightness(1.1)",
        transform: "",
    },
    StylePreset {
        name: "soft",
        filter: "saturate(0.85) brightness(1.08)",
        transform: "",
    },
];

/// Look up a preset by name. Unknown names resolve to `standard`.
pub fn preset(name: &str) -> &'static StylePreset {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .unwrap_or(&PRESETS[0])
}

/// Interactive customization attached to a displayed variant.
///
/// Out-of-domain values are clamped at construction via [`Self::clamped`].
#[derive(Debug, Clone, PartialEq)]
pub struct CustomizationState {
    pub palette: PaletteSelection,
    pub preset: String,
    pub rotation_degrees: i32,
    pub scale_percent: u32,
    pub brightness_percent: u32,
    pub contrast_percent: u32,
}

impl Default for CustomizationState {
    /// The fixed identity constant: original palette, standard preset,
    /// rotation 0, scale/brightness/contrast 100.
    fn default() -> Self {
        Self {
            palette: PaletteSelection::Original,
            preset: "standard".to_string(),
            rotation_degrees: 0,
            scale_percent: 100,
            brightness_percent: 100,
            contrast_percent: 100,
        }
    }
}

impl CustomizationState {
    /// Clamp every numeric field to its domain.
    pub fn clamped(mut self) -> Self {
        self.rotation_degrees = self
            .rotation_degrees
            .clamp(*ROTATION_RANGE.start(), *ROTATION_RANGE.end());
        self.scale_percent = self
            .scale_percent
            .clamp(*PERCENT_RANGE.start(), *PERCENT_RANGE.end());
        self.brightness_percent = self
            .brightness_percent
            .clamp(*PERCENT_RANGE.start(), *PERCENT_RANGE.end());
        self.contrast_percent = self
            .contrast_percent
            .clamp(*PERCENT_RANGE.start(), *PERCENT_RANGE.end());
        self
    }

    /// CSS transform string: user rotation/scale plus the preset's
    /// companion transform.
    pub fn transform_style(&self) -> String {
        let mut transform = format!(
            "rotate({}deg) scale({})",
            self.rotation_degrees,
            format_scale(self.scale_percent)
        );
        let preset = preset(&self.preset);
        if !preset.transform.is_empty() {
            transform.push(' ');
            transform.push_str(preset.transform);
        }
        transform
    }

    /// CSS filter string: user brightness/contrast plus the preset's
    /// filter fragment.
    pub fn filter_style(&self) -> String {
        let mut filter = format!(
            "brightness({}%) contrast({}%)",
            self.brightness_percent, self.contrast_percent
        );
        let preset = preset(&self.preset);
        if !preset.filter.is_empty() {
            filter.push(' ');
            filter.push_str(preset.filter);
        }
        filter
    }
}

/// Percent to CSS scale factor, shortest spelling (100 -> "1", 105 -> "1.05").
fn format_scale(percent: u32) -> String {
    format!("{}", percent as f32 / 100.0)
}

/// Wrap markup in a centering block carrying the composed transform and
/// filter. The input markup is returned embedded, never modified.
pub fn compose(markup: &str, state: &CustomizationState) -> String {
    format!(
        "<div style=\"display:flex;align-items:center;justify-content:center;\
         width:100%;height:100%;transform:{};filter:{};\">{}</div>",
        state.transform_style(),
        state.filter_style(),
        markup
    )
}

/// Full derivation from retained original to display output:
/// recolor first, then compose. The single path the editor uses.
pub fn render_display(sanitized: &str, state: &CustomizationState) -> String {
    compose(&recolor::remap(sanitized, &state.palette), state)
}

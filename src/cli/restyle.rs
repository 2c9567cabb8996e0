//! Restyle command driver.
//!
//! Applies the non-destructive customization path to a saved logo: the
//! input is re-sanitized (pasted provider output is untrusted), then
//! recolored, and optionally wrapped in the composed display container.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::RestyleArgs;
use crate::config::LogoConfig;
use crate::log;
use crate::svg::compose::{self, CustomizationState};
use crate::svg::recolor::{Palette, PaletteSelection, remap};
use crate::svg::sanitize::sanitize;

pub fn run_restyle(input: &Path, args: &RestyleArgs, config: &LogoConfig) -> Result<()> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let sanitized = match sanitize(&raw) {
        Ok(markup) => markup,
        Err(error) => bail!("{}: {error}", input.display()),
    };

    let state = CustomizationState {
        palette: resolve_palette(args, config)?,
        preset: args.preset.clone(),
        rotation_degrees: args.rotate,
        scale_percent: args.scale,
        brightness_percent: args.brightness,
        contrast_percent: args.contrast,
    }
    .clamped();

    let output = if args.wrap {
        compose::render_display(&sanitized, &state)
    } else {
        if has_transform_settings(&state) {
            log!("restyle"; "rotation/scale/filters only apply with --wrap, recoloring only");
        }
        remap(&sanitized, &state.palette)
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("writing {}", path.display()))?;
            log!("restyle"; "{} -> {}", input.display(), path.display());
        }
        None => println!("{output}"),
    }
    Ok(())
}

/// A full custom triple wins; otherwise a named palette; otherwise the
/// original colors stay.
fn resolve_palette(args: &RestyleArgs, config: &LogoConfig) -> Result<PaletteSelection> {
    let custom = [&args.primary, &args.secondary, &args.accent];
    if custom.iter().any(|c| c.is_some()) {
        let [Some(primary), Some(secondary), Some(accent)] = custom else {
            bail!("custom palettes need all of --primary, --secondary and --accent");
        };
        return Ok(PaletteSelection::Custom(Palette::new(
            primary.as_str(),
            secondary.as_str(),
            accent.as_str(),
        )));
    }
    if let Some(name) = &args.palette {
        let palette = config
            .palette(name)
            .ok_or_else(|| anyhow::anyhow!("unknown palette `{name}`"))?;
        return Ok(PaletteSelection::Custom(palette));
    }
    Ok(PaletteSelection::Original)
}

fn has_transform_settings(state: &CustomizationState) -> bool {
    state.rotation_degrees != 0
        || state.scale_percent != 100
        || state.brightness_percent != 100
        || state.contrast_percent != 100
        || state.preset != "standard"
}

//! Export command driver.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::ExportArgs;
use crate::config::LogoConfig;
use crate::export::{ExportFormat, ExportRequest, SizeBucket, download_filename, export};
use crate::log;

pub fn run_export(input: &Path, args: &ExportArgs, config: &LogoConfig) -> Result<()> {
    let markup = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;

    let format: ExportFormat = args
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let (width, height) = dimensions(args, config)?;

    let request = ExportRequest::new(format, width, height)
        .with_jpeg_quality(config.export.jpeg_quality);
    let payload = export(&markup, &request)?;

    let path = match &args.output {
        Some(path) => path.clone(),
        None => {
            let name = download_filename(&markup, format);
            input.parent().map_or_else(|| PathBuf::from(&name), |dir| dir.join(&name))
        }
    };
    fs::write(&path, &payload)
        .with_context(|| format!("writing {}", path.display()))?;

    log!("export"; "{} {}x{} ({} bytes) -> {}",
        format.extension(), width, height, payload.len(), path.display());
    Ok(())
}

/// Custom dimensions when both are given, otherwise the named bucket
/// (CLI, then config).
fn dimensions(args: &ExportArgs, config: &LogoConfig) -> Result<(u32, u32)> {
    match (args.width, args.height) {
        (Some(width), Some(height)) => {
            if width == 0 || height == 0 {
                bail!("export dimensions must be positive");
            }
            Ok((width, height))
        }
        (None, None) => {
            let name = args.size.as_deref().unwrap_or(&config.export.size);
            let bucket: SizeBucket = name.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            Ok((bucket.pixels(), bucket.pixels()))
        }
        _ => bail!("custom sizes need both --width and --height"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ExportArgs {
        ExportArgs {
            format: "png".to_string(),
            size: None,
            width: None,
            height: None,
            output: None,
        }
    }

    #[test]
    fn test_dimensions_default_to_config_bucket() {
        let dims = dimensions(&args(), &LogoConfig::default()).unwrap();
        assert_eq!(dims, (512, 512));
    }

    #[test]
    fn test_dimensions_cli_bucket_wins() {
        let mut sized = args();
        sized.size = Some("large".to_string());
        assert_eq!(dimensions(&sized, &LogoConfig::default()).unwrap(), (1024, 1024));
    }

    #[test]
    fn test_dimensions_custom_pair() {
        let mut custom = args();
        custom.width = Some(300);
        custom.height = Some(120);
        assert_eq!(dimensions(&custom, &LogoConfig::default()).unwrap(), (300, 120));
    }

    #[test]
    fn test_dimensions_reject_partial_pair() {
        let mut partial = args();
        partial.width = Some(300);
        assert!(dimensions(&partial, &LogoConfig::default()).is_err());
    }

    #[test]
    fn test_dimensions_reject_zero() {
        let mut zero = args();
        zero.width = Some(0);
        zero.height = Some(64);
        assert!(dimensions(&zero, &LogoConfig::default()).is_err());
    }
}

//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Logoforge prompt-to-logo CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: logoforge.toml)
    #[arg(short = 'C', long, default_value = "logoforge.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate logo variants from a description
    #[command(visible_alias = "g")]
    Generate {
        /// Natural-language logo description
        prompt: String,

        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Recolor and restyle a saved logo without regenerating
    #[command(visible_alias = "r")]
    Restyle {
        /// Input SVG file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        #[command(flatten)]
        args: RestyleArgs,
    },

    /// Export a logo to png/jpg/svg at a target size
    #[command(visible_alias = "e")]
    Export {
        /// Input SVG file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        #[command(flatten)]
        args: ExportArgs,
    },
}

/// Generate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of variants to generate (default from config)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(usize))]
    pub variants: Option<usize>,

    /// Style hint (e.g. "minimalist", "geometric")
    #[arg(short, long)]
    pub style: Option<String>,

    /// Color scheme hint (e.g. "warm earth tones")
    #[arg(short = 'k', long = "color-scheme")]
    pub color_scheme: Option<String>,

    /// Complexity hint (e.g. "simple", "detailed")
    #[arg(short = 'x', long)]
    pub complexity: Option<String>,

    /// Industry hint (e.g. "coffee shop")
    #[arg(short, long)]
    pub industry: Option<String>,

    /// Output directory for generated variants
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub out: Option<PathBuf>,

    /// Identity passed to the quota gate (default from config)
    #[arg(short, long)]
    pub user: Option<String>,
}

/// Restyle command arguments.
///
/// Rotation/scale/brightness/contrast only exist in the wrapped display
/// markup (`--wrap`); a bare restyle recolors the SVG itself.
#[derive(clap::Args, Debug, Clone)]
pub struct RestyleArgs {
    /// Named palette (builtin or from [palettes] config)
    #[arg(short, long)]
    pub palette: Option<String>,

    /// Custom palette: color replacing near-black fills
    #[arg(long)]
    pub primary: Option<String>,

    /// Custom palette: color replacing other fills
    #[arg(long)]
    pub secondary: Option<String>,

    /// Custom palette: color replacing near-white fills
    #[arg(long)]
    pub accent: Option<String>,

    /// Style preset name (standard, bold, mono, vintage, neon, soft)
    #[arg(short = 'P', long, default_value = "standard")]
    pub preset: String,

    /// Rotation in degrees
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(i32).range(-180..=180))]
    pub rotate: i32,

    /// Scale percent
    #[arg(short = 'z', long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(50..=150))]
    pub scale: u32,

    /// Brightness percent
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(50..=150))]
    pub brightness: u32,

    /// Contrast percent
    #[arg(short = 'c', long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(50..=150))]
    pub contrast: u32,

    /// Emit display markup (centering wrapper with transform/filter)
    /// instead of a bare recolored SVG
    #[arg(short, long)]
    pub wrap: bool,

    /// Write output to file instead of stdout
    #[arg(short = 'o', long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Export command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Target format: svg, png, jpg
    #[arg(short, long, default_value = "png")]
    pub format: String,

    /// Named size bucket: small (256), medium (512), large (1024)
    #[arg(short, long)]
    pub size: Option<String>,

    /// Custom output width in pixels (requires --height)
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Custom output height in pixels (requires --width)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Output path (default: logo-<id>.<ext> next to the input)
    #[arg(short = 'o', long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

//! Logoforge - a prompt-to-logo generation pipeline.

mod cli;
mod config;
mod export;
mod gate;
mod history;
mod logger;
mod pipeline;
mod provider;
mod svg;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::LogoConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = LogoConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Generate { prompt, args } => cli::run_generate(prompt, args, &config),
        Commands::Restyle { input, args } => cli::run_restyle(input, args, &config),
        Commands::Export { input, args } => cli::run_export(input, args, &config),
    }
}

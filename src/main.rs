//! pathprep - path canonicalization CLI.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use pathprep::{
    cli::{self, Cli},
    config::{SiteConfig, init_config},
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    init_config(SiteConfig::load(&cli)?);
    cli::run(&cli)
}

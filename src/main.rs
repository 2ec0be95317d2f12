//! Kulisse - content pipeline for a bilingual blog and theater portfolio.

#![allow(dead_code)]

mod cli;
mod config;
mod content;
mod core;
mod generator;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config),
        Commands::Check { args } => cli::check::check_site(&config, args),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}

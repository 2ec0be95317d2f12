//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Kulisse content pipeline CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: kulisse.toml)
    #[arg(short = 'C', long, default_value = "kulisse.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate content and generate feeds, sitemap and robots.txt
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Validate content without writing artifacts
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Print validated collection metadata as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Exclude draft entries
    #[arg(short, long)]
    pub skip_drafts: bool,

    /// Override the configured site URL
    #[arg(long)]
    pub site_url: Option<String>,

    /// Enable/disable feed generation (overrides config)
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub rss: Option<bool>,

    /// Enable/disable sitemap generation (overrides config)
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Enable/disable robots.txt generation (overrides config)
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub robots: Option<bool>,
}

/// Check command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Report problems without failing the command
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

/// Collections addressable from the query command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCollection {
    Blog,
    Theater,
}

/// Query command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Restrict output to one collection
    #[arg(value_enum)]
    pub collection: Option<QueryCollection>,

    /// Single-line JSON output
    #[arg(long)]
    pub compact: bool,

    /// Write to a file instead of stdout
    #[arg(short = 'O', long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

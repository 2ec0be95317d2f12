//! Site configuration management for `kulisse.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── info       # [site.info]
//! │   ├── i18n       # [site.i18n]
//! │   ├── feed       # [site.feed] (+ [[site.feed.channels]])
//! │   ├── sitemap    # [site.sitemap]
//! │   ├── robots     # [site.robots]
//! │   ├── build      # [build]
//! │   ├── markdown   # [markdown]
//! │   └── images     # [images]
//! ├── error.rs       # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```

pub mod error;
pub mod section;
mod util;

use util::find_config_file;

pub use error::{ConfigDiagnostics, ConfigError, FieldPath};
pub use section::{
    BuildSectionConfig, FeedChannel, FeedConfig, FeedFormat, I18nConfig, ImagesConfig,
    MarkdownConfig, RobotsConfig, SiteInfoConfig, SiteSectionConfig, SitemapConfig,
};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing kulisse.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site configuration (info, i18n, feed, sitemap, robots)
    pub site: SiteSectionConfig,

    /// Build settings (content/output directories)
    pub build: BuildSectionConfig,

    /// Markdown rendering declarations (highlight theme, languages)
    pub markdown: MarkdownConfig,

    /// Cover image handling
    pub images: ImagesConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            build: BuildSectionConfig::default(),
            markdown: MarkdownConfig::default(),
            images: ImagesConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file; the project root
    /// is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        crate::logger::set_verbose(cli.verbose);

        let config_path = match find_config_file(&cli.config) {
            Some(path) => path,
            None => {
                log!(
                    "error";
                    "Config file '{}' not found in this or any parent directory.",
                    cli.config.display()
                );
                std::process::exit(1);
            }
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Finalize configuration after loading: resolve paths against the
    /// project root and apply CLI overrides.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        // CLI path overrides win over config values
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        self.build.content = Self::resolve(&root, &self.build.content);
        self.build.output = Self::resolve(&root, &self.build.output);
        self.images.root = Self::resolve(&root, &self.images.root);
        self.root = root;

        self.apply_command_options(cli);
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        if let Commands::Build { build_args } = &cli.command {
            self.build.skip_drafts = build_args.skip_drafts;

            if let Some(url) = &build_args.site_url {
                self.site.info.url = Some(url.clone());
            }

            Self::update_option(&mut self.site.feed.enable, build_args.rss.as_ref());
            Self::update_option(&mut self.site.sitemap.enable, build_args.sitemap.as_ref());
            Self::update_option(&mut self.site.robots.enable, build_args.robots.as_ref());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve a config path against the project root (absolute paths win).
    fn resolve(root: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Get path relative to the site root (for display).
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Whether any artifact requiring an absolute site URL is enabled.
    fn needs_site_url(&self) -> bool {
        self.site.feed.enable || self.site.sitemap.enable || self.site.robots.enable
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.info.validate(self.needs_site_url(), &mut diag);
        self.site.i18n.validate(&mut diag);
        self.site
            .feed
            .validate(|l| self.site.i18n.is_known(l), &mut diag);
        self.markdown.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site.info]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site.info]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

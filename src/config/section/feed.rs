//! `[site.feed]` configuration.
//!
//! Feeds are declared as channels, each with its own output path and an
//! optional language filter:
//!
//! ```toml
//! [site.feed]
//! enable = true
//!
//! [[site.feed.channels]]
//! path = "index.xml"
//! language = "de"
//!
//! [[site.feed.channels]]
//! path = "rss.xml"
//! language = "en"
//! format = "atom"
//! ```

use crate::config::error::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feed output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0 format (default).
    #[default]
    Rss,
    /// Atom 1.0 format.
    Atom,
}

/// Number of entries a channel keeps (the chronologically newest ones).
const fn default_limit() -> usize {
    25
}

/// A single feed output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedChannel {
    /// Output path relative to the output directory.
    pub path: PathBuf,
    /// rss | atom.
    pub format: FeedFormat,
    /// Restrict to posts in this language; all posts when omitted.
    pub language: Option<String>,
    /// Channel title override (site title when omitted).
    pub title: Option<String>,
    /// Channel description override (site description when omitted).
    pub description: Option<String>,
    /// Keep only the newest N posts.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for FeedChannel {
    fn default() -> Self {
        Self {
            path: "feed.xml".into(),
            format: FeedFormat::Rss,
            language: None,
            title: None,
            description: None,
            limit: default_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Enable feed generation.
    pub enable: bool,
    /// Declared feed outputs. A single default channel when empty.
    pub channels: Vec<FeedChannel>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: false,
            channels: Vec::new(),
        }
    }
}

impl FeedConfig {
    /// Channels to generate; falls back to one default channel so that
    /// `enable = true` alone produces a feed.
    pub fn effective_channels(&self) -> Vec<FeedChannel> {
        if self.channels.is_empty() {
            vec![FeedChannel::default()]
        } else {
            self.channels.clone()
        }
    }

    /// Validate feed settings against the configured languages.
    pub fn validate(&self, known_language: impl Fn(&str) -> bool, diag: &mut ConfigDiagnostics) {
        let mut seen = Vec::new();

        for channel in &self.channels {
            if channel.path.as_os_str().is_empty() {
                diag.error_with_hint(
                    FieldPath::new("site.feed.channels.path"),
                    "channel output path is empty",
                    "set path, e.g.: \"index.xml\"",
                );
            }

            if channel.limit == 0 {
                diag.error(
                    FieldPath::new("site.feed.channels.limit"),
                    format!("limit must be at least 1 for `{}`", channel.path.display()),
                );
            }

            if let Some(language) = &channel.language
                && !known_language(language)
            {
                diag.error(
                    FieldPath::new("site.feed.channels.language"),
                    format!(
                        "channel `{}` filters on unknown language `{language}`",
                        channel.path.display()
                    ),
                );
            }

            if seen.contains(&channel.path) {
                diag.error(
                    FieldPath::new("site.feed.channels.path"),
                    format!("duplicate channel path `{}`", channel.path.display()),
                );
            }
            seen.push(channel.path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(!config.site.feed.enable);
        assert!(config.site.feed.channels.is_empty());

        let channels = config.site.feed.effective_channels();
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].path, PathBuf::from("feed.xml"));
        assert_eq!(channels[0].format, FeedFormat::Rss);
        assert_eq!(channels[0].limit, 25);
        assert!(channels[0].language.is_none());
    }

    #[test]
    fn test_channel_parsing() {
        let config = test_parse_config(
            "[site.feed]\nenable = true\n\n\
             [[site.feed.channels]]\npath = \"index.xml\"\nlanguage = \"de\"\n\n\
             [[site.feed.channels]]\npath = \"rss.xml\"\nlanguage = \"en\"\nformat = \"atom\"\nlimit = 10",
        );
        assert!(config.site.feed.enable);
        let channels = &config.site.feed.channels;
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].language.as_deref(), Some("de"));
        assert_eq!(channels[0].limit, 25);
        assert_eq!(channels[1].format, FeedFormat::Atom);
        assert_eq!(channels[1].limit, 10);
    }

    #[test]
    fn test_validate_rejects_unknown_language() {
        let config = test_parse_config(
            "[[site.feed.channels]]\npath = \"feed.xml\"\nlanguage = \"fr\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config
            .site
            .feed
            .validate(|l| matches!(l, "de" | "en"), &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_rejects_duplicate_paths() {
        let config = test_parse_config(
            "[[site.feed.channels]]\npath = \"feed.xml\"\n\n[[site.feed.channels]]\npath = \"feed.xml\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.site.feed.validate(|_| true, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let config = test_parse_config("[[site.feed.channels]]\npath = \"feed.xml\"\nlimit = 0");
        let mut diag = ConfigDiagnostics::new();
        config.site.feed.validate(|_| true, &mut diag);
        assert!(diag.has_errors());
    }
}

//! `[site.robots]` configuration.
//!
//! Crawler directives for the generated `robots.txt`. The sitemap URL is
//! appended automatically when sitemap generation is enabled.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    /// Enable robots.txt generation.
    pub enable: bool,
    /// Output path for the robots file.
    pub path: PathBuf,
    /// User-agent the directives apply to.
    pub user_agent: String,
    /// Allowed path prefixes.
    pub allow: Vec<String>,
    /// Disallowed path prefixes.
    pub disallow: Vec<String>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enable: false,
            path: "robots.txt".into(),
            user_agent: "*".into(),
            allow: vec!["/".into()],
            disallow: Vec::new(),
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
        let robots = &config.site.robots;
        assert!(!robots.enable);
        assert_eq!(robots.path, PathBuf::from("robots.txt"));
        assert_eq!(robots.user_agent, "*");
        assert_eq!(robots.allow, vec!["/".to_string()]);
        assert!(robots.disallow.is_empty());
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            "[site.robots]\nenable = true\nuser_agent = \"Googlebot\"\ndisallow = [\"/drafts/\"]",
        );
        let robots = &config.site.robots;
        assert!(robots.enable);
        assert_eq!(robots.user_agent, "Googlebot");
        assert_eq!(robots.disallow, vec!["/drafts/".to_string()]);
    }
}

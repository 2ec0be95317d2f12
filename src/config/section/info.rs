//! `[site.info]` configuration.
//!
//! Basic site metadata: title, author, description, canonical URL. The
//! author doubles as the fixed default for blog posts that omit one.

use crate::config::error::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site metadata used for feed channels and link generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Author name, also the default `author` for blog posts.
    pub author: String,

    /// Author email (RSS item author format wants one).
    pub email: String,

    /// Site description.
    pub description: String,

    /// Canonical site URL (e.g., "https://mwellner.de").
    pub url: Option<String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            email: String::new(),
            description: String::new(),
            url: None,
        }
    }
}

impl SiteInfoConfig {
    /// Base URL without trailing slash, empty when unset.
    pub fn base_url(&self) -> &str {
        self.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }

    /// Validate site metadata.
    ///
    /// # Checks
    /// - If any absolute-URL artifact (feed, sitemap, robots) is enabled,
    ///   `url` must be set
    /// - `url` must be a valid http(s) URL with a host
    pub fn validate(&self, needs_url: bool, diag: &mut ConfigDiagnostics) {
        const URL_FIELD: FieldPath = FieldPath::new("site.info.url");

        if needs_url && self.url.is_none() {
            diag.error_with_hint(
                URL_FIELD,
                "feed, sitemap or robots generation is enabled but site.info.url is not configured",
                "set site.info.url, e.g.: \"https://example.com\"",
            );
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            URL_FIELD,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            URL_FIELD,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        URL_FIELD,
                        format!("invalid URL: {e}"),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let info = SiteInfoConfig {
            url: Some("https://example.com/".to_string()),
            ..Default::default()
        };
        assert_eq!(info.base_url(), "https://example.com");
    }

    #[test]
    fn test_base_url_empty_when_unset() {
        assert_eq!(SiteInfoConfig::default().base_url(), "");
    }

    #[test]
    fn test_validate_requires_url_for_artifacts() {
        let info = SiteInfoConfig::default();
        let mut diag = ConfigDiagnostics::new();
        info.validate(true, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let info = SiteInfoConfig {
            url: Some("ftp://example.com".to_string()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(false, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_accepts_https() {
        let info = SiteInfoConfig {
            url: Some("https://mwellner.de".to_string()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(true, &mut diag);
        assert!(!diag.has_errors());
    }
}

//! `[site.i18n]` configuration.
//!
//! The site publishes in several languages with a URL convention where
//! the default language lives at the root and every other language is
//! nested under its code (`/en/...`). The `locales` table maps language
//! codes to the region-qualified locales used in feed `<language>` tags
//! and sitemap `hreflang` attributes.

use crate::config::error::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Language served unprefixed at the site root.
    pub default_language: String,

    /// All languages content may declare.
    pub languages: Vec<String>,

    /// Language code -> locale (e.g. "de" -> "de-DE"). Languages missing
    /// here fall back to their bare code.
    pub locales: BTreeMap<String, String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: "de".into(),
            languages: vec!["de".into(), "en".into()],
            locales: BTreeMap::from([
                ("de".to_string(), "de-DE".to_string()),
                ("en".to_string(), "en-US".to_string()),
            ]),
        }
    }
}

impl I18nConfig {
    /// Whether `language` is one of the configured site languages.
    pub fn is_known(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    /// URL prefix for a language: empty for the default, `"{code}/"`
    /// otherwise.
    pub fn url_prefix(&self, language: &str) -> String {
        if language == self.default_language {
            String::new()
        } else {
            format!("{language}/")
        }
    }

    /// Region-qualified locale for a language (`"de"` -> `"de-DE"`),
    /// falling back to the bare code.
    pub fn locale<'a>(&'a self, language: &'a str) -> &'a str {
        self.locales
            .get(language)
            .map(String::as_str)
            .unwrap_or(language)
    }

    /// Validate i18n settings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.languages.is_empty() {
            diag.error(
                FieldPath::new("site.i18n.languages"),
                "at least one language is required",
            );
        }

        if !self.is_known(&self.default_language) {
            diag.error_with_hint(
                FieldPath::new("site.i18n.default_language"),
                format!(
                    "default language `{}` is not in site.i18n.languages",
                    self.default_language
                ),
                format!("add \"{}\" to site.i18n.languages", self.default_language),
            );
        }

        for code in self.locales.keys() {
            if !self.is_known(code) {
                diag.error(
                    FieldPath::new("site.i18n.locales"),
                    format!("locale mapping for unknown language `{code}`"),
                );
            }
        }
    }
}

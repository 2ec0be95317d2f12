//! `[markdown]` configuration.
//!
//! Declarative rendering options consumed by the downstream page layer:
//! syntax-highlighting theme and the languages fenced code blocks may
//! use, plus smart punctuation. The pipeline itself only validates and
//! reports these; it renders no pages.

use crate::config::error::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Syntax-highlighting theme for code blocks.
    pub highlight_theme: String,
    /// Languages enabled for fenced code blocks; empty means all.
    pub highlight_languages: Vec<String>,
    /// Typographic quotes and dashes.
    pub smart_punctuation: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            highlight_theme: "github-dark".into(),
            highlight_languages: Vec::new(),
            smart_punctuation: true,
        }
    }
}

impl MarkdownConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.highlight_theme.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::new("markdown.highlight_theme"),
                "highlight theme must not be empty",
                "use a theme name like \"github-dark\"",
            );
        }

        for language in &self.highlight_languages {
            if language.trim().is_empty() {
                diag.error(
                    FieldPath::new("markdown.highlight_languages"),
                    "language entries must not be empty",
                );
            }
        }
    }
}

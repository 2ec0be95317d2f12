//! `[build]` section configuration.
//!
//! ```toml
//! [build]
//! content = "content"   # collection directories live here (blog/, theater/)
//! output = "public"     # generated artifacts land here
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content source directory (collection subdirectories).
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Skip draft entries during build (CLI only).
    #[serde(skip)]
    pub skip_drafts: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            skip_drafts: false,
        }
    }
}

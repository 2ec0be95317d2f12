//! `[images]` configuration.
//!
//! Cover images referenced with a site-absolute `src` (e.g.
//! `/images/faust.jpg`) resolve under `root`; relative `src` resolves
//! next to the entry's file. When probing is enabled, entries without an
//! explicit aspect ratio get one derived from the actual pixel size.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Probe image files to derive missing aspect ratios.
    pub enable: bool,
    /// Directory that site-absolute image paths resolve under.
    pub root: PathBuf,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            enable: true,
            root: "assets".into(),
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
        assert!(config.images.enable);
        assert_eq!(config.images.root, PathBuf::from("assets"));
    }

    #[test]
    fn test_disable() {
        let config = test_parse_config("[images]\nenable = false\nroot = \"static\"");
        assert!(!config.images.enable);
        assert_eq!(config.images.root, PathBuf::from("static"));
    }
}

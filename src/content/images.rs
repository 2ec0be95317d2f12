//! Image references in front-matter and aspect-ratio derivation.

use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An image reference from front-matter (`cover`, `images` entries).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    /// Site-absolute (`/images/...`) or entry-relative source path.
    pub src: String,
    /// Alternative text.
    pub alt: String,
    /// Width:height ratio, e.g. "3:2". Derived from the file when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
}

impl ImageRef {
    /// Resolve the source path to a file on disk.
    ///
    /// Site-absolute paths resolve under `[images].root`, relative paths
    /// next to the entry's file. Remote URLs resolve to `None`.
    pub fn resolve(&self, entry_dir: &Path, config: &SiteConfig) -> Option<PathBuf> {
        if self.src.contains("://") {
            return None;
        }

        if let Some(rooted) = self.src.strip_prefix('/') {
            Some(config.images.root.join(rooted))
        } else {
            Some(entry_dir.join(&self.src))
        }
    }

    /// Fill in a missing aspect ratio from the actual image dimensions.
    ///
    /// Unreadable or missing files leave the ratio unset; `kulisse check`
    /// reports those separately.
    pub fn enrich(&mut self, entry_dir: &Path, config: &SiteConfig) {
        if self.aspect_ratio.is_some() || !config.images.enable {
            return;
        }

        if let Some(path) = self.resolve(entry_dir, config)
            && let Some(ratio) = probe_aspect_ratio(&path)
        {
            self.aspect_ratio = Some(ratio);
        }
    }
}

/// Read image dimensions (header only) and reduce to a `W:H` ratio.
pub fn probe_aspect_ratio(path: &Path) -> Option<String> {
    let (width, height) = image::image_dimensions(path).ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    let divisor = gcd(width, height);
    Some(format!("{}:{}", width / divisor, height / divisor))
}

const fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(1920, 1080), 120);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(10, 0), 10);
    }

    #[test]
    fn test_resolve_site_absolute() {
        let config = crate::config::test_parse_config("[images]\nroot = \"assets\"");
        let image = ImageRef {
            src: "/images/faust.jpg".into(),
            alt: "Faust".into(),
            aspect_ratio: None,
        };
        assert_eq!(
            image.resolve(Path::new("content/blog"), &config),
            Some(PathBuf::from("assets/images/faust.jpg"))
        );
    }

    #[test]
    fn test_resolve_entry_relative() {
        let config = crate::config::test_parse_config("");
        let image = ImageRef {
            src: "cover.png".into(),
            alt: "cover".into(),
            aspect_ratio: None,
        };
        assert_eq!(
            image.resolve(Path::new("content/theater"), &config),
            Some(PathBuf::from("content/theater/cover.png"))
        );
    }

    #[test]
    fn test_resolve_remote_url() {
        let config = crate::config::test_parse_config("");
        let image = ImageRef {
            src: "https://example.com/pic.jpg".into(),
            alt: "remote".into(),
            aspect_ratio: None,
        };
        assert_eq!(image.resolve(Path::new("content"), &config), None);
    }

    #[test]
    fn test_enrich_keeps_explicit_ratio() {
        let config = crate::config::test_parse_config("");
        let mut image = ImageRef {
            src: "missing.png".into(),
            alt: "x".into(),
            aspect_ratio: Some("3:2".into()),
        };
        image.enrich(Path::new("content/blog"), &config);
        assert_eq!(image.aspect_ratio.as_deref(), Some("3:2"));
    }

    #[test]
    fn test_enrich_missing_file_leaves_none() {
        let config = crate::config::test_parse_config("");
        let mut image = ImageRef {
            src: "definitely-missing.png".into(),
            alt: "x".into(),
            aspect_ratio: None,
        };
        image.enrich(Path::new("content/blog"), &config);
        assert!(image.aspect_ratio.is_none());
    }

    #[test]
    fn test_probe_aspect_ratio_real_png() {
        // Minimal 2x1 PNG written through the image crate itself
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probe.png");
        let buf = image::RgbImage::new(2, 1);
        buf.save(&path).unwrap();

        assert_eq!(probe_aspect_ratio(&path), Some("2:1".to_string()));
    }
}

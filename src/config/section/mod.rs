//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "Mathias Wellner"
//! description = "Persönliche Webseite"
//! author = "Mathias Wellner"
//! url = "https://mwellner.de"
//!
//! [site.i18n]
//! default_language = "de"
//! languages = ["de", "en"]
//!
//! [site.feed]
//! enable = true
//!
//! [[site.feed.channels]]
//! path = "index.xml"
//! language = "de"
//!
//! [site.sitemap]
//! enable = true
//!
//! [site.robots]
//! enable = true
//! ```

mod build;
mod feed;
mod i18n;
mod images;
mod info;
mod markdown;
mod robots;
mod sitemap;

pub use build::BuildSectionConfig;
pub use feed::{FeedChannel, FeedConfig, FeedFormat};
pub use i18n::I18nConfig;
pub use images::ImagesConfig;
pub use info::SiteInfoConfig;
pub use markdown::MarkdownConfig;
pub use robots::RobotsConfig;
pub use sitemap::SitemapConfig;

use serde::{Deserialize, Serialize};

/// Site section configuration containing metadata and artifact toggles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site metadata (title, author, description, url).
    pub info: SiteInfoConfig,

    /// Language and locale settings.
    pub i18n: I18nConfig,

    /// Feed generation settings (RSS/Atom channels).
    pub feed: FeedConfig,

    /// Sitemap generation settings.
    pub sitemap: SitemapConfig,

    /// robots.txt generation settings.
    pub robots: RobotsConfig,
}

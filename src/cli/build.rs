//! Build command implementation.

use anyhow::Result;
use std::fs;

use crate::config::SiteConfig;
use crate::content::loader;
use crate::generator::{feed::build_feeds, robots::build_robots, sitemap::build_sitemap};
use crate::log;
use crate::utils::plural_count;

/// Load and validate content, then generate all enabled artifacts.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let store = loader::load(config)?;

    crate::debug!(
        "build";
        "markdown: theme {}, {} highlight languages",
        config.markdown.highlight_theme,
        if config.markdown.highlight_languages.is_empty() {
            "all".to_string()
        } else {
            config.markdown.highlight_languages.len().to_string()
        }
    );

    fs::create_dir_all(&config.build.output)?;

    // Feeds and sitemap are independent, generate them in parallel
    let (feed_result, sitemap_result) = rayon::join(
        || build_feeds(&store, config),
        || build_sitemap(&store, config),
    );
    feed_result?;
    sitemap_result?;

    build_robots(config)?;

    log!(
        "build";
        "{} published from {}",
        plural_count(store.blog.len() + store.theater.len(), "entry"),
        config.build.content.display()
    );
    Ok(())
}

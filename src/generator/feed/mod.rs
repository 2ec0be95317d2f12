//! Feed generation (RSS, Atom).
//!
//! Every configured channel becomes one feed document:
//!
//! - **RSS 2.0**: the default format
//! - **Atom 1.0**: per channel via `format = "atom"`

mod atom;
mod common;
mod rss;

use crate::config::{FeedFormat, SiteConfig};
use crate::content::ContentStore;
use anyhow::Result;

/// Build all enabled feed channels.
pub fn build_feeds(store: &ContentStore, config: &SiteConfig) -> Result<()> {
    if !config.site.feed.enable {
        return Ok(());
    }

    for channel in config.site.feed.effective_channels() {
        let entries = common::select_entries(store, &channel);
        let (xml, module) = match channel.format {
            FeedFormat::Rss => (rss::render(&channel, &entries, config)?, "rss"),
            FeedFormat::Atom => (atom::render(&channel, &entries, config)?, "atom"),
        };
        super::write_artifact(config, &channel.path, &xml, module)?;
    }

    Ok(())
}

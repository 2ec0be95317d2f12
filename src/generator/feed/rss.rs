//! RSS 2.0 channel rendering.

use super::common::{ChannelMeta, FeedEntry, channel_meta};
use crate::config::{FeedChannel, SiteConfig};
use anyhow::{Result, anyhow};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::sync::LazyLock;

/// Render a channel's entries as an RSS 2.0 document.
pub fn render(channel: &FeedChannel, entries: &[FeedEntry], config: &SiteConfig) -> Result<String> {
    let meta = channel_meta(channel, config);

    let items: Vec<rss::Item> = entries
        .iter()
        .map(|entry| entry_to_rss_item(entry, &meta, config))
        .collect();

    let rss_channel = ChannelBuilder::default()
        .title(&meta.title)
        .link(&meta.base_url)
        .description(&meta.description)
        .language(Some(meta.locale.to_lowercase()))
        .generator("kulisse".to_string())
        .items(items)
        .build();

    rss_channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(rss_channel.to_string())
}

fn entry_to_rss_item(entry: &FeedEntry, meta: &ChannelMeta, config: &SiteConfig) -> rss::Item {
    let link = entry.permalink.to_absolute(&meta.base_url);

    ItemBuilder::default()
        .title(entry.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        // Always present: a missing description is an empty string
        .description(Some(entry.description.clone()))
        .pub_date(entry.date.to_rfc2822())
        .author(normalize_rss_author(entry.author.as_ref(), config))
        .build()
}

/// Normalize author field to RSS format: "email (Name)"
fn normalize_rss_author(author: Option<&String>, config: &SiteConfig) -> Option<String> {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    let author = author?;

    // Already valid "email (Name)" form
    if RE_VALID_AUTHOR.is_match(author) {
        return Some(author.clone());
    }

    let info = &config.site.info;
    if info.email.is_empty() {
        return None;
    }
    Some(format!("{} ({})", info.email, author))
}

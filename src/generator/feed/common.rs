//! Feed entry selection and channel metadata shared by RSS and Atom.

use crate::config::{FeedChannel, SiteConfig};
use crate::content::ContentStore;
use crate::core::UrlPath;
use crate::utils::date::DateTimeUtc;

/// A blog post projected for feed inclusion.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub title: String,
    pub date: DateTimeUtc,
    pub permalink: UrlPath,
    /// Always a string; a post without a description degrades to `""`.
    pub description: String,
    pub author: Option<String>,
}

/// Select a channel's entries: optional language filter, sort by date
/// ascending, keep the chronologically newest `limit` posts. The result
/// stays in ascending date order.
pub fn select_entries(store: &ContentStore, channel: &FeedChannel) -> Vec<FeedEntry> {
    let mut posts = store.posts_by_date();

    if let Some(language) = &channel.language {
        posts.retain(|post| post.data.language == *language);
    }

    let skip = posts.len().saturating_sub(channel.limit);
    posts[skip..]
        .iter()
        .map(|post| FeedEntry {
            title: post.data.title.clone(),
            date: post.data.pub_date,
            permalink: post.permalink.clone(),
            description: post.data.description.clone().unwrap_or_default(),
            author: post.data.author.clone(),
        })
        .collect()
}

/// Channel metadata resolved against the site config.
#[derive(Debug)]
pub struct ChannelMeta {
    pub title: String,
    pub description: String,
    pub base_url: String,
    /// Absolute URL of the feed document itself.
    pub self_url: String,
    /// Region-qualified locale for the channel's language tag.
    pub locale: String,
}

pub fn channel_meta(channel: &FeedChannel, config: &SiteConfig) -> ChannelMeta {
    let info = &config.site.info;
    let i18n = &config.site.i18n;

    let language = channel
        .language
        .as_deref()
        .unwrap_or(&i18n.default_language);

    ChannelMeta {
        title: channel.title.clone().unwrap_or_else(|| info.title.clone()),
        description: channel
            .description
            .clone()
            .unwrap_or_else(|| info.description.clone()),
        base_url: info.base_url().to_string(),
        self_url: format!("{}/{}", info.base_url(), channel.path.display()),
        locale: i18n.locale(language).to_string(),
    }
}

//! Atom 1.0 feed rendering.

use super::common::{ChannelMeta, FeedEntry, channel_meta};
use crate::config::{FeedChannel, SiteConfig};
use anyhow::Result;
use atom_syndication::{
    Entry, EntryBuilder, Feed, FeedBuilder, FixedDateTime, GeneratorBuilder, Link, LinkBuilder,
    Person, PersonBuilder, Text,
};

/// Render a channel's entries as an Atom 1.0 document.
pub fn render(channel: &FeedChannel, entries: &[FeedEntry], config: &SiteConfig) -> Result<String> {
    let meta = channel_meta(channel, config);

    let atom_entries: Vec<Entry> = entries
        .iter()
        .map(|entry| entry_to_atom_entry(entry, &meta))
        .collect();

    // Feed updated = newest entry date (entries are date-ascending)
    let updated = parse_fixed(
        &entries
            .last()
            .map(|e| e.date.to_rfc3339())
            .unwrap_or_else(|| "1970-01-01T00:00:00Z".to_string()),
    );

    let info = &config.site.info;
    let author: Person = PersonBuilder::default()
        .name(info.author.clone())
        .email((!info.email.is_empty()).then(|| info.email.clone()))
        .build();

    let self_link: Link = LinkBuilder::default()
        .href(&meta.self_url)
        .rel("self".to_string())
        .mime_type(Some("application/atom+xml".to_string()))
        .build();
    let alternate_link: Link = LinkBuilder::default()
        .href(&meta.base_url)
        .rel("alternate".to_string())
        .build();

    let feed: Feed = FeedBuilder::default()
        .title(Text::plain(meta.title.clone()))
        .id(&meta.base_url)
        .updated(updated)
        .authors(vec![author])
        .links(vec![self_link, alternate_link])
        .subtitle(Some(Text::plain(meta.description.clone())))
        .generator(Some(
            GeneratorBuilder::default()
                .value("kulisse")
                .uri(Some("https://github.com/mwellner/kulisse".to_string()))
                .build(),
        ))
        .lang(Some(meta.locale.clone()))
        .entries(atom_entries)
        .build();

    Ok(feed.to_string())
}

fn entry_to_atom_entry(entry: &FeedEntry, meta: &ChannelMeta) -> Entry {
    let link = entry.permalink.to_absolute(&meta.base_url);

    let entry_link: Link = LinkBuilder::default()
        .href(&link)
        .rel("alternate".to_string())
        .build();

    let authors: Vec<Person> = entry
        .author
        .as_ref()
        .map(|name| vec![PersonBuilder::default().name(name.clone()).build()])
        .unwrap_or_default();

    EntryBuilder::default()
        .title(Text::plain(entry.title.clone()))
        .id(&link)
        .updated(parse_fixed(&entry.date.to_rfc3339()))
        .links(vec![entry_link])
        // Empty string when the post has no description, never absent
        .summary(Some(Text::plain(entry.description.clone())))
        .authors(authors)
        .build()
}

fn parse_fixed(rfc3339: &str) -> FixedDateTime {
    rfc3339.parse().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::core::UrlPath;
    use crate::utils::date::DateTimeUtc;

    fn make_config() -> SiteConfig {
        test_parse_config(
            "author = \"Mathias Wellner\"\nurl = \"https://mwellner.de\"",
        )
    }

    fn make_entry(slug: &str, date: &str) -> FeedEntry {
        FeedEntry {
            title: slug.to_uppercase(),
            date: DateTimeUtc::parse(date).unwrap(),
            permalink: UrlPath::from_page(&format!("/{slug}/")),
            description: String::new(),
            author: Some("Mathias Wellner".to_string()),
        }
    }

    #[test]
    fn test_entry_fields() {
        let config = make_config();
        let meta = channel_meta(&FeedChannel::default(), &config);
        let entry = entry_to_atom_entry(&make_entry("a", "2024-01-15"), &meta);

        assert_eq!(entry.title().as_str(), "A");
        assert_eq!(entry.id(), "https://mwellner.de/a/");
        assert!(entry.updated().to_rfc3339().starts_with("2024-01-15"));
    }

    #[test]
    fn test_feed_updated_is_newest_entry() {
        let config = make_config();
        let entries = vec![make_entry("a", "2024-01-01"), make_entry("b", "2024-02-01")];
        let xml = render(&FeedChannel::default(), &entries, &config).unwrap();
        assert!(xml.contains("2024-02-01"));
        assert!(xml.contains("<title>Test</title>"));
    }

    #[test]
    fn test_empty_feed_renders() {
        let config = make_config();
        let xml = render(&FeedChannel::default(), &[], &config).unwrap();
        assert!(xml.contains("<feed"));
        assert!(!xml.contains("<entry>"));
    }

    #[test]
    fn test_self_link_points_to_channel_path() {
        let config = make_config();
        let channel = FeedChannel {
            path: "atom.xml".into(),
            ..Default::default()
        };
        let xml = render(&channel, &[], &config).unwrap();
        assert!(xml.contains("https://mwellner.de/atom.xml"));
    }
}

//! Blog post schema.
//!
//! Front-matter shape (camelCase keys, matching the authored files):
//!
//! ```yaml
//! title: Ein neuer Anfang
//! description: Warum diese Seite umzieht
//! tags: [meta, web]
//! cover:
//!   src: /images/anfang.jpg
//!   alt: Leere Bühne
//!   aspectRatio: "3:2"
//! pubDate: 2024-01-01
//! language: de
//! ```

use super::images::ImageRef;
use crate::utils::date::DateTimeUtc;
use serde::{Deserialize, Serialize};

/// Deserialize tags, treating `null` as empty list
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// A validated blog post.
///
/// | Field         | Type              | Required | Notes                       |
/// |---------------|-------------------|----------|-----------------------------|
/// | `title`       | text              | yes      | non-empty (loader-checked)  |
/// | `description` | text              | no       | feeds fall back to `""`     |
/// | `tags`        | list of text      | no       | `null` becomes empty        |
/// | `cover`       | image reference   | no       |                             |
/// | `pubDate`     | date              | yes      | `YYYY-MM-DD` or RFC 3339    |
/// | `language`    | text              | yes      | must be a configured language |
/// | `author`      | text              | no       | defaults to `site.info.author` |
/// | `draft`       | bool              | no       | excluded with `--skip-drafts` |
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<ImageRef>,
    pub pub_date: DateTimeUtc,
    pub language: String,
    /// Filled from `site.info.author` during load when omitted.
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub draft: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::frontmatter;

    const FULL: &str = "\
title: Ein neuer Anfang
description: Warum diese Seite umzieht
tags: [meta, web]
cover:
  src: /images/anfang.jpg
  alt: Leere Bühne
  aspectRatio: \"3:2\"
pubDate: 2024-01-01
language: de
";

    #[test]
    fn test_full_post_parses() {
        let post: BlogPost = frontmatter::parse(FULL).unwrap();
        assert_eq!(post.title, "Ein neuer Anfang");
        assert_eq!(post.tags, vec!["meta", "web"]);
        assert_eq!(post.pub_date, DateTimeUtc::from_ymd(2024, 1, 1));
        assert_eq!(post.language, "de");
        assert!(!post.draft);

        let cover = post.cover.unwrap();
        assert_eq!(cover.src, "/images/anfang.jpg");
        assert_eq!(cover.aspect_ratio.as_deref(), Some("3:2"));
    }

    #[test]
    fn test_minimal_post_parses() {
        let post: BlogPost =
            frontmatter::parse("title: Hi\npubDate: 2024-06-01\nlanguage: en\ntags: []").unwrap();
        assert!(post.description.is_none());
        assert!(post.cover.is_none());
        assert!(post.author.is_none());
    }

    #[test]
    fn test_null_tags_become_empty() {
        let post: BlogPost =
            frontmatter::parse("title: Hi\npubDate: 2024-06-01\nlanguage: en\ntags:").unwrap();
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_missing_pub_date_rejected() {
        let err = frontmatter::parse::<BlogPost>("title: Hi\nlanguage: en").unwrap_err();
        assert!(err.to_string().contains("pubDate"));
    }

    #[test]
    fn test_unparseable_date_rejected() {
        let err = frontmatter::parse::<BlogPost>(
            "title: Hi\npubDate: sometime soon\nlanguage: en",
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        // tags as a scalar instead of a sequence
        let err = frontmatter::parse::<BlogPost>(
            "title: Hi\npubDate: 2024-06-01\nlanguage: en\ntags: 42",
        )
        .unwrap_err();
        assert!(err.to_string().contains("tags"));
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        // Authors may carry fields the pipeline does not model; those
        // must not fail validation
        let post: BlogPost = frontmatter::parse(
            "title: Hi\npubDate: 2024-06-01\nlanguage: de\ncategory: travel",
        )
        .unwrap();
        assert_eq!(post.title, "Hi");
    }

    #[test]
    fn test_rfc3339_pub_date() {
        let post: BlogPost =
            frontmatter::parse("title: Hi\npubDate: 2024-06-01T08:30:00Z\nlanguage: de").unwrap();
        assert_eq!(post.pub_date.hour, 8);
    }
}

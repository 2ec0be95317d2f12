//! In-memory store for validated content entries.
//!
//! Built once per run by the loader, then queried by the generators and
//! the check/query commands. Entries are immutable after load.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::blog::BlogPost;
use super::error::ContentError;
use super::theater::TheaterCredit;
use crate::core::UrlPath;
use crate::utils::date::DateTimeUtc;

/// A content entry combined with its derived addressing.
///
/// Serializes with `permalink`, `slug` and `source` as top-level fields
/// and the schema data flattened (the `query` output format).
#[derive(Debug, Clone, Serialize)]
pub struct Entry<T> {
    pub permalink: UrlPath,
    pub slug: String,
    pub source: PathBuf,
    /// Markdown body (used by `check` for link validation).
    #[serde(skip)]
    pub body: String,
    #[serde(flatten)]
    pub data: T,
}

/// All validated content, grouped by collection.
#[derive(Debug, Default, Serialize)]
pub struct ContentStore {
    pub blog: Vec<Entry<BlogPost>>,
    pub theater: Vec<Entry<TheaterCredit>>,
    /// Permalink -> source file, for conflict detection.
    #[serde(skip)]
    permalinks: FxHashMap<UrlPath, PathBuf>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a blog post, rejecting permalink collisions.
    pub fn insert_post(&mut self, entry: Entry<BlogPost>) -> Result<(), ContentError> {
        self.claim_permalink(&entry.permalink, &entry.source)?;
        self.blog.push(entry);
        Ok(())
    }

    /// Insert a theater credit, rejecting permalink collisions.
    pub fn insert_credit(&mut self, entry: Entry<TheaterCredit>) -> Result<(), ContentError> {
        self.claim_permalink(&entry.permalink, &entry.source)?;
        self.theater.push(entry);
        Ok(())
    }

    fn claim_permalink(&mut self, permalink: &UrlPath, source: &Path) -> Result<(), ContentError> {
        if let Some(first) = self.permalinks.get(permalink) {
            return Err(ContentError::DuplicatePermalink {
                permalink: permalink.as_str().to_string(),
                first: first.clone(),
                second: source.to_path_buf(),
            });
        }
        self.permalinks
            .insert(permalink.clone(), source.to_path_buf());
        Ok(())
    }

    /// Blog posts sorted by publication date ascending (slug breaks ties).
    pub fn posts_by_date(&self) -> Vec<&Entry<BlogPost>> {
        let mut posts: Vec<_> = self.blog.iter().collect();
        posts.sort_by(|a, b| {
            a.data
                .pub_date
                .cmp(&b.data.pub_date)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        posts
    }

    /// Theater credits sorted by date ascending.
    pub fn credits_by_date(&self) -> Vec<&Entry<TheaterCredit>> {
        let mut credits: Vec<_> = self.theater.iter().collect();
        credits.sort_by(|a, b| a.data.date.cmp(&b.data.date).then_with(|| a.slug.cmp(&b.slug)));
        credits
    }

    /// Every permalink with the entry's date (sitemap input), blog first,
    /// each group date-ascending.
    pub fn pages(&self) -> Vec<(&UrlPath, DateTimeUtc, &str)> {
        let mut pages = Vec::with_capacity(self.blog.len() + self.theater.len());
        for post in self.posts_by_date() {
            pages.push((&post.permalink, post.data.pub_date, post.data.language.as_str()));
        }
        for credit in self.credits_by_date() {
            pages.push((&credit.permalink, credit.data.date, ""));
        }
        pages
    }

    /// Whether `target` (a site-root link, trailing slash optional) is a
    /// known permalink.
    pub fn resolves(&self, target: &str) -> bool {
        self.permalinks
            .keys()
            .any(|p| p.matches_ignoring_trailing_slash(target))
    }

    pub fn is_empty(&self) -> bool {
        self.blog.is_empty() && self.theater.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Minimal blog entry for store/generator tests.
    pub fn make_post(slug: &str, date: &str, language: &str) -> Entry<BlogPost> {
        let permalink = if language == "en" {
            UrlPath::from_page(&format!("/en/{slug}/"))
        } else {
            UrlPath::from_page(&format!("/{slug}/"))
        };
        Entry {
            permalink,
            slug: slug.to_string(),
            source: PathBuf::from(format!("content/blog/{slug}.md")),
            body: String::new(),
            data: BlogPost {
                title: slug.to_uppercase(),
                description: None,
                tags: Vec::new(),
                cover: None,
                pub_date: DateTimeUtc::parse(date).expect("test date"),
                language: language.to_string(),
                author: Some("Mathias Wellner".to_string()),
                draft: false,
            },
        }
    }

    pub fn make_credit(slug: &str, date: &str) -> Entry<TheaterCredit> {
        use crate::content::images::ImageRef;
        Entry {
            permalink: UrlPath::from_page(&format!("/theater/{slug}/")),
            slug: slug.to_string(),
            source: PathBuf::from(format!("content/theater/{slug}.md")),
            body: String::new(),
            data: TheaterCredit {
                title: slug.to_uppercase(),
                author: "Autor".into(),
                location: "Stadttheater".into(),
                date: DateTimeUtc::parse(date).expect("test date"),
                director: "D".into(),
                producer: "P".into(),
                cover: ImageRef {
                    src: "cover.jpg".into(),
                    alt: "cover".into(),
                    aspect_ratio: None,
                },
                images: Vec::new(),
                roles: Vec::new(),
            },
        }
    }
}

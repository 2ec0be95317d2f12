//! Content loading: walk collection directories, validate front-matter,
//! derive addressing, enrich covers.
//!
//! Loading is the only place entries are constructed; everything after
//! queries the immutable [`ContentStore`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use jwalk::WalkDir;
use rayon::prelude::*;

use super::blog::BlogPost;
use super::error::ContentError;
use super::frontmatter;
use super::store::{ContentStore, Entry};
use super::theater::{THEATER_BASE, TheaterCredit};
use crate::config::SiteConfig;
use crate::core::UrlPath;
use crate::utils::{plural_count, slug::slugify};
use crate::{debug, log};

/// Load and validate both collections.
pub fn load(config: &SiteConfig) -> Result<ContentStore> {
    let blog_files = collect_entry_files(&config.build.content.join("blog"));
    let theater_files = collect_entry_files(&config.build.content.join(THEATER_BASE));

    // Entries parse in parallel; order is restored by the sorted walk.
    let posts = blog_files
        .par_iter()
        .map(|file| parse_post(file, config))
        .collect::<Result<Vec<_>, _>>()?;
    let credits = theater_files
        .par_iter()
        .map(|file| parse_credit(file, config))
        .collect::<Result<Vec<_>, _>>()?;

    let mut store = ContentStore::new();
    let mut drafts = 0usize;

    for post in posts {
        match post {
            Some(entry) => store.insert_post(entry)?,
            None => drafts += 1,
        }
    }
    for credit in credits {
        store.insert_credit(credit)?;
    }

    if drafts > 0 {
        debug!("content"; "skipped {}", plural_count(drafts, "draft"));
    }
    log!(
        "content";
        "loaded {}, {}",
        plural_count(store.blog.len(), "blog post"),
        plural_count(store.theater.len(), "theater credit")
    );

    Ok(store)
}

/// Collect entry files (`.md`, `.mdx`) under a collection directory.
///
/// A missing directory is an empty collection, not an error.
fn collect_entry_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        debug!("content"; "no collection directory at {}", dir.display());
        return Vec::new();
    }

    WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && matches!(
                    path.extension().and_then(|ext| ext.to_str()),
                    Some("md" | "mdx")
                )
        })
        .collect()
}

/// Read a file and split off its front-matter block.
fn read_parts(
    file: &Path,
    collection: &'static str,
) -> Result<(String, String), ContentError> {
    let content =
        fs::read_to_string(file).map_err(|err| ContentError::Io(file.to_path_buf(), err))?;

    match frontmatter::split(&content) {
        Some((yaml, body)) => Ok((yaml.to_string(), body.to_string())),
        None => Err(ContentError::MissingFrontmatter {
            collection,
            file: file.to_path_buf(),
        }),
    }
}

/// Slug from the file stem; empty slugs are author errors.
fn derive_slug(file: &Path, collection: &'static str) -> Result<String, ContentError> {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let slug = slugify(&stem);
    if slug.is_empty() {
        return Err(ContentError::EmptySlug {
            collection,
            file: file.to_path_buf(),
        });
    }
    Ok(slug)
}

/// Parse one blog entry. `Ok(None)` means a skipped draft.
fn parse_post(
    file: &Path,
    config: &SiteConfig,
) -> Result<Option<Entry<BlogPost>>, ContentError> {
    const COLLECTION: &str = "blog";

    let (yaml, body) = read_parts(file, COLLECTION)?;
    let mut post: BlogPost =
        frontmatter::parse(&yaml).map_err(|source| ContentError::Schema {
            collection: COLLECTION,
            file: file.to_path_buf(),
            source,
        })?;

    if post.title.trim().is_empty() {
        return Err(ContentError::EmptyTitle {
            collection: COLLECTION,
            file: file.to_path_buf(),
        });
    }

    let i18n = &config.site.i18n;
    if !i18n.is_known(&post.language) {
        return Err(ContentError::UnknownLanguage {
            collection: COLLECTION,
            file: file.to_path_buf(),
            language: post.language.clone(),
            expected: i18n.languages.clone(),
        });
    }

    if config.build.skip_drafts && post.draft {
        return Ok(None);
    }

    // Apply the fixed author default
    if post.author.is_none() {
        post.author = Some(config.site.info.author.clone());
    }

    let entry_dir = file.parent().unwrap_or(Path::new(""));
    if let Some(cover) = post.cover.as_mut() {
        cover.enrich(entry_dir, config);
    }

    let slug = derive_slug(file, COLLECTION)?;
    let permalink = UrlPath::from_page(&format!("{}{slug}", i18n.url_prefix(&post.language)));

    Ok(Some(Entry {
        permalink,
        slug,
        source: file.to_path_buf(),
        body,
        data: post,
    }))
}

/// Parse one theater credit.
fn parse_credit(
    file: &Path,
    config: &SiteConfig,
) -> Result<Entry<TheaterCredit>, ContentError> {
    const COLLECTION: &str = "theater";

    let (yaml, body) = read_parts(file, COLLECTION)?;
    let mut credit: TheaterCredit =
        frontmatter::parse(&yaml).map_err(|source| ContentError::Schema {
            collection: COLLECTION,
            file: file.to_path_buf(),
            source,
        })?;

    if credit.title.trim().is_empty() {
        return Err(ContentError::EmptyTitle {
            collection: COLLECTION,
            file: file.to_path_buf(),
        });
    }

    let entry_dir = file.parent().unwrap_or(Path::new(""));
    credit.cover.enrich(entry_dir, config);
    for image in &mut credit.images {
        image.enrich(entry_dir, config);
    }

    let slug = derive_slug(file, COLLECTION)?;
    let permalink = UrlPath::from_page(&format!("{THEATER_BASE}/{slug}"));

    Ok(Entry {
        permalink,
        slug,
        source: file.to_path_buf(),
        body,
        data: credit,
    })
}

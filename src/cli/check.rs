//! Check command implementation.
//!
//! Validates everything the build would reject, plus the referential
//! soundness the build does not need: image files behind front-matter
//! references, and site-root links inside markdown bodies.

use std::path::Path;

use anyhow::{Result, bail};
use pulldown_cmark::{Event, Parser, Tag};

use crate::cli::CheckArgs;
use crate::config::SiteConfig;
use crate::content::images::ImageRef;
use crate::content::{ContentStore, loader};
use crate::log;
use crate::utils::plural_count;

/// Run all content checks. Schema violations already abort inside the
/// loader; what remains are reference problems.
pub fn check_site(config: &SiteConfig, args: &CheckArgs) -> Result<()> {
    let store = loader::load(config)?;

    let mut problems = Vec::new();
    check_images(&store, config, &mut problems);
    check_links(&store, config, &mut problems);

    if problems.is_empty() {
        log!("check"; "no problems found");
        return Ok(());
    }

    for problem in &problems {
        log!("warning"; "{problem}");
    }

    if args.warn_only {
        log!("check"; "{} (warn-only)", plural_count(problems.len(), "problem"));
        Ok(())
    } else {
        bail!("check failed with {}", plural_count(problems.len(), "problem"));
    }
}

/// Every front-matter image reference must resolve to a readable file.
fn check_images(store: &ContentStore, config: &SiteConfig, problems: &mut Vec<String>) {
    let mut check = |image: &ImageRef, source: &Path| {
        let entry_dir = source.parent().unwrap_or(Path::new(""));
        match image.resolve(entry_dir, config) {
            Some(path) if !path.is_file() => {
                problems.push(format!(
                    "{}: image `{}` not found at {}",
                    config.root_relative(source).display(),
                    image.src,
                    path.display()
                ));
            }
            // Remote references and existing files are fine
            _ => {}
        }
    };

    for post in &store.blog {
        if let Some(cover) = &post.data.cover {
            check(cover, &post.source);
        }
    }
    for credit in &store.theater {
        check(&credit.data.cover, &credit.source);
        for image in &credit.data.images {
            check(image, &credit.source);
        }
    }
}

/// Site-root links in markdown bodies must point at known permalinks.
fn check_links(store: &ContentStore, config: &SiteConfig, problems: &mut Vec<String>) {
    let entries = store
        .blog
        .iter()
        .map(|post| (&post.source, &post.body))
        .chain(store.theater.iter().map(|credit| (&credit.source, &credit.body)));

    for (source, body) in entries {
        for link in extract_internal_links(body) {
            if !store.resolves(&link) {
                problems.push(format!(
                    "{}: link `{link}` does not match any entry",
                    config.root_relative(source).display()
                ));
            }
        }
    }
}

/// Extract site-root link targets (`/...`) from a markdown body.
fn extract_internal_links(markdown: &str) -> Vec<String> {
    let parser = Parser::new(markdown);
    let mut links = Vec::new();

    for event in parser {
        if let Event::Start(Tag::Link { dest_url, .. }) = event {
            let url = dest_url.as_ref();
            // Only site-root links; protocol-relative (`//`) is external
            if url.starts_with('/') && !url.starts_with("//") {
                // Drop fragment/query before resolution
                let target = url.split(['#', '?']).next().unwrap_or(url);
                links.push(target.to_string());
            }
        }
    }

    links
}

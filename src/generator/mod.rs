//! Artifact generation: feeds, sitemap, robots.txt.

pub mod feed;
pub mod robots;
pub mod sitemap;

use crate::config::SiteConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write a generated artifact into the output directory and log it.
fn write_artifact(
    config: &SiteConfig,
    rel_path: &Path,
    contents: &str,
    module: &str,
) -> Result<()> {
    let out_path = config.build.output.join(rel_path);

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&out_path, contents)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    crate::log!(module; "{}", out_path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

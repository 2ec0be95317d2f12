//! Content loading and validation errors.
//!
//! A malformed entry fails the build loudly; every variant names the file
//! and, where it applies, the collection, so authors can fix the
//! front-matter without spelunking.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("{collection}: `{file}` has no front-matter block")]
    MissingFrontmatter {
        collection: &'static str,
        file: PathBuf,
    },

    #[error("{collection}: invalid front-matter in `{file}`: {source}")]
    Schema {
        collection: &'static str,
        file: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{collection}: `{file}`: title must not be empty")]
    EmptyTitle {
        collection: &'static str,
        file: PathBuf,
    },

    #[error(
        "{collection}: `{file}`: language `{language}` is not configured (expected one of {expected:?})"
    )]
    UnknownLanguage {
        collection: &'static str,
        file: PathBuf,
        language: String,
        expected: Vec<String>,
    },

    #[error("{collection}: `{file}`: file name produces an empty slug")]
    EmptySlug {
        collection: &'static str,
        file: PathBuf,
    },

    #[error("duplicate permalink `{permalink}`: `{first}` and `{second}`")]
    DuplicatePermalink {
        permalink: String,
        first: PathBuf,
        second: PathBuf,
    },
}

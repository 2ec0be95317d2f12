//! Core types shared across the pipeline.

mod url;

pub use url::UrlPath;

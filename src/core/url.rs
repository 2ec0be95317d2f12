//! URL path type for type-safe permalink handling.
//!
//! - Internal representation: always decoded (human-readable)
//! - Output boundary (feeds, sitemap): percent-encode per segment

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded page URL path.
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts and ends with `/`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create a page URL (leading and trailing slash normalized).
    pub fn from_page(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        let with_leading = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        let normalized = if with_leading.ends_with('/') {
            with_leading
        } else {
            format!("{with_leading}/")
        };

        Self(Arc::from(normalized))
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encode for feed/sitemap output.
    ///
    /// Unreserved characters (RFC 3986: `-`, `_`, `.`, `~`) stay literal.
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
        const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
            .remove(b'-')
            .remove(b'_')
            .remove(b'.')
            .remove(b'~');
        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Join onto a site base URL, collapsing the duplicate slash.
    ///
    /// `UrlPath("/en/b/").to_absolute("https://example.com")` ->
    /// `"https://example.com/en/b/"`
    pub fn to_absolute(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.to_encoded())
    }

    /// Check if path starts with the given prefix.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Compare ignoring trailing slash (internal link targets may omit it).
    pub fn matches_ignoring_trailing_slash(&self, other: &str) -> bool {
        let self_trimmed = self.0.trim_end_matches('/');
        let other_trimmed = other.trim_end_matches('/');

        if self_trimmed.is_empty() && other_trimmed.is_empty() {
            return true;
        }
        self_trimmed == other_trimmed
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::from_page("/")
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UrlPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_page(s)
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_page(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_page() {
        let url = UrlPath::from_page("/posts/hello/");
        assert_eq!(url.as_str(), "/posts/hello/");
    }

    #[test]
    fn test_from_page_adds_slashes() {
        assert_eq!(UrlPath::from_page("posts/hello").as_str(), "/posts/hello/");
        assert_eq!(UrlPath::from_page("en/b").as_str(), "/en/b/");
    }

    #[test]
    fn test_root() {
        assert_eq!(UrlPath::from_page("").as_str(), "/");
        assert_eq!(UrlPath::from_page("/").as_str(), "/");
        assert_eq!(UrlPath::default().as_str(), "/");
    }

    #[test]
    fn test_to_encoded_umlauts() {
        let url = UrlPath::from_page("/theater/größenwahn/");
        assert_eq!(url.to_encoded(), "/theater/gr%C3%B6%C3%9Fenwahn/");
    }

    #[test]
    fn test_to_encoded_space() {
        let url = UrlPath::from_page("/hello world/");
        assert_eq!(url.to_encoded(), "/hello%20world/");
    }

    #[test]
    fn test_to_encoded_keeps_unreserved() {
        let url = UrlPath::from_page("/en/hello-world_2.0/");
        assert_eq!(url.to_encoded(), "/en/hello-world_2.0/");
    }

    #[test]
    fn test_to_absolute() {
        let url = UrlPath::from_page("/en/b/");
        assert_eq!(url.to_absolute("https://example.com"), "https://example.com/en/b/");
        assert_eq!(url.to_absolute("https://example.com/"), "https://example.com/en/b/");
    }

    #[test]
    fn test_starts_with() {
        let url = UrlPath::from_page("/en/hello/");
        assert!(url.starts_with("/en/"));
        assert!(!url.starts_with("/de/"));
    }

    #[test]
    fn test_matches_ignoring_trailing_slash() {
        let url = UrlPath::from_page("/posts/hello/");
        assert!(url.matches_ignoring_trailing_slash("/posts/hello"));
        assert!(url.matches_ignoring_trailing_slash("/posts/hello/"));
        assert!(!url.matches_ignoring_trailing_slash("/posts/world"));
    }

    #[test]
    fn test_equality_and_hash() {
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(UrlPath::from_page("/a/"));
        set.insert(UrlPath::from_page("a")); // same after normalization
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serialize_deserialize() {
        let url = UrlPath::from_page("/theater/faust/");
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, r#""/theater/faust/""#);

        let parsed: UrlPath = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, url);
    }
}

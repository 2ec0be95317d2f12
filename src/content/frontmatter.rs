//! YAML front-matter extraction.
//!
//! Entries open with a `---` fenced YAML block followed by the markdown
//! body. The fence must be the first non-whitespace content of the file.

use serde::de::DeserializeOwned;

/// Split content into `(yaml, body)`.
///
/// Returns `None` when the file carries no front-matter block.
pub fn split(content: &str) -> Option<(&str, &str)> {
    let trimmed = content.trim_start();

    let rest = trimmed.strip_prefix("---")?;
    let end = rest.find("\n---")?;

    let yaml = rest[..end].trim();
    let body = rest[end + 4..].trim_start_matches('\n');
    Some((yaml, body))
}

/// Deserialize a front-matter block into a typed schema.
pub fn parse<T: DeserializeOwned>(yaml: &str) -> Result<T, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

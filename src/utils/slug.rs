//! URL slug derivation from content file stems.
//!
//! File names may carry anything the author's editor allowed (umlauts,
//! spaces, punctuation); permalinks want lowercase ASCII with dashes.

use deunicode::deunicode;

/// Slugify a file stem: transliterate to ASCII, lowercase, collapse
/// everything non-alphanumeric into single dashes.
///
/// Returns an empty string when nothing survives (caller treats that as
/// an invalid entry).
pub fn slugify(input: &str) -> String {
    let ascii = deunicode(input);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

//! Shared utilities.

pub mod date;
pub mod slug;

/// Format a count with its noun, pluralized with a plain `s`.
///
/// `plural_count(1, "entry")` -> `"1 entry"`, `plural_count(3, "entry")`
/// -> `"3 entrys"` would be wrong, so callers pass nouns that pluralize
/// regularly (`"post"`, `"credit"`, `"item"`, `"error"`).
pub fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "post"), "0 posts");
        assert_eq!(plural_count(1, "post"), "1 post");
        assert_eq!(plural_count(2, "post"), "2 posts");
    }
}

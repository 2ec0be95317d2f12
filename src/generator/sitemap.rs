//! Sitemap generation.
//!
//! Lists every content page with its last-modified date and a
//! self-referencing `hreflang` alternate carrying the page's locale:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
//!         xmlns:xhtml="http://www.w3.org/1999/xhtml">
//!   <url>
//!     <loc>https://mwellner.de/en/hello/</loc>
//!     <lastmod>2024-01-01</lastmod>
//!     <xhtml:link rel="alternate" hreflang="en-US" href="https://mwellner.de/en/hello/"/>
//!   </url>
//! </urlset>
//! ```

use crate::config::SiteConfig;
use crate::content::ContentStore;
use anyhow::Result;
use std::borrow::Cow;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Build sitemap if enabled.
pub fn build_sitemap(store: &ContentStore, config: &SiteConfig) -> Result<()> {
    if config.site.sitemap.enable {
        let sitemap = Sitemap::build(store, config);
        let xml = sitemap.into_xml();
        super::write_artifact(config, &config.site.sitemap.path, &xml, "sitemap")?;
    }
    Ok(())
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: String,
    hreflang: String,
}

impl Sitemap {
    fn build(store: &ContentStore, config: &SiteConfig) -> Self {
        let base_url = config.site.info.base_url();
        let i18n = &config.site.i18n;

        let urls: Vec<UrlEntry> = store
            .pages()
            .into_iter()
            .map(|(permalink, date, language)| {
                let language = if language.is_empty() {
                    &i18n.default_language
                } else {
                    language
                };
                UrlEntry {
                    loc: permalink.to_absolute(base_url),
                    lastmod: date.to_iso_date(),
                    hreflang: i18n.locale(language).to_string(),
                }
            })
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\" xmlns:xhtml=\"");
        xml.push_str(XHTML_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            let loc = escape_xml(&entry.loc);
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&loc);
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&entry.lastmod);
            xml.push_str("</lastmod>\n    <xhtml:link rel=\"alternate\" hreflang=\"");
            xml.push_str(&escape_xml(&entry.hreflang));
            xml.push_str("\" href=\"");
            xml.push_str(&loc);
            xml.push_str("\"/>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::store::test_support::{make_credit, make_post};

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_sitemap_empty() {
        let sitemap = Sitemap { urls: vec![] };
        let xml = sitemap.into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(SITEMAP_NS));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_lists_both_collections_with_locales() {
        let config = test_parse_config("url = \"https://mwellner.de\"");
        let mut store = ContentStore::new();
        store.insert_post(make_post("a", "2024-01-01", "de")).unwrap();
        store.insert_post(make_post("b", "2024-02-01", "en")).unwrap();
        store.insert_credit(make_credit("faust", "2018-05-01")).unwrap();

        let xml = Sitemap::build(&store, &config).into_xml();

        assert!(xml.contains("<loc>https://mwellner.de/a/</loc>"));
        assert!(xml.contains("<loc>https://mwellner.de/en/b/</loc>"));
        assert!(xml.contains("<loc>https://mwellner.de/theater/faust/</loc>"));
        assert!(xml.contains("<lastmod>2024-02-01</lastmod>"));
        assert!(xml.contains(r#"hreflang="en-US" href="https://mwellner.de/en/b/""#));
        // Theater pages carry the default locale
        assert!(xml.contains(r#"hreflang="de-DE" href="https://mwellner.de/theater/faust/""#));
        assert_eq!(xml.matches("<url>").count(), 3);
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let sitemap = Sitemap {
            urls: vec![UrlEntry {
                loc: "https://example.com/search?q=a&b=c".to_string(),
                lastmod: "2024-01-01".to_string(),
                hreflang: "de-DE".to_string(),
            }],
        };
        let xml = sitemap.into_xml();
        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
    }

    #[test]
    fn test_build_sitemap_respects_enable_flag() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_parse_config("url = \"https://mwellner.de\"");
        config.build.output = dir.path().to_path_buf();

        let store = ContentStore::new();
        build_sitemap(&store, &config).unwrap();
        assert!(!dir.path().join("sitemap.xml").exists());

        config.site.sitemap.enable = true;
        build_sitemap(&store, &config).unwrap();
        assert!(dir.path().join("sitemap.xml").exists());
    }
}

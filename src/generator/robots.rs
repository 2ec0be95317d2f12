//! robots.txt generation.
//!
//! Renders the configured crawler directives and points crawlers at the
//! sitemap when one is generated.

use crate::config::SiteConfig;
use anyhow::Result;

/// Build robots.txt if enabled.
pub fn build_robots(config: &SiteConfig) -> Result<()> {
    if config.site.robots.enable {
        let contents = render(config);
        super::write_artifact(config, &config.site.robots.path, &contents, "robots")?;
    }
    Ok(())
}

fn render(config: &SiteConfig) -> String {
    let robots = &config.site.robots;
    let mut out = String::with_capacity(128);

    out.push_str("User-agent: ");
    out.push_str(&robots.user_agent);
    out.push('\n');

    for path in &robots.allow {
        out.push_str("Allow: ");
        out.push_str(path);
        out.push('\n');
    }
    for path in &robots.disallow {
        out.push_str("Disallow: ");
        out.push_str(path);
        out.push('\n');
    }

    if config.site.sitemap.enable {
        let base_url = config.site.info.base_url();
        out.push('\n');
        out.push_str("Sitemap: ");
        out.push_str(base_url);
        out.push('/');
        out.push_str(&config.site.sitemap.path.to_string_lossy());
        out.push('\n');
    }

    out
}

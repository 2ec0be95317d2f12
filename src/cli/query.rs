//! Query command implementation.
//!
//! Dumps the validated store as JSON for downstream tooling (templates,
//! deploy scripts, editors). Entries are date-ascending, the same order
//! the generators see.

use std::fs;

use anyhow::Result;

use crate::cli::{QueryArgs, QueryCollection};
use crate::config::SiteConfig;
use crate::content::loader;
use crate::log;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let store = loader::load(config)?;

    let value = match args.collection {
        Some(QueryCollection::Blog) => serde_json::to_value(store.posts_by_date())?,
        Some(QueryCollection::Theater) => serde_json::to_value(store.credits_by_date())?,
        None => serde_json::json!({
            "blog": store.posts_by_date(),
            "theater": store.credits_by_date(),
        }),
    };

    let text = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &text)?;
            log!("query"; "wrote {}", path.display());
        }
        None => println!("{text}"),
    }

    Ok(())
}

//! Content collections: schemas, front-matter parsing, loading, storage.
//!
//! Two collections live under the content directory:
//!
//! ```text
//! content/
//! ├── blog/       # BlogPost entries (.md / .mdx)
//! └── theater/    # TheaterCredit entries
//! ```

pub mod blog;
pub mod error;
pub mod frontmatter;
pub mod images;
pub mod loader;
pub mod store;
pub mod theater;

pub use blog::BlogPost;
pub use error::ContentError;
pub use store::{ContentStore, Entry};
pub use theater::TheaterCredit;

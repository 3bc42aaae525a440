//! Sitemap generation from JSON page data.
//!
//! Loads a `{ "pages": [...] }` document, turns each entry into a sitemaps.org
//! `<url>` element prefixed with a base URL, and writes the result to disk.

pub mod error;
pub mod generator;
pub mod loader;
pub mod page;
pub mod writer;

pub use error::{ErrorKind, SitemapError};
pub use generator::{GenerateResult, SiteMapGenerator, SitemapConfig, SITEMAP_NAMESPACE};
pub use loader::{load_pages, parse_pages};
pub use page::{FieldValue, PageEntry, PageSet, ResolvedPage};
pub use writer::{output_file, robots_txt, write_robots, DEFAULT_OUTPUT};

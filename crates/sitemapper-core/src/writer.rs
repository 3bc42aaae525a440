//! Writing generated documents to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SitemapError;

/// Default sitemap file name.
pub const DEFAULT_OUTPUT: &str = "sitemap.xml";

/// Write `contents` to `path`, replacing any existing file.
///
/// Returns the number of bytes written.
pub fn output_file(path: impl AsRef<Path>, contents: &str) -> Result<usize, SitemapError> {
    let path = path.as_ref();

    fs::write(path, contents).map_err(|e| SitemapError::io(path, e))?;

    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());

    Ok(contents.len())
}

/// Build a robots.txt body that points crawlers at the sitemap.
pub fn robots_txt(base_url: &str, sitemap_name: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}/{}\n",
        base_url.trim_end_matches('/'),
        sitemap_name.trim_start_matches('/')
    )
}

/// Write robots.txt into `dir`. Returns the path of the written file.
pub fn write_robots(
    dir: &Path,
    base_url: &str,
    sitemap_name: &str,
) -> Result<PathBuf, SitemapError> {
    let path = dir.join("robots.txt");
    output_file(&path, &robots_txt(base_url, sitemap_name))?;
    Ok(path)
}

//! Loading page data from JSON.

use std::fs;
use std::path::Path;

use crate::error::SitemapError;
use crate::page::PageSet;

/// Parse page data from a JSON string.
///
/// Only the document shape is checked here; individual entries are validated
/// during generation.
pub fn parse_pages(source: &str) -> Result<PageSet, SitemapError> {
    let set: PageSet = serde_json::from_str(source)?;
    Ok(set)
}

/// Read and parse a JSON page data file.
pub fn load_pages(path: impl AsRef<Path>) -> Result<PageSet, SitemapError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| SitemapError::io(path, e))?;
    let set = parse_pages(&content)?;

    tracing::debug!("Loaded {} page entries from {}", set.len(), path.display());

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn parses_page_list() {
        let set = parse_pages(r#"{"pages":[{"link":"/a"},{"link":"/b"}]}"#).unwrap();

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn does_not_validate_entries() {
        let set = parse_pages(r#"{"pages":[{"priority":0}, 42]}"#).unwrap();

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_pages("{\"pages\": [").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn rejects_non_list_pages() {
        let err = parse_pages(r#"{"pages": "nope"}"#).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn loads_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("pages.json");
        fs::write(&path, r#"{"pages":[{"link":"/"}]}"#).unwrap();

        let set = load_pages(&path).unwrap();

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp = tempdir().unwrap();

        let err = load_pages(temp.path().join("absent.json")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("absent.json"));
    }
}

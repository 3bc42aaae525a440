//! Error taxonomy for sitemap generation.

use std::path::PathBuf;

/// Broad category of a [`SitemapError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad construction parameters (empty base URL).
    Configuration,
    /// Input unreadable or output unwritable.
    Io,
    /// Input is not valid JSON.
    Parse,
    /// A page entry (or the page list itself) is unusable.
    Validation,
}

/// Errors that can occur while loading, generating or writing a sitemap.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse page data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid page entry at index {index}: {message}")]
    Validation { index: usize, message: String },

    #[error("Failed to serialize XML: {0}")]
    Xml(String),
}

impl SitemapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Category of this error. Serializer failures count as [`ErrorKind::Io`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Io { .. } | Self::Xml(_) => ErrorKind::Io,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Validation { .. } => ErrorKind::Validation,
        }
    }
}

//! CLI command implementations.

pub mod check;
pub mod generate;
pub mod init;

use std::io;

use anyhow::{Context, Result};
use sitemapper_core::{SiteMapGenerator, SitemapConfig};

use crate::config::InputSource;

/// Construct a generator from a file or stdin.
///
/// The config is checked before any input is read.
fn open_generator(input: &InputSource, config: SitemapConfig) -> Result<SiteMapGenerator> {
    config.validate()?;

    let generator = match input {
        InputSource::File(path) => {
            tracing::debug!("Reading page data from {}", path.display());
            SiteMapGenerator::new(path, config)?
        }
        InputSource::Stdin => {
            let source = io::read_to_string(io::stdin()).context("Failed to read stdin")?;
            SiteMapGenerator::from_json(&source, config)?
        }
    };
    Ok(generator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitemapper_core::ErrorKind;

    #[test]
    fn config_error_comes_before_reading_stdin() {
        let err = open_generator(&InputSource::Stdin, SitemapConfig::default()).unwrap_err();

        let err = err.downcast::<sitemapper_core::SitemapError>().unwrap();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}

//! Sitemap generate command.

use std::path::Path;

use anyhow::Result;

use crate::config::{load_config, Overrides};

/// Run the generate command.
pub fn run(config_path: &Path, overrides: Overrides) -> Result<()> {
    tracing::info!("Generating sitemap...");

    let (input, config) = load_config(config_path)?.resolve(overrides);

    let result = super::open_generator(&input, config)?.create_xml()?;

    tracing::info!(
        "Wrote {} urls ({} bytes) to {} in {}ms",
        result.urls,
        result.bytes,
        result.output.display(),
        result.duration_ms
    );

    if let Some(robots) = &result.robots {
        tracing::info!("Wrote {}", robots.display());
    }

    Ok(())
}

//! Validate page data without writing.

use std::path::Path;

use anyhow::Result;

use crate::config::{load_config, Overrides};

/// Run the check command.
pub fn run(config_path: &Path, overrides: Overrides) -> Result<()> {
    let (input, config) = load_config(config_path)?.resolve(overrides);

    let generator = super::open_generator(&input, config)?;
    let entries = generator.entries()?;
    let xml = generator.render_entries(&entries)?;

    tracing::info!("{} urls OK ({} bytes rendered)", entries.len(), xml.len());

    Ok(())
}

//! Create a starter config and page data file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing sitemapper...");

    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    } else {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
    }

    let pages_path = config_path
        .parent()
        .unwrap_or(Path::new(""))
        .join("pages.json");
    if !pages_path.exists() || yes {
        fs::write(&pages_path, DEFAULT_PAGES).context("Failed to write pages.json")?;
        tracing::info!("Created {}", pages_path.display());
    }

    tracing::info!("Set base_url in the config, then run 'sitemapper generate'.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Sitemapper Configuration

[sitemap]
# JSON page data ("-" reads stdin)
input = "pages.json"

# Prepended verbatim to every page link
base_url = ""

# Output file
output = "sitemap.xml"

# Write robots.txt next to the sitemap
robots = false

# Add xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" to <urlset>
namespace = false
"#;

const DEFAULT_PAGES: &str = r#"{
  "pages": [
    { "link": "/", "changefreq": "weekly", "priority": "1.0" },
    { "link": "/about", "lastmod": "2020-01-01", "changefreq": "monthly" },
    { "link": "/contact" }
  ]
}
"#;

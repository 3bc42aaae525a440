//! Configuration file handling (sitemap.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use sitemapper_core::SitemapConfig;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub sitemap: SitemapSection,
}

#[derive(Debug, Deserialize)]
pub struct SitemapSection {
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub robots: bool,
    #[serde(default)]
    pub namespace: bool,
}

impl Default for SitemapSection {
    fn default() -> Self {
        Self {
            input: default_input(),
            base_url: String::new(),
            output: default_output(),
            robots: false,
            namespace: false,
        }
    }
}

fn default_input() -> String {
    "pages.json".to_string()
}
fn default_output() -> String {
    sitemapper_core::DEFAULT_OUTPUT.to_string()
}

/// Values given on the command line. They win over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub base_url: Option<String>,
    pub output: Option<PathBuf>,
    pub robots: bool,
    pub namespace: bool,
}

/// Where page data is read from.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}

impl ConfigFile {
    /// Merge command-line overrides into the file settings.
    pub fn resolve(self, overrides: Overrides) -> (InputSource, SitemapConfig) {
        let section = self.sitemap;

        let input = overrides
            .input
            .unwrap_or_else(|| PathBuf::from(&section.input));

        let config = SitemapConfig {
            base_url: overrides.base_url.unwrap_or(section.base_url),
            output: overrides
                .output
                .unwrap_or_else(|| PathBuf::from(&section.output)),
            namespace: overrides.namespace || section.namespace,
            robots: overrides.robots || section.robots,
        };

        (InputSource::from_path(input), config)
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

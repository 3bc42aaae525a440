//! Sitemap document generation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Deserialize;

use crate::error::SitemapError;
use crate::loader::{load_pages, parse_pages};
use crate::page::{PageEntry, PageSet, ResolvedPage};
use crate::writer::{output_file, write_robots, DEFAULT_OUTPUT};

/// Namespace of the sitemaps.org protocol.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Configuration for generating a sitemap.
#[derive(Debug, Clone)]
pub struct SitemapConfig {
    /// Prefix prepended verbatim to every page link
    pub base_url: String,

    /// Output file
    pub output: PathBuf,

    /// Add the sitemaps.org `xmlns` attribute to the root element
    pub namespace: bool,

    /// Also write robots.txt next to the sitemap
    pub robots: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            namespace: false,
            robots: false,
        }
    }
}

impl SitemapConfig {
    /// Check the settings without touching the filesystem.
    pub fn validate(&self) -> Result<(), SitemapError> {
        if self.base_url.is_empty() {
            return Err(SitemapError::Configuration(
                "a base URL (http://www.example.com) must be supplied".to_string(),
            ));
        }
        Ok(())
    }

    /// Config with the given base URL and defaults for everything else.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Result of a generate operation.
#[derive(Debug)]
pub struct GenerateResult {
    /// Number of `<url>` elements written
    pub urls: usize,

    /// Bytes written to the sitemap file
    pub bytes: usize,

    /// Total time in milliseconds
    pub duration_ms: u64,

    /// Sitemap file
    pub output: PathBuf,

    /// robots.txt file, when one was written
    pub robots: Option<PathBuf>,
}

/// Generates a sitemap.xml from JSON page data.
#[derive(Debug)]
pub struct SiteMapGenerator {
    config: SitemapConfig,
    pages: PageSet,
}

impl SiteMapGenerator {
    /// Load page data from `json_path`.
    ///
    /// The base URL is checked before the file is touched.
    pub fn new(
        json_path: impl AsRef<Path>,
        config: SitemapConfig,
    ) -> Result<Self, SitemapError> {
        config.validate()?;
        let pages = load_pages(json_path)?;
        Ok(Self { config, pages })
    }

    /// Use page data from a JSON string.
    pub fn from_json(source: &str, config: SitemapConfig) -> Result<Self, SitemapError> {
        config.validate()?;
        let pages = parse_pages(source)?;
        Ok(Self { config, pages })
    }

    pub fn config(&self) -> &SitemapConfig {
        &self.config
    }

    /// Resolve every page entry in input order.
    ///
    /// Stops at the first entry without a usable `link`. A document without a
    /// `pages` list has no entries.
    pub fn entries(&self) -> Result<Vec<ResolvedPage>, SitemapError> {
        let raw = self.pages.pages.as_deref().unwrap_or_default();

        raw.iter()
            .enumerate()
            .map(|(index, value)| {
                // Struct deserialization would also accept a positional array
                if !value.is_object() {
                    return Err(SitemapError::Validation {
                        index,
                        message: format!("expected an object, found {value}"),
                    });
                }
                let entry = PageEntry::deserialize(value).map_err(|e| SitemapError::Validation {
                    index,
                    message: e.to_string(),
                })?;
                entry
                    .resolve()
                    .map_err(|message| SitemapError::Validation { index, message })
            })
            .collect()
    }

    /// Render the complete sitemap document in memory.
    pub fn render(&self) -> Result<String, SitemapError> {
        let entries = self.entries()?;
        self.render_entries(&entries)
    }

    /// Render and write to the configured output file.
    pub fn create_xml(&self) -> Result<GenerateResult, SitemapError> {
        let output = self.config.output.clone();
        self.create_xml_at(output)
    }

    /// Render and write to `path`.
    ///
    /// Nothing is written unless the whole document renders. robots.txt is
    /// written after the sitemap, so if that second write fails the sitemap
    /// at `path` has already been replaced.
    pub fn create_xml_at(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<GenerateResult, SitemapError> {
        let start = Instant::now();
        let path = path.as_ref();

        let entries = self.entries()?;
        let xml = self.render_entries(&entries)?;
        let bytes = output_file(path, &xml)?;

        let robots = if self.config.robots {
            Some(self.generate_robots(path)?)
        } else {
            None
        };

        Ok(GenerateResult {
            urls: entries.len(),
            bytes,
            duration_ms: start.elapsed().as_millis() as u64,
            output: path.to_path_buf(),
            robots,
        })
    }

    /// Render already resolved entries, as returned by [`Self::entries`].
    pub fn render_entries(&self, entries: &[ResolvedPage]) -> Result<String, SitemapError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;

        let mut root = BytesStart::new("urlset");
        if self.config.namespace {
            root.push_attribute(("xmlns", SITEMAP_NAMESPACE));
        }
        writer.write_event(Event::Start(root)).map_err(xml_error)?;

        for page in entries {
            self.write_url(&mut writer, page)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("urlset")))
            .map_err(xml_error)?;

        let mut xml = String::from_utf8(writer.into_inner()).map_err(xml_error)?;
        xml.push('\n');

        tracing::debug!("Rendered {} urls", entries.len());

        Ok(xml)
    }

    fn write_url(
        &self,
        writer: &mut Writer<Vec<u8>>,
        page: &ResolvedPage,
    ) -> Result<(), SitemapError> {
        writer
            .write_event(Event::Start(BytesStart::new("url")))
            .map_err(xml_error)?;

        let loc = format!("{}{}", self.config.base_url, page.link);
        write_element(writer, "loc", &loc)?;

        // Optional elements, fixed order
        let optional = [
            ("lastmod", &page.lastmod),
            ("changefreq", &page.changefreq),
            ("priority", &page.priority),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                write_element(writer, name, value)?;
            }
        }

        writer
            .write_event(Event::End(BytesEnd::new("url")))
            .map_err(xml_error)?;

        Ok(())
    }

    fn generate_robots(&self, sitemap_path: &Path) -> Result<PathBuf, SitemapError> {
        let dir = sitemap_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let name = sitemap_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_OUTPUT);

        write_robots(dir, &self.config.base_url, name)
    }
}

/// Write `<name>value</name>` with the value XML-escaped.
fn write_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    value: &str,
) -> Result<(), SitemapError> {
    writer
        .create_element(name)
        .write_text_content(BytesText::new(value))
        .map_err(xml_error)?;
    Ok(())
}

fn xml_error(e: impl std::fmt::Display) -> SitemapError {
    SitemapError::Xml(e.to_string())
}

//! Sitemap document rendering and output.

use std::fs;
use std::path::Path;

use askama::Template;
use chrono::{Local, NaiveDate};
use tracing::info;

use super::enumerate::SitemapEntry;

/// Errors from rendering or writing a sitemap.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    /// The template failed to render
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// The file could not be written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The `urlset` document.
#[derive(Template)]
#[template(path = "sitemap.xml")]
struct SitemapTemplate<'a> {
    entries: &'a [SitemapEntry],
    lastmod: NaiveDate,
}

/// Render entries as a sitemap protocol document.
///
/// Every `<url>` gets the same `<lastmod>` date. Entry locations are
/// embedded as-is, so they must already be XML-escaped, which
/// [`enumerate_urls`](super::enumerate_urls) guarantees.
pub fn render_sitemap(entries: &[SitemapEntry], lastmod: NaiveDate) -> Result<String, SitemapError> {
    let template = SitemapTemplate { entries, lastmod };
    Ok(template.render()?)
}

/// Render entries with today's local date as `<lastmod>`.
pub fn render_sitemap_today(entries: &[SitemapEntry]) -> Result<String, SitemapError> {
    render_sitemap(entries, Local::now().date_naive())
}

/// Write a rendered sitemap, creating parent directories as needed.
pub fn write_sitemap(path: &Path, xml: &str) -> Result<(), SitemapError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, xml)?;
    info!(path = %path.display(), bytes = xml.len(), "wrote sitemap");
    Ok(())
}

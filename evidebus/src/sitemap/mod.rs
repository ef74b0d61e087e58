//! Sitemap generation.
//!
//! Enumerates every canonical URL of the public site from the static
//! page list, the gazetteer (one board page per stop) and the curated
//! popular routes (one search page per pair), then renders the result as
//! a sitemap protocol document.
//!
//! Entry order is fixed: static pages, then stops sorted by name, then
//! routes in curated order. Two runs over the same inputs produce the
//! same document apart from `<lastmod>`.

mod config;
mod encode;
mod enumerate;
mod pages;
mod render;

pub use config::{ChangeFreq, EntryStyle, Priority, SitemapConfig, StaticPage};
pub use encode::{encode_path_segment, escape_xml};
pub use enumerate::{SitemapEntry, board_path, enumerate_urls, search_path};
pub use pages::{popular_routes, static_pages};
pub use render::{SitemapError, render_sitemap, render_sitemap_today, write_sitemap};

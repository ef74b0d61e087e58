//! Canonical URL enumeration.

use tracing::debug;

use crate::domain::{RoutePair, StopName};
use crate::gazetteer::Gazetteer;

use super::config::{ChangeFreq, EntryStyle, Priority, SitemapConfig, StaticPage};
use super::encode::{encode_path_segment, escape_xml};

/// One URL of the public site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    /// Absolute URL, XML-escaped and ready to place inside `<loc>`.
    pub loc: String,

    pub changefreq: ChangeFreq,

    pub priority: Priority,
}

impl SitemapEntry {
    fn new(url: &str, style: EntryStyle) -> Self {
        Self {
            loc: escape_xml(url),
            changefreq: style.changefreq,
            priority: style.priority,
        }
    }
}

/// Path of the digital board page for a stop.
///
/// ```
/// use evidebus::domain::StopName;
/// use evidebus::sitemap::board_path;
///
/// let stop = StopName::parse("FORT KOCHI").unwrap();
/// assert_eq!(board_path(&stop), "/board/FORT%20KOCHI");
/// ```
pub fn board_path(stop: &StopName) -> String {
    format!("/board/{}", encode_path_segment(stop.as_str()))
}

/// Path of the search results page for a route, with the `all` filter.
///
/// ```
/// use evidebus::domain::RoutePair;
/// use evidebus::sitemap::search_path;
///
/// let pair = RoutePair::parse("ALUVA", "NORTH PARAVUR").unwrap();
/// assert_eq!(search_path(&pair), "/search/ALUVA/NORTH%20PARAVUR/all");
/// ```
pub fn search_path(pair: &RoutePair) -> String {
    format!(
        "/search/{}/{}/all",
        encode_path_segment(pair.origin.as_str()),
        encode_path_segment(pair.destination.as_str())
    )
}

/// Enumerate every canonical URL the site exposes.
///
/// Static pages come first in the order given, then one board page per
/// stop in the gazetteer's sorted order, then one search page per route
/// in the order given. The output depends only on the inputs.
///
/// # Examples
///
/// ```
/// use evidebus::domain::RoutePair;
/// use evidebus::gazetteer::Gazetteer;
/// use evidebus::sitemap::{ChangeFreq, Priority, SitemapConfig, StaticPage, enumerate_urls};
///
/// let config = SitemapConfig::new("https://evidebus.com");
/// let pages = vec![StaticPage::new("/", ChangeFreq::Daily, Priority::MAX)];
/// let gazetteer = Gazetteer::new(["PALA"]);
/// let routes = vec![RoutePair::parse("PALA", "PALA").unwrap()];
///
/// let locs: Vec<_> = enumerate_urls(&config, &pages, &gazetteer, &routes)
///     .into_iter()
///     .map(|e| e.loc)
///     .collect();
/// assert_eq!(
///     locs,
///     vec![
///         "https://evidebus.com",
///         "https://evidebus.com/board/PALA",
///         "https://evidebus.com/search/PALA/PALA/all",
///     ]
/// );
/// ```
pub fn enumerate_urls(
    config: &SitemapConfig,
    pages: &[StaticPage],
    gazetteer: &Gazetteer,
    routes: &[RoutePair],
) -> Vec<SitemapEntry> {
    let base = config.base();
    let mut entries = Vec::with_capacity(pages.len() + gazetteer.len() + routes.len());

    for page in pages {
        let url = if page.path == "/" {
            base.to_string()
        } else {
            format!("{base}{}", page.path)
        };
        entries.push(SitemapEntry::new(&url, page.style));
    }

    let stops = gazetteer
        .stops()
        .iter()
        .filter(|stop| !stop.as_str().trim().is_empty());
    for stop in stops {
        let url = format!("{base}{}", board_path(stop));
        entries.push(SitemapEntry::new(&url, config.board));
    }

    for route in routes {
        let url = format!("{base}{}", search_path(route));
        entries.push(SitemapEntry::new(&url, config.search));
    }

    debug!(
        pages = pages.len(),
        stops = gazetteer.len(),
        routes = routes.len(),
        total = entries.len(),
        "enumerated site URLs"
    );

    entries
}

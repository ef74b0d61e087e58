//! Compiled-in static pages and popular routes.

use tracing::warn;

use crate::domain::RoutePair;

use super::config::{ChangeFreq, Priority, StaticPage};

const STATIC_PAGES: &[(&str, ChangeFreq, u8)] = &[
    ("/", ChangeFreq::Daily, 10),
    ("/search", ChangeFreq::Daily, 9),
    ("/add-bus", ChangeFreq::Monthly, 7),
    ("/depots", ChangeFreq::Monthly, 7),
    ("/fare-calculator", ChangeFreq::Monthly, 6),
    ("/news", ChangeFreq::Daily, 6),
    ("/about", ChangeFreq::Yearly, 4),
    ("/contact", ChangeFreq::Yearly, 4),
    ("/privacy-policy", ChangeFreq::Yearly, 3),
    ("/terms", ChangeFreq::Yearly, 3),
];

const POPULAR_ROUTES: &[(&str, &str)] = &[
    ("KOZHIKODE", "THRISSUR"),
    ("THRISSUR", "KOZHIKODE"),
    ("ERNAKULAM", "THRISSUR"),
    ("THRISSUR", "ERNAKULAM"),
    ("THIRUVANANTHAPURAM", "KOLLAM"),
    ("KOLLAM", "THIRUVANANTHAPURAM"),
    ("KOTTAYAM", "ERNAKULAM"),
    ("ERNAKULAM", "MUNNAR"),
    ("ALUVA", "MUNNAR"),
    ("PALAKKAD", "THRISSUR"),
    ("KOZHIKODE", "KANNUR"),
    ("KANNUR", "KASARAGOD"),
    ("KOZHIKODE", "KALPETTA"),
    ("MALAPPURAM", "KOZHIKODE"),
    ("PERINTHALMANNA", "PALAKKAD"),
    ("THRISSUR", "GURUVAYUR"),
    ("PATHANAMTHITTA", "KOTTAYAM"),
    ("THODUPUZHA", "KOTTAYAM"),
];

/// The site's fixed pages, home page first.
pub fn static_pages() -> Vec<StaticPage> {
    STATIC_PAGES
        .iter()
        .map(|&(path, changefreq, tenths)| {
            StaticPage::new(path, changefreq, Priority::from_tenths(tenths))
        })
        .collect()
}

/// Curated origin/destination pairs that get their own search page.
///
/// Endpoints are not checked against the gazetteer.
pub fn popular_routes() -> Vec<RoutePair> {
    POPULAR_ROUTES
        .iter()
        .filter_map(|&(from, to)| match RoutePair::parse(from, to) {
            Ok(pair) => Some(pair),
            Err(e) => {
                warn!(from, to, error = %e, "skipping popular route");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer::Gazetteer;

    #[test]
    fn home_page_first() {
        let pages = static_pages();
        assert_eq!(pages.len(), STATIC_PAGES.len());
        assert_eq!(pages[0].path, "/");
        assert_eq!(pages[0].style.priority, Priority::MAX);
    }

    #[test]
    fn static_paths_are_rooted_and_unique() {
        let pages = static_pages();
        let mut paths: Vec<_> = pages.iter().map(|p| p.path.as_str()).collect();
        assert!(paths.iter().all(|p| p.starts_with('/')));
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), pages.len());
    }

    #[test]
    fn all_popular_routes_parse() {
        let routes = popular_routes();
        assert_eq!(routes.len(), POPULAR_ROUTES.len());
        assert_eq!(routes[0].origin.as_str(), "KOZHIKODE");
        assert_eq!(routes[0].destination.as_str(), "THRISSUR");
    }

    #[test]
    fn popular_routes_use_catalog_stops() {
        // Not required, but a route page for an unknown stop would be empty.
        let gazetteer = Gazetteer::builtin();
        for route in popular_routes() {
            assert!(gazetteer.contains(route.origin.as_str()), "{route}");
            assert!(gazetteer.contains(route.destination.as_str()), "{route}");
        }
    }
}

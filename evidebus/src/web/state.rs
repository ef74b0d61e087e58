//! Application state for the web layer.

use std::sync::Arc;

use crate::depots::{DepotDirectory, DepotError};
use crate::domain::{FareTable, RoutePair};
use crate::gazetteer::Gazetteer;
use crate::sitemap::{SitemapConfig, StaticPage, popular_routes, static_pages};

/// Shared application state.
///
/// Everything here is read-only reference data built at startup.
#[derive(Clone)]
pub struct AppState {
    /// Known stops
    pub gazetteer: Gazetteer,

    /// Depot contact directory
    pub depots: DepotDirectory,

    /// Fare rates
    pub fares: Arc<FareTable>,

    /// Sitemap settings
    pub sitemap: Arc<SitemapConfig>,

    /// Fixed site pages
    pub pages: Arc<[StaticPage]>,

    /// Curated routes with their own search page
    pub popular_routes: Arc<[RoutePair]>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        gazetteer: Gazetteer,
        depots: DepotDirectory,
        fares: FareTable,
        sitemap: SitemapConfig,
        pages: Vec<StaticPage>,
        popular_routes: Vec<RoutePair>,
    ) -> Self {
        Self {
            gazetteer,
            depots,
            fares: Arc::new(fares),
            sitemap: Arc::new(sitemap),
            pages: pages.into(),
            popular_routes: popular_routes.into(),
        }
    }

    /// State built from the compiled-in catalogs.
    pub fn builtin(sitemap: SitemapConfig) -> Result<Self, DepotError> {
        Ok(Self::new(
            Gazetteer::builtin(),
            DepotDirectory::builtin()?,
            FareTable::default(),
            sitemap,
            static_pages(),
            popular_routes(),
        ))
    }
}

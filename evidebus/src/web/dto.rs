//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::depots::{DepotMatch, District};
use crate::domain::{FareQuote, FareTier, RoutePair, ServiceClass, StopName};
use crate::sitemap::{board_path, search_path};

/// Request to list every stop.
#[derive(Debug, Default, Deserialize)]
pub struct StopListRequest {
    /// Sort by name (default) or keep catalog order
    pub sorted: Option<bool>,
}

/// Stop listing.
#[derive(Debug, Serialize)]
pub struct StopListResponse {
    pub count: usize,
    pub stops: Vec<StopName>,
}

/// Request to search stops by name.
#[derive(Debug, Default, Deserialize)]
pub struct StopSearchRequest {
    /// Text to look for; empty matches everything
    #[serde(default)]
    pub q: String,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// Stops matching a search.
#[derive(Debug, Serialize)]
pub struct StopSearchResponse {
    pub stops: Vec<StopName>,
}

/// Request to resolve a route between two exact stop names.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,
}

/// A resolved route with the site paths that show it.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub origin: StopName,
    pub destination: StopName,

    /// Board page of the origin stop
    pub origin_board: String,

    /// Board page of the destination stop
    pub destination_board: String,

    /// Search results page for the pair
    pub search: String,
}

impl RouteResponse {
    pub fn from_pair(pair: RoutePair) -> Self {
        Self {
            origin_board: board_path(&pair.origin),
            destination_board: board_path(&pair.destination),
            search: search_path(&pair),
            origin: pair.origin,
            destination: pair.destination,
        }
    }
}

/// Request for a fare estimate.
///
/// The distance is kept as text so that a missing or unreadable value
/// yields an empty estimate rather than a rejected request.
#[derive(Debug, Default, Deserialize)]
pub struct FareRequest {
    /// Distance in kilometres
    pub distance: Option<String>,

    /// Service class tag, e.g. "KSRTC"
    pub class: Option<String>,
}

impl FareRequest {
    /// The distance, if present and numeric.
    pub fn distance_km(&self) -> Option<f64> {
        self.distance.as_deref()?.trim().parse().ok()
    }

    /// The requested service class, defaulting to private.
    pub fn service_class(&self) -> ServiceClass {
        self.class
            .as_deref()
            .map_or(ServiceClass::Private, ServiceClass::from_tag)
    }
}

/// Fare estimate. Fares are `null` when no estimate is available.
#[derive(Debug, Serialize)]
pub struct FareResponse {
    pub distance_km: Option<f64>,
    pub class: ServiceClass,
    pub tier: FareTier,

    /// Fare for the requested class
    pub fare: Option<u32>,

    /// Fares for both tiers
    pub quote: Option<FareQuote>,
}

/// Request to normalize a timing.
#[derive(Debug, Default, Deserialize)]
pub struct TimeRequest {
    #[serde(default)]
    pub value: String,
}

/// A timing in display form and as minutes since midnight.
#[derive(Debug, Serialize)]
pub struct TimeResponse {
    pub display: String,
    pub minutes: Option<u32>,
}

/// Request for the depot directory.
#[derive(Debug, Default, Deserialize)]
pub struct DepotsRequest {
    /// Filter by depot or district name
    pub q: Option<String>,
}

/// The whole depot directory.
#[derive(Debug, Serialize)]
pub struct DistrictsResponse<'a> {
    pub districts: &'a [District],
}

/// Depots matching a filter.
#[derive(Debug, Serialize)]
pub struct DepotSearchResponse<'a> {
    pub depots: Vec<DepotMatch<'a>>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

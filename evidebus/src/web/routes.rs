//! HTTP route handlers.

use std::path::Path;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::domain::{to_display, to_minutes};
use crate::search::{UnresolvedRoute, match_stops_limited, resolve_route};
use crate::sitemap::{SitemapError, enumerate_urls, render_sitemap_today};

use super::dto::*;
use super::state::AppState;

/// Default number of stop search results.
const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Upper bound on stop search results.
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stops", get(list_stops))
        .route("/api/stops/search", get(search_stops))
        .route("/api/route", get(route))
        .route("/api/fare", get(fare))
        .route("/api/time", get(time))
        .route("/api/depots", get(depots))
        .route("/sitemap.xml", get(sitemap))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Every known stop, sorted unless `sorted=false`.
async fn list_stops(
    State(state): State<AppState>,
    Query(req): Query<StopListRequest>,
) -> Json<StopListResponse> {
    let stops = if req.sorted.unwrap_or(true) {
        state.gazetteer.stops()
    } else {
        state.gazetteer.unsorted()
    };

    Json(StopListResponse {
        count: stops.len(),
        stops: stops.to_vec(),
    })
}

/// Autocomplete: stops whose name contains the query.
async fn search_stops(
    State(state): State<AppState>,
    Query(req): Query<StopSearchRequest>,
) -> Json<StopSearchResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_LIMIT);
    let stops = match_stops_limited(&state.gazetteer, &req.q, limit)
        .into_iter()
        .cloned()
        .collect();

    Json(StopSearchResponse { stops })
}

/// Resolve an exact origin/destination pair.
async fn route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let pair = resolve_route(&state.gazetteer, &req.from, &req.to)?;
    Ok(Json(RouteResponse::from_pair(pair)))
}

/// Fare estimate for a distance and service class.
async fn fare(State(state): State<AppState>, Query(req): Query<FareRequest>) -> Json<FareResponse> {
    let distance_km = req.distance_km();
    let class = req.service_class();
    let quote = distance_km.and_then(|d| state.fares.quote(d));
    let fare = distance_km.and_then(|d| state.fares.estimate(d, &class));

    Json(FareResponse {
        distance_km,
        tier: class.tier(),
        class,
        fare,
        quote,
    })
}

/// Display form and minute value of a timing.
async fn time(Query(req): Query<TimeRequest>) -> Json<TimeResponse> {
    Json(TimeResponse {
        display: to_display(&req.value),
        minutes: to_minutes(&req.value),
    })
}

/// Depot directory, optionally filtered.
async fn depots(State(state): State<AppState>, Query(req): Query<DepotsRequest>) -> Response {
    match req.q {
        Some(q) => Json(DepotSearchResponse {
            depots: state.depots.search(&q),
        })
        .into_response(),
        None => Json(DistrictsResponse {
            districts: state.depots.districts(),
        })
        .into_response(),
    }
}

/// The sitemap document, dated today.
async fn sitemap(State(state): State<AppState>) -> Result<Response, AppError> {
    let entries = enumerate_urls(
        &state.sitemap,
        &state.pages,
        &state.gazetteer,
        &state.popular_routes,
    );
    let xml = render_sitemap_today(&entries)?;

    Ok(([(header::CONTENT_TYPE, "application/xml")], xml).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Internal { message: String },
}

impl From<UnresolvedRoute> for AppError {
    fn from(e: UnresolvedRoute) -> Self {
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl From<SitemapError> for AppError {
    fn from(e: SitemapError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound { message } => {
                warn!(%message, "not found");
                (StatusCode::NOT_FOUND, message)
            }
            AppError::Internal { message } => {
                error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

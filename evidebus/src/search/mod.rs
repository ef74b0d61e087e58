//! Stop lookup and route resolution.
//!
//! Matching is a plain case-insensitive substring test over the
//! gazetteer's sorted listing; there is no fuzzy or edit-distance
//! scoring. Route resolution only checks that both endpoints are known
//! stops. It does not reject a route whose origin and destination are
//! the same.

use crate::domain::{RoutePair, StopName};
use crate::gazetteer::Gazetteer;

/// Why a route could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnresolvedRoute {
    /// The origin is not a known stop
    #[error("unknown origin stop: {0:?}")]
    UnknownOrigin(String),

    /// The destination is not a known stop
    #[error("unknown destination stop: {0:?}")]
    UnknownDestination(String),
}

/// Stops whose name contains `query`, ignoring case.
///
/// Results keep the gazetteer's sorted order. An empty query matches
/// every stop.
///
/// # Examples
///
/// ```
/// use evidebus::gazetteer::Gazetteer;
/// use evidebus::search::match_stops;
///
/// let gazetteer = Gazetteer::new(["THRISSUR", "KOZHIKODE", "KOZHENCHERRY"]);
/// let found: Vec<_> = match_stops(&gazetteer, "koz").iter().map(|s| s.as_str()).collect();
/// assert_eq!(found, vec!["KOZHENCHERRY", "KOZHIKODE"]);
/// ```
pub fn match_stops<'a>(gazetteer: &'a Gazetteer, query: &str) -> Vec<&'a StopName> {
    matching(gazetteer, query).collect()
}

/// Like [`match_stops`], but returns at most `limit` stops.
pub fn match_stops_limited<'a>(
    gazetteer: &'a Gazetteer,
    query: &str,
    limit: usize,
) -> Vec<&'a StopName> {
    matching(gazetteer, query).take(limit).collect()
}

fn matching<'a>(gazetteer: &'a Gazetteer, query: &str) -> impl Iterator<Item = &'a StopName> {
    let needle = query.to_lowercase();
    gazetteer
        .stops()
        .iter()
        .filter(move |stop| needle.is_empty() || stop.as_str().to_lowercase().contains(&needle))
}

/// Resolve a pair of exact stop names into a route.
///
/// Both names must match a gazetteer entry exactly, including case.
/// The origin is checked first.
///
/// # Examples
///
/// ```
/// use evidebus::gazetteer::Gazetteer;
/// use evidebus::search::{UnresolvedRoute, resolve_route};
///
/// let gazetteer = Gazetteer::new(["ALUVA", "MUNNAR"]);
/// let route = resolve_route(&gazetteer, "ALUVA", "MUNNAR").unwrap();
/// assert_eq!(route.origin.as_str(), "ALUVA");
///
/// assert_eq!(
///     resolve_route(&gazetteer, "aluva", "MUNNAR"),
///     Err(UnresolvedRoute::UnknownOrigin("aluva".into()))
/// );
/// ```
pub fn resolve_route(
    gazetteer: &Gazetteer,
    from: &str,
    to: &str,
) -> Result<RoutePair, UnresolvedRoute> {
    let origin = gazetteer
        .get(from)
        .ok_or_else(|| UnresolvedRoute::UnknownOrigin(from.to_string()))?;
    let destination = gazetteer
        .get(to)
        .ok_or_else(|| UnresolvedRoute::UnknownDestination(to.to_string()))?;
    Ok(RoutePair::new(origin.clone(), destination.clone()))
}

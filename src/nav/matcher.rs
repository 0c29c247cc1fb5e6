//! URL matching.
//!
//! The inverse of resolution: given a concrete path (optionally with a query
//! string) find the catalog route it belongs to and capture its placeholders.

use super::params::{route_params, RawRouteParams, RouteParams};
use super::route::{Route, Segment, SEPARATOR};

/// Query key carrying an optional lobby id on shareable links.
pub const LOBBY_ID_QUERY: &str = "lobbyId";

/// Result of matching a URL against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: Route,

    /// Captured placeholder values, percent-decoded
    pub params: RawRouteParams,

    /// `lobbyId` query value, when present and numeric
    pub lobby_id: Option<i64>,
}

impl RouteMatch {
    /// Typed parameters for this match.
    pub fn route_params(&self) -> RouteParams {
        route_params(&self.params)
    }
}

/// Match a URL path against every catalog route.
///
/// Routes without placeholders are tried first, so a literal route always
/// wins over a parametrized one of the same shape.
pub fn match_path(url: &str) -> Option<RouteMatch> {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    };

    let segments: Vec<&str> = path.split(SEPARATOR).filter(|s| !s.is_empty()).collect();

    let (literal, parametrized): (Vec<Route>, Vec<Route>) =
        Route::ALL.into_iter().partition(Route::is_static);

    let (route, params) = literal
        .into_iter()
        .chain(parametrized)
        .find_map(|route| capture(route, &segments).map(|params| (route, params)))?;

    let lobby_id = query.and_then(lobby_id_from_query);
    tracing::trace!(route = %route, url, "matched route");

    Some(RouteMatch {
        route,
        params,
        lobby_id,
    })
}

fn capture(route: Route, segments: &[&str]) -> Option<RawRouteParams> {
    let template = route.template();
    if template.segments.len() != segments.len() {
        return None;
    }

    let mut params = RawRouteParams::new();
    for (expected, actual) in template.segments.iter().zip(segments) {
        match expected {
            Segment::Literal(text) if text.as_str() == *actual => {}
            Segment::Literal(_) => return None,
            Segment::Param(name) => params.set(name, decode(actual)),
        }
    }
    Some(params)
}

fn lobby_id_from_query(query: &str) -> Option<i64> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == LOBBY_ID_QUERY)
        .and_then(|(_, value)| decode(value).trim().parse().ok())
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

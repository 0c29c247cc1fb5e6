//! Path resolution.
//!
//! Turns a route plus an argument bag into a concrete absolute path. A route
//! matches only when the supplied argument names are exactly its placeholder
//! names: missing and extra arguments are both rejected.

use std::collections::BTreeMap;
use std::fmt;

use super::route::{Route, Segment, SEPARATOR};

/// Arguments for path resolution, keyed by placeholder name.
///
/// Values are stringified on insertion and substituted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteArgs {
    values: BTreeMap<String, String>,
}

impl RouteArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        self.values.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for RouteArgs {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

/// Resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No candidate's placeholders equal the supplied argument names.
    ///
    /// Always a caller bug: a helper and the catalog have drifted apart, or
    /// the wrong route was used.
    #[error("no matching route among [{}] for arguments {supplied:?}", format_routes(.routes))]
    NoMatchingRoute {
        routes: Vec<Route>,
        supplied: Vec<String>,
    },
}

fn format_routes(routes: &[Route]) -> String {
    routes
        .iter()
        .map(Route::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve a single route.
///
/// `None` and an empty [`RouteArgs`] are equivalent.
pub fn resolve(route: Route, args: Option<&RouteArgs>) -> Result<String, RouteError> {
    resolve_first(&[route], args)
}

/// Resolve the first candidate whose placeholders exactly equal the supplied
/// argument names.
pub fn resolve_first(
    candidates: &[Route],
    args: Option<&RouteArgs>,
) -> Result<String, RouteError> {
    let empty = RouteArgs::new();
    let args = args.unwrap_or(&empty);

    for route in candidates {
        let template = route.template();
        if !template.accepts(args.keys()) {
            continue;
        }

        let mut path = String::new();
        for segment in &template.segments {
            path.push(SEPARATOR);
            match segment {
                Segment::Literal(text) => path.push_str(text),
                // accepts() guarantees every placeholder has a value
                Segment::Param(name) => path.push_str(args.get(name).unwrap_or_default()),
            }
        }
        if path.is_empty() {
            path.push(SEPARATOR);
        }

        tracing::trace!(route = %route, path = %path, "resolved route");
        return Ok(path);
    }

    let err = RouteError::NoMatchingRoute {
        routes: candidates.to_vec(),
        supplied: args.keys().map(str::to_string).collect(),
    };
    tracing::error!(error = %err, "route resolution failed");
    Err(err)
}

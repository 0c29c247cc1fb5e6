//! Route catalog.
//!
//! Every navigable destination in the client is a member of [`Route`]. Each
//! member maps to a `/`-delimited template; segments starting with `:` are
//! named placeholders bound at resolution time.
//!
//! Templates are parsed once into [`RouteTemplate`] descriptors held by a
//! process-wide table, so resolution never re-scans the template string.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use once_cell::sync::Lazy;

/// Marker that prefixes a placeholder segment.
pub const PARAM_MARKER: char = ':';

/// Path separator used by templates and resolved paths.
pub const SEPARATOR: char = '/';

/// All client routes.
///
/// The template strings are the contract shared by link generation and URL
/// matching. Changing one changes every caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Route {
    Home,
    LobbySearch,
    LobbyWait,
    LobbyMain,
    Board,
    UserLogin,
    /// A specific lobby's waiting room
    LobbyInst,
    /// A specific game board
    GameInst,
}

impl Route {
    /// Every member of the catalog, in declaration order.
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::LobbySearch,
        Route::LobbyWait,
        Route::LobbyMain,
        Route::Board,
        Route::UserLogin,
        Route::LobbyInst,
        Route::GameInst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "app/index",
            Self::LobbySearch => "app/LobbySearch",
            Self::LobbyWait => "app/LobbyWait",
            Self::LobbyMain => "app/Lobby",
            Self::Board => "app/board",
            Self::UserLogin => "app/UserLogin",
            Self::LobbyInst => "app/LobbyWait/:lobby",
            Self::GameInst => "app/board/:game",
        }
    }

    /// Get the parsed descriptor for this route.
    pub fn template(&self) -> &'static RouteTemplate {
        // The table is built from `Route::ALL`, so every member is present.
        &ROUTE_TABLE[self]
    }

    /// Look a route up by its template string.
    pub fn from_template(template: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|r| r.as_str() == template)
    }

    /// Names of the placeholders this route requires.
    pub fn required_params(&self) -> &'static BTreeSet<String> {
        &self.template().required
    }

    /// Check if the route has no placeholders.
    pub fn is_static(&self) -> bool {
        self.template().required.is_empty()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One segment of a route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Passed through unchanged
    Literal(String),
    /// Placeholder name, without the marker
    Param(String),
}

impl Segment {
    /// Classify a raw template segment.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(PARAM_MARKER) {
            Some(name) => Self::Param(name.to_string()),
            None => Self::Literal(raw.to_string()),
        }
    }

    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::Param(name) => Some(name),
            Self::Literal(_) => None,
        }
    }
}

/// Parsed form of a route template.
#[derive(Debug, Clone)]
pub struct RouteTemplate {
    pub route: Route,

    /// Template text as declared
    pub pattern: &'static str,

    /// Segments in path order
    pub segments: Vec<Segment>,

    /// Placeholder names the route needs, marker stripped
    pub required: BTreeSet<String>,
}

impl RouteTemplate {
    pub fn new(route: Route) -> Self {
        let pattern = route.as_str();
        let segments: Vec<Segment> = pattern
            .split(SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(Segment::parse)
            .collect();
        let required = segments
            .iter()
            .filter_map(Segment::param_name)
            .map(str::to_string)
            .collect();

        Self {
            route,
            pattern,
            segments,
            required,
        }
    }

    /// Exact-set match: same size and every required name supplied.
    pub fn accepts<'a, I>(&self, supplied: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let supplied: BTreeSet<&str> = supplied.into_iter().collect();
        supplied.len() == self.required.len()
            && self.required.iter().all(|name| supplied.contains(name.as_str()))
    }
}

/// Process-wide route table, built on first use and read-only afterwards.
pub static ROUTE_TABLE: Lazy<HashMap<Route, RouteTemplate>> = Lazy::new(|| {
    Route::ALL
        .into_iter()
        .map(|route| (route, RouteTemplate::new(route)))
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_segment_parse() {
        assert_eq!(Segment::parse("board"), Segment::Literal("board".to_string()));
        assert_eq!(Segment::parse(":game"), Segment::Param("game".to_string()));
    }

    #[test]
    fn test_template_segments() {
        let t = Route::GameInst.template();
        assert_eq!(
            t.segments,
            vec![
                Segment::Literal("app".to_string()),
                Segment::Literal("board".to_string()),
                Segment::Param("game".to_string()),
            ]
        );
        assert_eq!(t.required.len(), 1);
        assert!(t.required.contains("game"));
    }

    #[test]
    fn test_static_routes() {
        for route in Route::ALL {
            let expected = !matches!(route, Route::LobbyInst | Route::GameInst);
            assert_eq!(route.is_static(), expected, "{}", route);
        }
    }

    #[test]
    fn test_accepts_exact_set() {
        let t = Route::LobbyInst.template();
        assert!(t.accepts(["lobby"]));
        assert!(!t.accepts(std::iter::empty()));
        assert!(!t.accepts(["lobby", "game"]));
        assert!(!t.accepts(["game"]));

        let home = Route::Home.template();
        assert!(home.accepts(std::iter::empty()));
        assert!(!home.accepts(["lobby"]));
    }

    #[test]
    fn test_from_template() {
        assert_eq!(Route::from_template("app/board/:game"), Some(Route::GameInst));
        assert_eq!(Route::from_template("app/nowhere"), None);
        for route in Route::ALL {
            assert_eq!(Route::from_template(&route.to_string()), Some(route));
        }
    }
}

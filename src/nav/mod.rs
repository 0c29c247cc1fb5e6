//! Client navigation.
//!
//! - `route` - the route catalog and its parsed templates
//! - `resolve` - exact-match path resolution
//! - `params` - typed parsing of raw URL parameters
//! - `matcher` - URL to route matching
//! - `helpers` - per-route link builders used by views
//!
//! # Usage
//!
//! ```rust
//! use tilewords_client::nav::{get_lobby_path, match_path, resolve, Route, RouteArgs};
//!
//! let args = RouteArgs::new().with("game", 42);
//! assert_eq!(resolve(Route::GameInst, Some(&args)).unwrap(), "/app/board/42");
//!
//! let link = get_lobby_path(Some(5));
//! assert_eq!(link, "/app/LobbyWait/lobby?lobbyId=5");
//!
//! let matched = match_path(&link).unwrap();
//! assert_eq!(matched.route, Route::LobbyInst);
//! assert_eq!(matched.lobby_id, Some(5));
//! ```

pub mod helpers;
pub mod matcher;
pub mod params;
pub mod resolve;
pub mod route;

pub use helpers::{
    get_board_path, get_game_path, get_lobby_main_path, get_lobby_path, get_lobby_search_path,
    get_lobby_wait_path, get_path, get_user_login_path,
};
pub use matcher::{match_path, RouteMatch, LOBBY_ID_QUERY};
pub use params::{route_params, RawRouteParams, RouteParams};
pub use resolve::{resolve, resolve_first, RouteArgs, RouteError};
pub use route::{Route, RouteTemplate, Segment, ROUTE_TABLE};

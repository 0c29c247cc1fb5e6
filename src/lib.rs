//! TileWords Client Library
//!
//! Navigation and move encoding for the TileWords web client.
//!
//! # Overview
//!
//! - **Route Catalog** - A closed set of route templates (`app/board/:game`, ...)
//!   parsed once at startup.
//!
//! - **Path Resolution** - Turns a route and its arguments into a concrete path.
//!   Arguments must match the template's placeholders exactly.
//!
//! - **Route Parameters** - Converts raw URL parameters into typed values. Never
//!   fails; missing or malformed input gets a default.
//!
//! - **Route Helpers** - One link builder per destination, used by views.
//!
//! - **Moves** - Encodes game actions into the single `MoveInput` wire record
//!   and sends it through a GraphQL executor supplied by the caller.
//!
//! # Design Principles
//!
//! 1. **Exact matches only** - A route resolves only when every placeholder is
//!    supplied and nothing else is. A mismatch is a bug in the caller.
//!
//! 2. **Pure by default** - Everything except move submission is synchronous
//!    and side-effect free.
//!
//! 3. **No transport** - This crate never opens a connection. Moves go through
//!    a [`moves::MutationExecutor`] implementation.
//!
//! # Example
//!
//! ```rust
//! use tilewords_client::nav::{get_game_path, route_params, match_path, Route};
//! use tilewords_client::moves::{Player, Scramble, LOBBY_SENTINEL};
//!
//! let link = get_game_path(Some(7));
//! assert_eq!(link, "/app/board/game?lobbyId=7");
//!
//! let matched = match_path("/app/board/42").unwrap();
//! assert_eq!(matched.route, Route::GameInst);
//! assert_eq!(route_params(&matched.params).game, "42");
//!
//! let scramble = Scramble::new(Player::new(1), chrono::Utc::now());
//! let record = tilewords_client::moves::encode_scramble(&scramble);
//! assert_eq!(record.lobby_id, LOBBY_SENTINEL);
//! assert_eq!(record.point_value, 0);
//! ```

pub mod config;
pub mod moves;
pub mod nav;

pub use config::{init_logging, ClientConfig, ConfigError};
pub use moves::{GameMutations, MoveAction, MoveError, MoveInput, MutationExecutor};
pub use nav::{resolve, route_params, Route, RouteArgs, RouteError, RouteParams};

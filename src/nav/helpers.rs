//! Route helpers.
//!
//! The sanctioned way for views to build link targets. Each helper binds one
//! catalog route to arguments that satisfy it, so resolution cannot fail
//! unless the catalog and the helpers drift apart. That case is a bug and
//! panics.

use super::matcher::LOBBY_ID_QUERY;
use super::params::{GAME, LOBBY};
use super::resolve::{resolve, RouteArgs};
use super::route::Route;

fn expect_path(route: Route, args: Option<&RouteArgs>) -> String {
    match resolve(route, args) {
        Ok(path) => path,
        Err(err) => panic!("route helper out of sync with catalog: {}", err),
    }
}

/// Append `?lobbyId=<id>` when an id is given. Zero counts as no id.
fn with_lobby_query(path: String, lobby_id: Option<i64>) -> String {
    match lobby_id {
        Some(id) if id != 0 => format!("{}?{}={}", path, LOBBY_ID_QUERY, id),
        _ => path,
    }
}

/// Resolve a route that takes no placeholders.
///
/// # Panics
///
/// Panics if `route` has placeholders.
pub fn get_path(route: Route) -> String {
    expect_path(route, None)
}

/// Lobby waiting room link, e.g. `/app/LobbyWait/lobby?lobbyId=5`.
pub fn get_lobby_path(lobby_id: Option<i64>) -> String {
    let args = RouteArgs::new().with(LOBBY, "lobby");
    with_lobby_query(expect_path(Route::LobbyInst, Some(&args)), lobby_id)
}

/// Game board link, e.g. `/app/board/game?lobbyId=5`.
pub fn get_game_path(lobby_id: Option<i64>) -> String {
    let args = RouteArgs::new().with(GAME, "game");
    with_lobby_query(expect_path(Route::GameInst, Some(&args)), lobby_id)
}

pub fn get_lobby_main_path() -> String {
    get_path(Route::LobbyMain)
}

pub fn get_lobby_search_path() -> String {
    get_path(Route::LobbySearch)
}

pub fn get_lobby_wait_path() -> String {
    get_path(Route::LobbyWait)
}

pub fn get_board_path() -> String {
    get_path(Route::Board)
}

pub fn get_user_login_path() -> String {
    get_path(Route::UserLogin)
}

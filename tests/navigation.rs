use pretty_assertions::assert_eq;
use tilewords_client::nav::{
    get_board_path, get_game_path, get_lobby_main_path, get_lobby_path, get_lobby_search_path,
    get_lobby_wait_path, get_user_login_path, match_path, resolve, resolve_first, route_params,
    RawRouteParams, Route, RouteArgs, RouteError, RouteParams,
};

#[test]
fn every_static_route_resolves_to_itself() {
    for route in Route::ALL {
        if !route.is_static() {
            continue;
        }
        assert_eq!(resolve(route, None), Ok(format!("/{}", route)));
    }
}

#[test]
fn single_placeholder_routes_need_exact_name() {
    for route in Route::ALL {
        if route.required_params().len() != 1 {
            continue;
        }
        let name = route.required_params().iter().next().unwrap();

        let ok = RouteArgs::new().with(name.as_str(), 1);
        assert!(resolve(route, Some(&ok)).is_ok(), "{}", route);

        let extra = ok.clone().with("unrelated", 2);
        assert!(matches!(
            resolve(route, Some(&extra)),
            Err(RouteError::NoMatchingRoute { .. })
        ));

        assert!(resolve(route, None).is_err());
    }
}

#[test]
fn game_instance_substitution() {
    let args = RouteArgs::new().with("game", 42);
    let path = resolve(Route::GameInst, Some(&args)).unwrap();
    assert_eq!(path, "/app/board/42");
    assert_eq!(path.split('/').collect::<Vec<_>>(), vec!["", "app", "board", "42"]);
}

#[test]
fn candidate_list_prefers_first_exact_match() {
    let args = RouteArgs::new().with("lobby", 8);
    let path = resolve_first(&[Route::GameInst, Route::LobbyInst], Some(&args)).unwrap();
    assert_eq!(path, "/app/LobbyWait/8");
}

#[test]
fn route_params_defaults() {
    assert_eq!(
        route_params(&RawRouteParams::default()),
        RouteParams {
            user_id: 0,
            lobby: String::new(),
            game: String::new(),
        }
    );

    let raw: RawRouteParams = [("userId", "7"), ("lobby", "abc")].into_iter().collect();
    assert_eq!(
        route_params(&raw),
        RouteParams {
            user_id: 7,
            lobby: "abc".to_string(),
            game: String::new(),
        }
    );
}

#[test]
fn lobby_link_query() {
    let plain = get_lobby_path(None);
    assert!(!plain.contains('?'));
    assert_eq!(get_lobby_path(Some(5)), format!("{}?lobbyId=5", plain));
}

#[test]
fn helper_links_match_back() {
    let links = [
        get_lobby_path(Some(2)),
        get_game_path(Some(2)),
        get_lobby_main_path(),
        get_lobby_search_path(),
        get_lobby_wait_path(),
        get_board_path(),
        get_user_login_path(),
    ];
    for link in links {
        assert!(match_path(&link).is_some(), "no match for {}", link);
    }

    let matched = match_path(&get_game_path(Some(2))).unwrap();
    assert_eq!(matched.route, Route::GameInst);
    assert_eq!(matched.lobby_id, Some(2));
    assert_eq!(matched.route_params().game, "game");
}

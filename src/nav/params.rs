//! Route parameter parsing.
//!
//! The router hands over whatever it captured from the URL as raw strings.
//! [`route_params`] turns that into typed values usable as query variables.
//! Parsing is total: bad or missing input falls back to a default, it never
//! fails.

use serde::{Deserialize, Serialize};

/// Parameter names recognised by the client routes.
pub const USER_ID: &str = "userId";
pub const LOBBY: &str = "lobby";
pub const GAME: &str = "game";

/// Raw parameters as captured from a URL. Not every route sets every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRouteParams {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub lobby: Option<String>,
    #[serde(default)]
    pub game: Option<String>,
}

impl RawRouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter by its URL name. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        match name {
            USER_ID => self.user_id = Some(value.into()),
            LOBBY => self.lobby = Some(value.into()),
            GAME => self.game = Some(value.into()),
            _ => {}
        }
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for RawRouteParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.set(name.as_ref(), value);
        }
        params
    }
}

/// Typed route parameters.
///
/// Field order is fixed: `user_id`, `lobby`, `game`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteParams {
    /// 0 when absent or not a number
    pub user_id: i64,
    /// Empty when absent
    pub lobby: String,
    /// Empty when absent
    pub game: String,
}

/// Normalize raw URL parameters. Pure and never fails.
pub fn route_params(raw: &RawRouteParams) -> RouteParams {
    RouteParams {
        user_id: raw.user_id.as_deref().map(parse_number).unwrap_or(0),
        lobby: raw.lobby.clone().unwrap_or_default(),
        game: raw.game.clone().unwrap_or_default(),
    }
}

fn parse_number(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_params() {
        assert_eq!(
            route_params(&RawRouteParams::new()),
            RouteParams {
                user_id: 0,
                lobby: String::new(),
                game: String::new(),
            }
        );
    }

    #[test]
    fn test_partial_params() {
        let raw = RawRouteParams {
            user_id: Some("7".to_string()),
            lobby: Some("abc".to_string()),
            game: None,
        };
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
    fn test_bad_user_id_defaults() {
        for bad in ["", "abc", "7x", "1.5"] {
            let raw: RawRouteParams = [(USER_ID, bad)].into_iter().collect();
            assert_eq!(route_params(&raw).user_id, 0, "{:?}", bad);
        }

        let raw: RawRouteParams = [(USER_ID, " 12 ")].into_iter().collect();
        assert_eq!(route_params(&raw).user_id, 12);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let raw: RawRouteParams = [("game", "g1"), ("other", "x")].into_iter().collect();
        assert_eq!(raw.game.as_deref(), Some("g1"));
        assert_eq!(raw.lobby, None);
    }

    #[test]
    fn test_deserialize_and_serialize() {
        let raw: RawRouteParams =
            serde_json::from_str(r#"{"userId": "3", "game": "42"}"#).unwrap();
        let params = route_params(&raw);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({"userId": 3, "lobby": "", "game": "42"})
        );
    }
}

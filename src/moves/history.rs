//! Lobby move history.
//!
//! Decoded form of the `lobby` query result. Moves come back as a union and
//! are told apart by their `__typename`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::types::{MoveType, TileType};

/// GraphQL query for a lobby's players and moves.
pub const LOBBY_MOVES_QUERY: &str = r#"query Lobby($lobbyId: Int!) {
  lobby(lobbyId: $lobbyId) {
    state
    maxUsers
    players {
      id
    }
    moves {
      __typename
      time
      moveType
      ... on DeselectTile {
        tiles {
          letter
          location
        }
      }
      ... on SelectTile {
        tiles {
          letter
          location
        }
      }
      ... on Submit {
        tiles {
          letter
          location
          value
        }
      }
      ... on SpawnTiles {
        player {
          id
        }
        tiles {
          letter
          location
          id
          value
          tileType
        }
      }
      player {
        id
      }
    }
  }
}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PlayerRef {
    pub id: i64,
}

/// Tile as reported in history. Which fields are present depends on the
/// move kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRecord {
    pub letter: String,
    pub location: i32,
    #[serde(default)]
    pub value: Option<i32>,
    #[serde(default)]
    pub tile_type: Option<TileType>,
    #[serde(default)]
    pub id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub time: DateTime<Utc>,
    pub move_type: MoveType,
    #[serde(default)]
    pub player: Option<PlayerRef>,
    #[serde(default)]
    pub tiles: Vec<TileRecord>,
}

/// One past move in a lobby.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "__typename")]
pub enum LobbyMove {
    Submit(MoveRecord),
    Scramble(MoveRecord),
    SelectTile(MoveRecord),
    DeselectTile(MoveRecord),
    SpawnTiles(MoveRecord),
}

impl LobbyMove {
    pub fn record(&self) -> &MoveRecord {
        match self {
            Self::Submit(r)
            | Self::Scramble(r)
            | Self::SelectTile(r)
            | Self::DeselectTile(r)
            | Self::SpawnTiles(r) => r,
        }
    }

    pub fn player_id(&self) -> Option<i64> {
        self.record().player.map(|p| p.id)
    }
}

/// A lobby with its full move list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyMoves {
    pub state: String,
    pub max_users: i32,
    #[serde(default)]
    pub players: Vec<PlayerRef>,
    #[serde(default)]
    pub moves: Vec<LobbyMove>,
}

impl LobbyMoves {
    /// Moves made by one player, oldest first as returned.
    pub fn moves_by(&self, player_id: i64) -> impl Iterator<Item = &LobbyMove> {
        self.moves
            .iter()
            .filter(move |m| m.player_id() == Some(player_id))
    }
}

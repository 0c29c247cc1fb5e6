//! Move actions.
//!
//! One struct per move variant, plus [`MoveAction`] as the sum over them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lobby a player belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbyRef {
    pub id: i64,
}

/// The acting player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    #[serde(default)]
    pub lobby: Option<LobbyRef>,
}

impl Player {
    pub fn new(id: i64) -> Self {
        Self { id, lobby: None }
    }

    pub fn in_lobby(mut self, lobby_id: i64) -> Self {
        self.lobby = Some(LobbyRef { id: lobby_id });
        self
    }

    pub fn lobby_id(&self) -> Option<i64> {
        self.lobby.map(|l| l.id)
    }
}

/// Board square type a tile sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TileType {
    #[default]
    Normal,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

/// A tile placed on or picked from the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub letter: String,
    pub value: i32,
    pub tile_type: TileType,
    /// Board cell index
    pub location: i32,
}

impl Tile {
    pub fn new(letter: impl Into<String>, value: i32, location: i32) -> Self {
        Self {
            letter: letter.into(),
            value,
            tile_type: TileType::Normal,
            location,
        }
    }

    pub fn with_type(mut self, tile_type: TileType) -> Self {
        self.tile_type = tile_type;
        self
    }
}

/// Move type tags as the server names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveType {
    Submit,
    Scramble,
    SelectTile,
    DeselectTile,
    /// Server-issued; never sent by the client
    SpawnTiles,
}

impl MoveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submit => "SUBMIT",
            Self::Scramble => "SCRAMBLE",
            Self::SelectTile => "SELECT_TILE",
            Self::DeselectTile => "DESELECT_TILE",
            Self::SpawnTiles => "SPAWN_TILES",
        }
    }
}

/// Word submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submit {
    pub player: Player,
    pub time: DateTime<Utc>,
    pub move_type: MoveType,
    pub tiles: Vec<Tile>,
    /// Score for the whole word
    pub point_value: i32,
}

impl Submit {
    pub fn new(player: Player, time: DateTime<Utc>, tiles: Vec<Tile>, point_value: i32) -> Self {
        Self {
            player,
            time,
            move_type: MoveType::Submit,
            tiles,
            point_value,
        }
    }
}

/// Shuffle the player's rack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    pub player: Player,
    pub time: DateTime<Utc>,
    pub move_type: MoveType,
}

impl Scramble {
    pub fn new(player: Player, time: DateTime<Utc>) -> Self {
        Self {
            player,
            time,
            move_type: MoveType::Scramble,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectTile {
    pub player: Player,
    pub time: DateTime<Utc>,
    pub move_type: MoveType,
    pub tiles: Vec<Tile>,
}

impl SelectTile {
    pub fn new(player: Player, time: DateTime<Utc>, tiles: Vec<Tile>) -> Self {
        Self {
            player,
            time,
            move_type: MoveType::SelectTile,
            tiles,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeselectTile {
    pub player: Player,
    pub time: DateTime<Utc>,
    pub move_type: MoveType,
    pub tiles: Vec<Tile>,
}

impl DeselectTile {
    pub fn new(player: Player, time: DateTime<Utc>, tiles: Vec<Tile>) -> Self {
        Self {
            player,
            time,
            move_type: MoveType::DeselectTile,
            tiles,
        }
    }
}

/// Any move the client can send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveAction {
    Submit(Submit),
    Scramble(Scramble),
    SelectTile(SelectTile),
    DeselectTile(DeselectTile),
}

impl MoveAction {
    pub fn player(&self) -> &Player {
        match self {
            Self::Submit(m) => &m.player,
            Self::Scramble(m) => &m.player,
            Self::SelectTile(m) => &m.player,
            Self::DeselectTile(m) => &m.player,
        }
    }

    /// The tag carried by the input, passed to the wire unchanged.
    pub fn move_type(&self) -> MoveType {
        match self {
            Self::Submit(m) => m.move_type,
            Self::Scramble(m) => m.move_type,
            Self::SelectTile(m) => m.move_type,
            Self::DeselectTile(m) => m.move_type,
        }
    }
}

impl From<Submit> for MoveAction {
    fn from(m: Submit) -> Self {
        Self::Submit(m)
    }
}

impl From<Scramble> for MoveAction {
    fn from(m: Scramble) -> Self {
        Self::Scramble(m)
    }
}

impl From<SelectTile> for MoveAction {
    fn from(m: SelectTile) -> Self {
        Self::SelectTile(m)
    }
}

impl From<DeselectTile> for MoveAction {
    fn from(m: DeselectTile) -> Self {
        Self::DeselectTile(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_lobby() {
        assert_eq!(Player::new(1).lobby_id(), None);
        assert_eq!(Player::new(1).in_lobby(3).lobby_id(), Some(3));
    }

    #[test]
    fn test_move_type_names() {
        for t in [
            MoveType::Submit,
            MoveType::Scramble,
            MoveType::SelectTile,
            MoveType::DeselectTile,
            MoveType::SpawnTiles,
        ] {
            assert_eq!(serde_json::to_value(t).unwrap(), serde_json::json!(t.as_str()));
        }
    }

    #[test]
    fn test_action_accessors() {
        let action: MoveAction = Scramble::new(Player::new(9), Utc::now()).into();
        assert_eq!(action.move_type(), MoveType::Scramble);
        assert_eq!(action.player().id, 9);
    }
}

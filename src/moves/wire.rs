//! Move wire encoding.
//!
//! Every move variant is flattened into a single [`MoveInput`] record. The
//! `moveType` field keeps the record a tagged union on the receiving side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{
    DeselectTile, MoveAction, MoveType, Player, Scramble, SelectTile, Submit, Tile, TileType,
};

/// `lobbyId` sent for a player that is not in a lobby.
pub const LOBBY_SENTINEL: i64 = -1;

/// Tile as sent over the wire. `point_value` is the tile's own `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileInput {
    pub letter: String,
    pub point_value: i32,
    pub tile_type: TileType,
    pub location: i32,
}

impl From<&Tile> for TileInput {
    fn from(tile: &Tile) -> Self {
        Self {
            letter: tile.letter.clone(),
            point_value: tile.value,
            tile_type: tile.tile_type,
            location: tile.location,
        }
    }
}

/// The single record sent for any move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveInput {
    pub player_id: i64,
    /// [`LOBBY_SENTINEL`] when the player has no lobby
    pub lobby_id: i64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub time: DateTime<Utc>,
    pub move_type: MoveType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiles: Option<Vec<TileInput>>,
    /// Move-level score, distinct from per-tile values
    pub point_value: i32,
}

impl MoveInput {
    fn for_player(player: &Player, time: DateTime<Utc>, move_type: MoveType) -> Self {
        Self {
            player_id: player.id,
            lobby_id: player.lobby_id().unwrap_or(LOBBY_SENTINEL),
            time,
            move_type,
            tiles: None,
            point_value: 0,
        }
    }

    fn with_tiles(mut self, tiles: &[Tile]) -> Self {
        self.tiles = Some(tiles.iter().map(TileInput::from).collect());
        self
    }
}

pub fn encode_submit(input: &Submit) -> MoveInput {
    let mut record = MoveInput::for_player(&input.player, input.time, input.move_type)
        .with_tiles(&input.tiles);
    record.point_value = input.point_value;
    record
}

/// Scrambles carry no tiles and score nothing.
pub fn encode_scramble(input: &Scramble) -> MoveInput {
    MoveInput::for_player(&input.player, input.time, input.move_type)
}

pub fn encode_select(input: &SelectTile) -> MoveInput {
    MoveInput::for_player(&input.player, input.time, input.move_type).with_tiles(&input.tiles)
}

pub fn encode_deselect(input: &DeselectTile) -> MoveInput {
    MoveInput::for_player(&input.player, input.time, input.move_type).with_tiles(&input.tiles)
}

impl MoveAction {
    /// Encode with the variant's encoder.
    pub fn to_wire(&self) -> MoveInput {
        match self {
            Self::Submit(m) => encode_submit(m),
            Self::Scramble(m) => encode_scramble(m),
            Self::SelectTile(m) => encode_select(m),
            Self::DeselectTile(m) => encode_deselect(m),
        }
    }
}

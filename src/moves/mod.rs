//! Game moves.
//!
//! - `types` - move actions as the board produces them
//! - `wire` - flattening every action into one `MoveInput` record
//! - `client` - sending moves through a GraphQL executor
//! - `history` - decoding a lobby's past moves
//!
//! ```text
//!  Submit ──────┐
//!  Scramble ────┤  encode_*   ┌───────────┐  makeMove   ┌──────────────────┐
//!  SelectTile ──┼────────────▶│ MoveInput │────────────▶│ MutationExecutor │
//!  DeselectTile ┘             └───────────┘             └──────────────────┘
//! ```

pub mod client;
pub mod history;
pub mod types;
pub mod wire;

pub use client::{
    GameMutations, GraphQlRequest, MakeMove, MoveError, MutationExecutor, TransportError,
    MAKE_MOVE_MUTATION,
};
pub use history::{LobbyMove, LobbyMoves, MoveRecord, PlayerRef, TileRecord, LOBBY_MOVES_QUERY};
pub use types::{
    DeselectTile, LobbyRef, MoveAction, MoveType, Player, Scramble, SelectTile, Submit, Tile,
    TileType,
};
pub use wire::{
    encode_deselect, encode_scramble, encode_select, encode_submit, MoveInput, TileInput,
    LOBBY_SENTINEL,
};

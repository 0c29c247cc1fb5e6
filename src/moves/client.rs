//! Move submission.
//!
//! Each submit function encodes one move and issues exactly one `makeMove`
//! mutation through the injected [`MutationExecutor`]. Retries, caching,
//! ordering and timeouts are the executor's business, not ours.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::history::{LobbyMoves, LOBBY_MOVES_QUERY};
use super::types::{DeselectTile, MoveAction, Scramble, SelectTile, Submit};
use super::wire::{encode_deselect, encode_scramble, encode_select, encode_submit, MoveInput};

/// The one mutation every move goes through.
pub const MAKE_MOVE_MUTATION: &str = r#"mutation MakeMove($input: MoveInput!) {
  makeMove(input: $input)
}"#;

/// An operation handed to the executor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub operation_name: &'static str,
    pub query: &'static str,
    pub variables: serde_json::Value,
}

/// Transport failures reported by an executor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("server returned errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),
}

/// Executes GraphQL operations against the game server.
///
/// Implementations return the response's `data` payload.
#[async_trait]
pub trait MutationExecutor: Send + Sync {
    async fn execute(&self, request: GraphQlRequest) -> Result<serde_json::Value, TransportError>;
}

/// Move submission errors.
#[derive(Debug, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("lobby {0} not found")]
    LobbyNotFound(i64),
}

/// Result of the `makeMove` mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeMove {
    pub make_move: bool,
}

#[derive(Debug, Deserialize)]
struct LobbyResponse {
    lobby: Option<LobbyMoves>,
}

/// Game move operations bound to an executor.
#[derive(Debug, Clone)]
pub struct GameMutations<E> {
    executor: E,
}

impl<E: MutationExecutor> GameMutations<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub async fn submit_move(&self, input: &Submit) -> Result<MakeMove, MoveError> {
        self.send(encode_submit(input)).await
    }

    /// Send a scramble. Named after the rack shuffle it triggers.
    pub async fn randomize_move(&self, input: &Scramble) -> Result<MakeMove, MoveError> {
        self.send(encode_scramble(input)).await
    }

    pub async fn select_move(&self, input: &SelectTile) -> Result<MakeMove, MoveError> {
        self.send(encode_select(input)).await
    }

    pub async fn deselect_move(&self, input: &DeselectTile) -> Result<MakeMove, MoveError> {
        self.send(encode_deselect(input)).await
    }

    /// Send any move through its variant's encoder.
    pub async fn make_move(&self, action: &MoveAction) -> Result<MakeMove, MoveError> {
        self.send(action.to_wire()).await
    }

    /// Fetch a lobby's players and move history.
    pub async fn fetch_lobby_moves(&self, lobby_id: i64) -> Result<LobbyMoves, MoveError> {
        let request = GraphQlRequest {
            operation_name: "Lobby",
            query: LOBBY_MOVES_QUERY,
            variables: json!({ "lobbyId": lobby_id }),
        };
        let data = self.executor.execute(request).await?;
        let response: LobbyResponse = serde_json::from_value(data)?;
        response.lobby.ok_or(MoveError::LobbyNotFound(lobby_id))
    }

    async fn send(&self, input: MoveInput) -> Result<MakeMove, MoveError> {
        tracing::debug!(
            player_id = input.player_id,
            lobby_id = input.lobby_id,
            move_type = input.move_type.as_str(),
            "sending move"
        );

        let request = GraphQlRequest {
            operation_name: "MakeMove",
            query: MAKE_MOVE_MUTATION,
            variables: json!({ "input": serde_json::to_value(&input)? }),
        };

        let data = self.executor.execute(request).await.map_err(|err| {
            tracing::warn!(error = %err, "move rejected by transport");
            err
        })?;
        Ok(serde_json::from_value(data)?)
    }
}

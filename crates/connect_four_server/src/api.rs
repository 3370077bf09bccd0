//! JSON-over-HTTP API for creating games and playing moves.

use crate::store::{GameId, GameStore, StoreError};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use connect_four::{Cell, Game, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Request body for creating a game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CreateGameRequest {
    /// Kind of opponent for player 1.
    pub opponent_type: connect_four::OpponentType,
}

/// Request body for making a move.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Numeric player id (1 or 2).
    pub player: u8,
    /// Target column, 0-based.
    pub col: usize,
}

/// Terminal result on the wire: the winning piece number, or `"draw"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The given piece (1 or 2) made four in a row.
    Piece(u8),
    /// The board filled with no winner.
    Draw,
}

impl Serialize for Winner {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Winner::Piece(piece) => serializer.serialize_u8(*piece),
            Winner::Draw => serializer.serialize_str("draw"),
        }
    }
}

impl<'de> Deserialize<'de> for Winner {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Piece(u8),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Piece(piece @ (1 | 2)) => Ok(Winner::Piece(piece)),
            Raw::Piece(piece) => Err(serde::de::Error::custom(format!(
                "invalid winner piece: {piece}"
            ))),
            Raw::Text(text) if text == "draw" => Ok(Winner::Draw),
            Raw::Text(text) => Err(serde::de::Error::custom(format!(
                "invalid winner marker: {text:?}"
            ))),
        }
    }
}

/// Complete state of one game as exposed over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Opaque game identifier.
    pub game_id: GameId,
    /// 6x7 grid with row 0 at the top: 0 empty, 1 and 2 player pieces.
    pub board: Vec<Vec<u8>>,
    /// Player whose turn it is (1 or 2).
    pub current_player: u8,
    /// Kind of opponent chosen at creation.
    pub opponent_type: connect_four::OpponentType,
    /// True once the game ended in a win or draw.
    pub game_over: bool,
    /// Winner piece or draw marker; absent while in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
}

impl GameSnapshot {
    /// Builds a wire snapshot from the engine state.
    pub fn from_game(game_id: GameId, game: &Game) -> Self {
        let board = game
            .board()
            .grid()
            .iter()
            .map(|row| row.iter().map(|&cell| piece_number(cell)).collect())
            .collect();

        let (game_over, winner) = match game.outcome() {
            Outcome::InProgress => (false, None),
            Outcome::Won(player) => (true, Some(Winner::Piece(player_number(player)))),
            Outcome::Draw => (true, Some(Winner::Draw)),
        };

        Self {
            game_id,
            board,
            current_player: player_number(game.current_player()),
            opponent_type: game.opponent_type(),
            game_over,
            winner,
        }
    }
}

fn piece_number(cell: Cell) -> u8 {
    match cell {
        Cell::Empty => 0,
        Cell::Occupied(player) => player_number(player),
    }
}

fn player_number(player: Player) -> u8 {
    match player {
        Player::One => 1,
        Player::Two => 2,
    }
}

fn player_from_number(number: u8) -> Option<Player> {
    match number {
        1 => Some(Player::One),
        2 => Some(Player::Two),
        _ => None,
    }
}

/// Errors returned to API clients as `{"detail": ...}` bodies.
#[derive(Debug, Clone, derive_more::Display)]
pub enum ApiError {
    /// No game under the requested identifier.
    #[display("Game not found")]
    GameNotFound,

    /// The `player` field was not 1 or 2.
    #[display("Invalid player: {}", _0)]
    InvalidPlayer(u8),

    /// The store rejected the move.
    #[display("{}", _0)]
    Store(StoreError),
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::GameNotFound | ApiError::Store(StoreError::GameNotFound) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Store(StoreError::NoMoveAvailable) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidPlayer(_) | ApiError::Store(StoreError::Move(_)) => {
                StatusCode::BAD_REQUEST
            }
        };
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

/// Builds the application router backed by `store`.
pub fn router(store: GameStore) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/games", post(create_game))
        .route("/games/{id}", get(get_game))
        .route("/games/{id}/move", post(make_move))
        .with_state(store)
}

/// Welcome endpoint.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to the Connect Four API" }))
}

/// Creates a new game.
#[instrument(skip(store, req))]
async fn create_game(
    State(store): State<GameStore>,
    Json(req): Json<CreateGameRequest>,
) -> (StatusCode, Json<GameSnapshot>) {
    info!(opponent = ?req.opponent_type, "Creating game");
    let (id, game) = store.create_game(req.opponent_type);
    (StatusCode::CREATED, Json(GameSnapshot::from_game(id, &game)))
}

/// Retrieves the current state of a game.
#[instrument(skip(store))]
async fn get_game(
    State(store): State<GameStore>,
    Path(id): Path<GameId>,
) -> Result<Json<GameSnapshot>, ApiError> {
    debug!(game_id = %id, "Fetching game");
    let game = store.snapshot(&id).ok_or(ApiError::GameNotFound)?;
    Ok(Json(GameSnapshot::from_game(id, &game)))
}

/// Makes a move in a game.
#[instrument(skip(store, req, id), fields(game_id = %id, player = req.player, col = req.col))]
async fn make_move(
    State(store): State<GameStore>,
    Path(id): Path<GameId>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let player = player_from_number(req.player).ok_or(ApiError::InvalidPlayer(req.player))?;
    let game = store
        .apply_move(&id, player, req.col)
        .map_err(ApiError::Store)?;

    info!(game_id = %id, outcome = ?game.outcome(), "Move applied");
    Ok(Json(GameSnapshot::from_game(id, &game)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_wire_shape() {
        assert_eq!(
            serde_json::to_value(Winner::Piece(1)).unwrap(),
            serde_json::json!(1)
        );
        assert_eq!(
            serde_json::to_value(Winner::Draw).unwrap(),
            serde_json::json!("draw")
        );
    }

    #[test]
    fn test_invalid_winner_rejected() {
        assert!(serde_json::from_value::<Winner>(serde_json::json!(3)).is_err());
        assert!(serde_json::from_value::<Winner>(serde_json::json!("nope")).is_err());
    }
}

//! In-memory game registry and move sequencing.

use connect_four::{Game, MoveError, OpponentType, Outcome, Player, choose_move};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Opaque identifier assigned to each game at creation.
pub type GameId = String;

/// Errors surfaced by the game store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum StoreError {
    /// No game exists under the requested identifier.
    #[display("Game not found")]
    GameNotFound,

    /// The move policy found no playable column. Unreachable in practice:
    /// draw detection ends the game before the board fills.
    #[display("No playable column available for the computer")]
    NoMoveAvailable,

    /// The engine rejected the move.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),
}

impl std::error::Error for StoreError {}

/// Maps opaque game identifiers to live games.
///
/// All mutation happens while holding the lock, so concurrent requests for
/// the same identifier are serialized and each move exchange (including the
/// chained computer reply) is one atomic unit.
#[derive(Debug, Clone)]
pub struct GameStore {
    games: Arc<Mutex<HashMap<GameId, Game>>>,
}

impl GameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game store");
        Self {
            games: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a new game and returns its identifier and initial state.
    #[instrument(skip(self))]
    pub fn create_game(&self, opponent_type: OpponentType) -> (GameId, Game) {
        let id = Uuid::new_v4().to_string();
        let game = Game::new(opponent_type);

        let mut games = self.games.lock().unwrap();
        games.insert(id.clone(), game.clone());

        info!(game_id = %id, opponent = ?opponent_type, "Created new game");
        (id, game)
    }

    /// Returns a read-only snapshot of a game.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: &str) -> Option<Game> {
        let games = self.games.lock().unwrap();
        let game = games.get(id).cloned();

        if game.is_none() {
            debug!(game_id = id, "Game not found");
        }

        game
    }

    /// Applies `player`'s move in `col` and returns the updated game.
    ///
    /// In a computer-opponent game, a successful human move that leaves the
    /// game in progress with player two to act is followed by the computer's
    /// reply before this call returns: one move exchange, one lock hold.
    ///
    /// # Errors
    ///
    /// [`StoreError::GameNotFound`] for unknown identifiers, and the engine's
    /// [`MoveError`] kinds for rejected moves. A rejected move leaves the
    /// game unchanged.
    #[instrument(skip(self, id), fields(game_id = id))]
    pub fn apply_move(&self, id: &str, player: Player, col: usize) -> Result<Game, StoreError> {
        let mut games = self.games.lock().unwrap();
        let game = games.get_mut(id).ok_or(StoreError::GameNotFound)?;

        if let Err(error) = game.apply_move(player, col) {
            warn!(game_id = id, ?player, col, %error, "Rejected move");
            return Err(error.into());
        }

        if game.opponent_type() == OpponentType::Computer
            && game.outcome() == Outcome::InProgress
            && game.current_player() == Player::Two
        {
            let reply = choose_move(game.board(), &mut rand::rng())
                .ok_or(StoreError::NoMoveAvailable)?;
            debug!(game_id = id, col = reply, "Computer reply");
            game.apply_move(Player::Two, reply)?;
        }

        info!(game_id = id, outcome = ?game.outcome(), "Move exchange completed");
        Ok(game.clone())
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

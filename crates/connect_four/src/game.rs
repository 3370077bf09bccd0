//! Turn and outcome state machine for Connect Four.

use crate::rules::{detect_win, is_draw};
use crate::types::{Board, OpponentType, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Errors that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {:?}'s turn", _0)]
    WrongTurn(Player),

    /// The column is out of range or full.
    #[display("Column {} is out of range or full", _0)]
    InvalidColumn(usize),
}

impl std::error::Error for MoveError {}

/// Complete state of one Connect Four game.
///
/// Created empty with [`Player::One`] to move, mutated exclusively through
/// [`Game::apply_move`], and immutable once the outcome is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_player: Player,
    opponent_type: OpponentType,
    outcome: Outcome,
}

impl Game {
    /// Creates a new game with an empty board and player one to move.
    #[instrument]
    pub fn new(opponent_type: OpponentType) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::One,
            opponent_type,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the opponent type chosen at creation.
    pub fn opponent_type(&self) -> OpponentType {
        self.opponent_type
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True once the game has ended in a win or draw.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Applies a move for `acting` in `col`.
    ///
    /// Validates in order: the game is still in progress, it is `acting`'s
    /// turn, and the column is in range with room left. On success the piece
    /// lands on the lowest open row of the column; the outcome is updated
    /// (win checked before draw) and the turn passes to the opponent if the
    /// game continues.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`], [`MoveError::WrongTurn`], or
    /// [`MoveError::InvalidColumn`]. A failed move leaves the game
    /// unchanged.
    #[instrument(skip(self, acting), fields(player = ?acting))]
    pub fn apply_move(&mut self, acting: Player, col: usize) -> Result<Outcome, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if acting != self.current_player {
            return Err(MoveError::WrongTurn(acting));
        }
        if !self.board.is_playable(col) {
            return Err(MoveError::InvalidColumn(col));
        }

        let row = self
            .board
            .lowest_open_row(col)
            .ok_or(MoveError::InvalidColumn(col))?;
        self.board.place(row, col, acting);

        if detect_win(&self.board, acting) {
            self.outcome = Outcome::Won(acting);
        } else if is_draw(&self.board) {
            self.outcome = Outcome::Draw;
        } else {
            self.current_player = acting.opponent();
        }

        Ok(self.outcome)
    }
}

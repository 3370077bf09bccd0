//! Application state for the terminal client.

use crate::client::{GameClient, MoveOutcome};
use anyhow::Result;
use connect_four_server::{COLS, GameSnapshot, OpponentType, Winner};
use std::time::Duration;
use tracing::debug;

/// Which screen the app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Opponent selection menu.
    Menu,
    /// Active game.
    Playing,
}

/// Main application state.
pub struct App {
    client: GameClient,
    screen: Screen,
    menu_choice: OpponentType,
    snapshot: Option<GameSnapshot>,
    cursor_col: usize,
    status: String,
}

impl App {
    /// Creates the app in the opponent menu.
    pub fn new(client: GameClient) -> Self {
        Self {
            client,
            screen: Screen::Menu,
            menu_choice: OpponentType::Computer,
            snapshot: None,
            cursor_col: COLS / 2,
            status: "Choose an opponent and press Enter.".to_string(),
        }
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Highlighted opponent kind in the menu.
    pub fn menu_choice(&self) -> OpponentType {
        self.menu_choice
    }

    /// Latest game state, if a game is active.
    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        self.snapshot.as_ref()
    }

    /// Column the drop cursor is hovering.
    pub fn cursor_col(&self) -> usize {
        self.cursor_col
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Replaces the status line.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Flips the menu between the two opponent kinds.
    pub fn toggle_menu_choice(&mut self) {
        self.menu_choice = match self.menu_choice {
            OpponentType::Human => OpponentType::Computer,
            OpponentType::Computer => OpponentType::Human,
        };
    }

    /// Creates a new game on the server and enters the playing screen.
    pub async fn start_game(&mut self) -> Result<()> {
        let snapshot = self.client.create_game(self.menu_choice).await?;
        debug!(game_id = %snapshot.game_id, "Game started");

        self.status = "Player 1's turn.".to_string();
        self.snapshot = Some(snapshot);
        self.cursor_col = COLS / 2;
        self.screen = Screen::Playing;
        Ok(())
    }

    /// Moves the drop cursor one column to the left.
    pub fn move_cursor_left(&mut self) {
        self.cursor_col = self.cursor_col.saturating_sub(1);
    }

    /// Moves the drop cursor one column to the right.
    pub fn move_cursor_right(&mut self) {
        self.cursor_col = (self.cursor_col + 1).min(COLS - 1);
    }

    /// Jumps the drop cursor to the given column.
    pub fn set_cursor(&mut self, col: usize) {
        self.cursor_col = col.min(COLS - 1);
    }

    /// Drops a piece in the cursor column for whichever player is to move.
    pub async fn drop_piece(&mut self) -> Result<()> {
        let Some(snapshot) = &self.snapshot else {
            return Ok(());
        };
        if snapshot.game_over {
            self.status = "Game over. Press 'n' for a new game.".to_string();
            return Ok(());
        }

        let game_id = snapshot.game_id.clone();
        let player = snapshot.current_player;
        let against_computer = snapshot.opponent_type == OpponentType::Computer;

        match self.client.make_move(&game_id, player, self.cursor_col).await? {
            MoveOutcome::Accepted(next) => {
                if against_computer && !next.game_over {
                    // Display pacing only; the server already replied.
                    tokio::time::sleep(Duration::from_millis(400)).await;
                }
                self.status = describe(&next);
                self.snapshot = Some(next);
            }
            MoveOutcome::Rejected(reason) => {
                self.status = reason;
            }
        }
        Ok(())
    }

    /// Abandons the current game and returns to the menu.
    pub fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.snapshot = None;
        self.status = "Choose an opponent and press Enter.".to_string();
    }
}

fn describe(snapshot: &GameSnapshot) -> String {
    match snapshot.winner {
        Some(Winner::Piece(piece)) => format!("Player {piece} wins! Press 'n' for a new game."),
        Some(Winner::Draw) => "It's a draw! Press 'n' for a new game.".to_string(),
        None => format!("Player {}'s turn.", snapshot.current_player),
    }
}

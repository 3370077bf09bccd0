//! Core domain types for Connect Four.

use serde::{Deserialize, Serialize};

/// Number of rows on the board.
pub const ROWS: usize = 6;

/// Number of columns on the board.
pub const COLS: usize = 7;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player (moves first).
    One,
    /// Second player (the computer in single-player games).
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A cell on the Connect Four grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a piece of the given player.
    Occupied(Player),
}

/// Kind of opponent chosen when a game is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentType {
    /// Two humans sharing the game.
    Human,
    /// Player two is driven by the random move policy.
    Computer,
}

/// Terminal classification of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Player),
    /// Board filled with no winner.
    Draw,
}

impl Outcome {
    /// True once the game has left `InProgress`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// 6x7 Connect Four board.
///
/// Row 0 is the top of the board; columns fill bottom-up. A cell may hold a
/// piece only if every cell below it in the same column also holds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `cells[row][col]`.
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Gets the cell at the given coordinates.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// True iff a piece can be dropped in `col`: the column is in range and
    /// its topmost cell is empty.
    pub fn is_playable(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col] == Cell::Empty
    }

    /// Finds the lowest empty row in `col`, scanning from the bottom row
    /// upward. Returns `None` when the column is full or out of range.
    pub fn lowest_open_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Places a piece unconditionally.
    ///
    /// Internal primitive: callers must have validated the coordinates via
    /// [`Board::is_playable`] and [`Board::lowest_open_row`]. Out-of-range
    /// coordinates panic.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row][col] = Cell::Occupied(player);
    }

    /// Returns the full grid, `grid()[row][col]` with row 0 at the top.
    pub fn grid(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Counts the pieces on the board belonging to `player`.
    pub fn pieces(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string, one row per line.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in &self.cells {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::One) => '1',
                    Cell::Occupied(Player::Two) => '2',
                };
                result.push(symbol);
                result.push(' ');
            }
            result.pop();
            result.push('\n');
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

//! Draw detection logic for Connect Four.

use crate::types::{Board, COLS};
use tracing::instrument;

/// Checks if the board has no playable column remaining.
///
/// A full board with a winning line is a win, not a draw, so callers must
/// evaluate [`super::detect_win`] first.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    (0..COLS).all(|col| !board.is_playable(col))
}

#[cfg(test)]
mod tests {
    use super::super::win::detect_win;
    use super::*;
    use crate::types::{Player, ROWS};

    /// Full board with no four-in-a-row: even rows hold `1122112`, odd rows
    /// the inverse `2211221`. Rows and columns never run past two alike,
    /// and every diagonal window crosses all four phases of the pattern.
    fn drawn_board() -> Board {
        const PATTERN: [Player; 4] = [Player::One, Player::One, Player::Two, Player::Two];
        let mut board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                board.place(row, col, PATTERN[(col + 2 * (row % 2)) % 4]);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_is_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_open_column_is_not_draw() {
        let mut board = Board::new();
        for col in 0..COLS - 1 {
            for row in 0..ROWS {
                let player = if (row + col) % 2 == 0 { Player::One } else { Player::Two };
                board.place(row, col, player);
            }
        }
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_without_four_is_draw() {
        let board = drawn_board();
        assert!(is_draw(&board));
        assert!(!detect_win(&board, Player::One));
        assert!(!detect_win(&board, Player::Two));
    }
}

//! Move policy for the computer opponent.

use crate::types::{Board, COLS};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::instrument;

/// Selects uniformly at random among the currently playable columns.
///
/// Returns `None` when no column is playable. That situation is unreachable
/// during normal play because draw detection terminates the game first, so
/// callers should treat it as a fatal condition rather than retry.
///
/// The choice is uniform over the playable columns, not uniform over all
/// columns with a retry on full ones.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let playable: Vec<usize> = (0..COLS).filter(|&col| board.is_playable(col)).collect();
    playable.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, ROWS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fill_column(board: &mut Board, col: usize) {
        for row in 0..ROWS {
            let player = if row % 2 == 0 { Player::One } else { Player::Two };
            board.place(row, col, player);
        }
    }

    #[test]
    fn test_chooses_only_playable_columns() {
        let mut board = Board::new();
        for col in [0, 1, 3, 4, 6] {
            fill_column(&mut board, col);
        }

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let col = choose_move(&board, &mut rng).unwrap();
            assert!(col == 2 || col == 5, "chose unplayable column {col}");
        }
    }

    #[test]
    fn test_single_open_column_always_chosen() {
        let mut board = Board::new();
        for col in 0..COLS - 1 {
            fill_column(&mut board, col);
        }

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(choose_move(&board, &mut rng), Some(COLS - 1));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for col in 0..COLS {
            fill_column(&mut board, col);
        }

        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(choose_move(&board, &mut rng), None);
    }

    #[test]
    fn test_empty_board_reaches_every_column() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; COLS];
        for _ in 0..500 {
            seen[choose_move(&board, &mut rng).unwrap()] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }
}

//! Tests for board gravity and column accessors.

use connect_four::{Board, COLS, Cell, Player, ROWS};

#[test]
fn test_new_board_is_empty_and_playable() {
    let board = Board::new();
    for col in 0..COLS {
        assert!(board.is_playable(col));
        assert_eq!(board.lowest_open_row(col), Some(ROWS - 1));
    }
    for row in 0..ROWS {
        for col in 0..COLS {
            assert_eq!(board.cell(row, col), Some(Cell::Empty));
        }
    }
}

#[test]
fn test_out_of_range_column_is_not_playable() {
    let board = Board::new();
    assert!(!board.is_playable(COLS));
    assert!(!board.is_playable(usize::MAX));
    assert_eq!(board.lowest_open_row(COLS), None);
}

#[test]
fn test_pieces_stack_bottom_up() {
    let mut board = Board::new();
    for step in 0..ROWS {
        let row = board.lowest_open_row(2).unwrap();
        assert_eq!(row, ROWS - 1 - step);
        board.place(row, 2, Player::One);

        // Gravity: everything below the placed cell is occupied.
        for below in row + 1..ROWS {
            assert_ne!(board.cell(below, 2), Some(Cell::Empty));
        }
    }
    assert!(!board.is_playable(2));
    assert_eq!(board.lowest_open_row(2), None);
}

#[test]
fn test_full_column_signals_no_open_row() {
    let mut board = Board::new();
    for row in 0..ROWS {
        board.place(row, 0, Player::Two);
    }
    assert_eq!(board.lowest_open_row(0), None);
    assert!(!board.is_playable(0));
    // Neighboring columns are unaffected.
    assert!(board.is_playable(1));
}

#[test]
fn test_piece_counts() {
    let mut board = Board::new();
    board.place(5, 0, Player::One);
    board.place(5, 1, Player::Two);
    board.place(4, 0, Player::One);
    assert_eq!(board.pieces(Player::One), 2);
    assert_eq!(board.pieces(Player::Two), 1);
}

#[test]
fn test_display_marks_pieces() {
    let mut board = Board::new();
    board.place(5, 0, Player::One);
    board.place(5, 6, Player::Two);
    let rendered = board.display();
    let bottom = rendered.lines().last().unwrap();
    assert!(bottom.starts_with('1'));
    assert!(bottom.ends_with('2'));
}

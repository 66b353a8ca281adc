//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Mark::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::is_win;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_one_empty_cell_not_full() {
        for hole in 0..9 {
            let mut board = Board::new();
            for i in (0..9).filter(|&i| i != hole) {
                board.place_mark(i, Mark::First);
            }
            assert!(!is_full(&board), "cell {hole} still empty");
        }
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O O X / X X O
        for i in [0, 2, 5, 6, 7] {
            board.place_mark(i, Mark::First);
        }
        for i in [1, 3, 4, 8] {
            board.place_mark(i, Mark::Second);
        }

        assert!(is_full(&board));
        assert!(!is_win(&board, Mark::First));
        assert!(!is_win(&board, Mark::Second));
    }

    #[test]
    fn test_full_board_ignores_lines() {
        let mut board = Board::new();
        for i in 0..9 {
            board.place_mark(i, Mark::First);
        }
        assert!(is_full(&board));
        assert!(is_win(&board, Mark::First));
    }
}

//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use tracing::instrument;

/// The eight index triples that make a winning line.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `mark` occupies every cell of some line.
///
/// Callers pass `First` or `Second`; asking about `Empty` is not a win query.
#[instrument(skip(board))]
pub fn is_win(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == Some(mark)))
}

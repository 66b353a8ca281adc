//! Cursor movement for keyboard navigation.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Moves the cursor one cell in the arrow's direction, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::from_row_col(row, c)),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::from_row_col(r, col)),
        _ => None,
    };

    target.unwrap_or(cursor)
}

/// Maps a digit key '1'-'9' to the cell it names.
pub fn digit_cell(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index),
        _ => None,
    }
}

//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::rules;

/// Contents of a cell, doubling as a player's identifying mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark of the player who moves first (X).
    First,
    /// Mark of the player who moves second (O).
    Second,
    /// Unoccupied cell.
    #[default]
    Empty,
}

impl Mark {
    /// Returns the opposing mark. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Symbol drawn for this mark.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::First => "X",
            Mark::Second => "O",
            Mark::Empty => " ",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.fill(Mark::Empty);
    }

    /// Returns true if `mark` fills any row, column or diagonal.
    pub fn is_win(&self, mark: Mark) -> bool {
        rules::is_win(self, mark)
    }

    /// Returns true if no cell is empty.
    ///
    /// Does not look for a winning line; check [`Board::is_win`] first.
    pub fn is_draw(&self) -> bool {
        rules::is_full(self)
    }

    /// Places `mark` at `index` if the index is on the board and the cell is empty.
    ///
    /// Returns whether the cell was taken. A `false` leaves the board untouched.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, index: usize, mark: Mark) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if *cell == Mark::Empty => {
                *cell = mark;
                true
            }
            Some(_) => {
                debug!(index, "Cell already occupied");
                false
            }
            None => {
                debug!(index, "Index off the board");
                false
            }
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Indices off the board are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Mark::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Mark::Empty => write!(f, "{}", pos + 1)?,
                    mark => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

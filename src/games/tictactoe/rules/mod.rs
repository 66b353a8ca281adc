//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The board's own
//! predicates delegate here so the line table lives in one place.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, is_win};

//! Tic-tac-toe: board, players and the turn-taking game.

mod game;
mod notify;
mod player;
mod position;
mod types;

pub mod rules;

pub use game::{Game, Outcome};
pub use notify::{Notifier, TracingNotifier};
pub use player::Player;
pub use position::Position;
pub use types::{Board, CELL_COUNT, Mark};

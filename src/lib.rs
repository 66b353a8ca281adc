//! Strictly Tic-Tac-Toe - a two-player tic-tac-toe rules engine
//!
//! The engine knows nothing about screens. A front-end hands it cell
//! indices and receives announcements through a [`Notifier`].
//!
//! # Architecture
//!
//! - **Games**: board, players and the turn-taking [`Game`]
//! - **Config**: player names and log destination from TOML
//! - **TUI**: terminal front-end (keyboard and mouse)
//! - **Script**: non-interactive play from a list of indices
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, Mark, Player};
//!
//! let ada = Player::new("Ada", Mark::First);
//! let bo = Player::new("Bo", Mark::Second);
//! let mut game = Game::new(&ada, &bo, Vec::<String>::new());
//!
//! for index in [0, 3, 1, 4, 2] {
//!     game.make_move(index);
//! }
//! assert_eq!(game.notifier(), &vec!["Ada wins! 🎉".to_string()]);
//! assert_eq!(game.current_player(), &ada);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod script;

pub mod cli;
pub mod games;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Scripted play
pub use script::play_script;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CELL_COUNT, Game, Mark, Notifier, Outcome, Player, Position, TracingNotifier,
};

//! Command-line interface for strictly_tictactoe.

use clap::{Args, Parser, Subcommand};

/// Strictly Tic-Tac-Toe - two players, one board
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Player name overrides shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct Names {
    /// Name of the player who moves first (X)
    #[arg(long)]
    pub first: Option<String>,

    /// Name of the player who moves second (O)
    #[arg(long)]
    pub second: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Tui {
        // Player name overrides
        #[command(flatten)]
        names: Names,
    },

    /// Apply a list of cell indices (0-8) and print what happens
    Play {
        // Player name overrides
        #[command(flatten)]
        names: Names,

        /// Cell indices in the order they are chosen
        #[arg(required = true)]
        moves: Vec<usize>,
    },
}

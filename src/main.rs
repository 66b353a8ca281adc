//! Strictly Tic-Tac-Toe - unified CLI

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use strictly_tictactoe::GameConfig;
use strictly_tictactoe::cli::{Cli, Command};
use strictly_tictactoe::tui::run_tui;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { names } => {
            let config = GameConfig::load_or_default(&cli.config)?.with_names(names.first, names.second);
            init_file_logging(config.log_file())?;
            run_tui(&config)
        }
        Command::Play { names, moves } => {
            init_stderr_logging();
            let config = GameConfig::load_or_default(&cli.config)?.with_names(names.first, names.second);
            info!(count = moves.len(), "Playing scripted moves");
            let mut stdout = std::io::stdout().lock();
            strictly_tictactoe::play_script(&config, &moves, &mut stdout)
        }
    }
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs to stderr, keeping stdout for the transcript.
fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

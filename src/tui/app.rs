//! Application state and logic.

use super::input::{digit_cell, move_cursor};
use crate::games::tictactoe::{Game, Notifier, Player, Position};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::{debug, instrument};

/// Holds the most recent announcement until the app shows it.
#[derive(Debug, Default)]
pub struct Banner {
    message: Option<String>,
}

impl Banner {
    /// Takes the pending announcement, if any.
    pub fn take(&mut self) -> Option<String> {
        self.message.take()
    }
}

impl Notifier for Banner {
    fn notify(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App<'a> {
    game: Game<'a, Banner>,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl<'a> App<'a> {
    /// Creates a new application for two players.
    pub fn new(first: &'a Player, second: &'a Player) -> Self {
        let game = Game::new(first, second, Banner::default());
        let status_message = turn_message(first);
        Self {
            game,
            cursor: Position::Center,
            status_message,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game<'a, Banner> {
        &self.game
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Enter | KeyCode::Char(' ') => self.choose(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            code => {
                if let Some(pos) = digit_cell(code) {
                    self.choose(pos);
                }
            }
        }
    }

    /// Plays the chosen cell for whoever has the turn.
    #[instrument(skip(self))]
    pub fn choose(&mut self, pos: Position) {
        self.cursor = pos;
        if !self.game.make_move(pos.to_index()) {
            debug!(position = %pos, "Cell unavailable");
            self.status_message = format!("{} is taken. Pick another cell.", pos);
            return;
        }

        let next = turn_message(self.game.current_player());
        self.status_message = match self.game.notifier_mut().take() {
            Some(announcement) => format!("{} New round: {}", announcement, next),
            None => next,
        };
    }

    /// Clears the board and gives the first player the turn.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.game.reset();
        self.cursor = Position::Center;
        self.status_message = turn_message(self.game.current_player());
    }
}

fn turn_message(player: &Player) -> String {
    format!("{}'s turn ({}).", player.name(), player.mark())
}

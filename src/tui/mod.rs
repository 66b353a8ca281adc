//! Terminal front-end for tic-tac-toe.
//!
//! Owns the terminal, turns key presses and mouse clicks into cell
//! indices for the engine, and redraws after every event.

mod app;
mod input;
mod ui;

pub use app::{App, Banner};

use crate::config::GameConfig;
use crate::games::tictactoe::{Mark, Player};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs an interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting terminal UI");

    let first = Player::new(config.first_player_name().as_str(), Mark::First);
    let second = Player::new(config.second_player_name().as_str(), Mark::Second);
    let mut app = App::new(&first, &second);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

fn run_app(terminal: &mut Tui, app: &mut App<'_>) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &*app))?;

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                if let Some(pos) = ui::cell_at(area, column, row) {
                    app.choose(pos);
                }
            }
            _ => {}
        }
    }
    Ok(())
}

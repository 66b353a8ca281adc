//! Non-interactive play from a list of cell indices.

use crate::config::GameConfig;
use crate::games::tictactoe::{Game, Mark, Player, Position};
use anyhow::Result;
use std::io::Write;
use tracing::{info, instrument};

/// Plays `moves` in order on a fresh game and writes a transcript to `out`.
///
/// Each line reports the move, or that it was rejected. Announcements are
/// written as they are made; the final board and whose turn it is close
/// the transcript.
#[instrument(skip(config, out), fields(count = moves.len()))]
pub fn play_script<W: Write>(config: &GameConfig, moves: &[usize], out: &mut W) -> Result<()> {
    let first = Player::new(config.first_player_name().as_str(), Mark::First);
    let second = Player::new(config.second_player_name().as_str(), Mark::Second);
    let mut game = Game::new(&first, &second, Vec::<String>::new());

    for &index in moves {
        let player = game.current_player();
        if game.make_move(index) {
            let label = Position::from_index(index).map_or("", Position::label);
            writeln!(out, "{} takes {} ({})", player, index, label)?;
        } else {
            writeln!(out, "{} cannot take {}", player, index)?;
        }

        for message in game.notifier_mut().drain(..) {
            writeln!(out, "{}", message)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", game.board())?;
    writeln!(out)?;
    writeln!(out, "{} to move", game.current_player())?;
    info!("Script finished");
    Ok(())
}

//! Turn-taking game engine for tic-tac-toe.
//!
//! A [`Game`] borrows its two players, owns the board, and applies moves
//! for whoever holds the turn. When a move ends the round the result is
//! announced through the game's [`Notifier`] and the game starts over
//! immediately with the first player to move.

use super::notify::Notifier;
use super::player::Player;
use super::types::Board;
use tracing::{debug, info, instrument};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// The player completed a line.
    Win(&'a Player),
    /// The board filled up without a line.
    Draw,
}

impl<'a> Outcome<'a> {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&'a Player> {
        match *self {
            Outcome::Win(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{} wins! 🎉", player.name()),
            Outcome::Draw => write!(f, "It's a draw! 🤝"),
        }
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug)]
pub struct Game<'a, N> {
    board: Board,
    first: &'a Player,
    second: &'a Player,
    current: &'a Player,
    over: bool,
    notifier: N,
}

impl<'a, N: Notifier> Game<'a, N> {
    /// Creates a game between two players. `first` moves first.
    #[instrument(skip_all, fields(first = %first, second = %second))]
    pub fn new(first: &'a Player, second: &'a Player, notifier: N) -> Self {
        Self {
            board: Board::new(),
            first,
            second,
            current: first,
            over: false,
            notifier,
        }
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Returns `false` and changes nothing if the index is off the board
    /// or the cell is taken. A move that wins or fills the board is
    /// announced and the game resets before this returns.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn make_move(&mut self, index: usize) -> bool {
        if self.over {
            debug!("Move ignored, round already over");
            return false;
        }

        let player = self.current;
        if !self.board.place_mark(index, player.mark()) {
            debug!(index, "Move rejected");
            return false;
        }
        debug!(index, "Move accepted");

        // Win first: the last cell can also complete a line.
        if self.board.is_win(player.mark()) {
            self.finish(Outcome::Win(player));
        } else if self.board.is_draw() {
            self.finish(Outcome::Draw);
        } else {
            self.switch_player();
        }
        true
    }

    /// Starts a new round: empty board, first player to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.over = false;
        self.current = self.first;
        info!("Game reset");
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> &'a Player {
        self.current
    }

    /// Player who opens every round.
    pub fn first_player(&self) -> &'a Player {
        self.first
    }

    /// Player who moves second.
    pub fn second_player(&self) -> &'a Player {
        self.second
    }

    /// True only between a terminal move and the automatic reset.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The notifier results are sent to.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mutable access to the notifier.
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    fn switch_player(&mut self) {
        self.current = if std::ptr::eq(self.current, self.first) {
            self.second
        } else {
            self.first
        };
    }

    fn finish(&mut self, outcome: Outcome<'a>) {
        self.over = true;
        info!(%outcome, "Round over");
        self.notifier.notify(&outcome.to_string());
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::Mark;
    use super::*;

    fn players() -> (Player, Player) {
        (
            Player::new("Player 1", Mark::First),
            Player::new("Player 2", Mark::Second),
        )
    }

    #[test]
    fn test_first_player_opens() {
        let (p1, p2) = players();
        let game = Game::new(&p1, &p2, Vec::<String>::new());
        assert_eq!(game.current_player(), &p1);
        assert!(!game.is_over());
    }

    #[test]
    fn test_switch_toggles() {
        let (p1, p2) = players();
        let mut game = Game::new(&p1, &p2, Vec::<String>::new());
        game.switch_player();
        assert_eq!(game.current_player(), &p2);
        game.switch_player();
        assert_eq!(game.current_player(), &p1);
    }

    #[test]
    fn test_finish_announces_and_resets() {
        let (p1, p2) = players();
        let mut game = Game::new(&p1, &p2, Vec::<String>::new());
        game.make_move(4);
        game.finish(Outcome::Win(&p2));
        assert_eq!(game.notifier(), &vec!["Player 2 wins! 🎉".to_string()]);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.current_player(), &p1);
        assert!(!game.is_over());
    }

    #[test]
    fn test_outcome_messages() {
        let (p1, _) = players();
        assert_eq!(Outcome::Win(&p1).to_string(), "Player 1 wins! 🎉");
        assert_eq!(Outcome::Draw.to_string(), "It's a draw! 🤝");
        assert_eq!(Outcome::Win(&p1).winner(), Some(&p1));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}

//! Tests for turn order, terminal transitions and reset.

use strictly_tictactoe::{Board, Game, Mark, Player};

fn players() -> (Player, Player) {
    (
        Player::new("Player 1", Mark::First),
        Player::new("Player 2", Mark::Second),
    )
}

#[test]
fn test_win_scenario_announces_and_resets() {
    let (p1, p2) = players();
    let mut game = Game::new(&p1, &p2, Vec::<String>::new());

    for index in [0, 3, 1, 4] {
        assert!(game.make_move(index));
        assert!(game.notifier().is_empty());
    }
    assert_eq!(game.board().get(1), Some(Mark::First));
    assert_eq!(game.board().get(4), Some(Mark::Second));

    assert!(game.make_move(2));
    assert_eq!(game.notifier(), &vec!["Player 1 wins! 🎉".to_string()]);
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.current_player(), &p1);
    assert!(!game.is_over());
}

#[test]
fn test_second_player_can_win() {
    let (p1, p2) = players();
    let mut game = Game::new(&p1, &p2, Vec::<String>::new());

    for index in [0, 2, 1, 4, 8, 6] {
        assert!(game.make_move(index));
    }
    assert_eq!(game.notifier(), &vec!["Player 2 wins! 🎉".to_string()]);
    assert_eq!(game.current_player(), &p1);
}

#[test]
fn test_draw_scenario_announces_and_resets() {
    let (p1, p2) = players();
    let mut game = Game::new(&p1, &p2, Vec::<String>::new());

    for index in [0, 1, 2, 4, 5, 3, 6, 8, 7] {
        assert!(game.make_move(index));
    }
    assert_eq!(game.notifier(), &vec!["It's a draw! 🤝".to_string()]);
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.current_player(), &p1);
}

#[test]
fn test_win_on_last_cell_beats_draw() {
    let (p1, p2) = players();
    let mut game = Game::new(&p1, &p2, Vec::<String>::new());

    // The ninth cell completes column 0-3-6 for X.
    for index in [0, 1, 2, 4, 3, 5, 7, 8, 6] {
        assert!(game.make_move(index));
    }
    assert_eq!(game.notifier(), &vec!["Player 1 wins! 🎉".to_string()]);
}

#[test]
fn test_occupied_cell_is_noop() {
    let (p1, p2) = players();
    let mut game = Game::new(&p1, &p2, Vec::<String>::new());

    assert!(game.make_move(0));
    let snapshot = game.board().clone();
    assert!(!game.make_move(0));
    assert_eq!(game.board(), &snapshot);
    assert_eq!(game.current_player(), &p2);
}

#[test]
fn test_out_of_range_is_noop() {
    let (p1, p2) = players();
    let mut game = Game::new(&p1, &p2, Vec::<String>::new());

    assert!(!game.make_move(9));
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.current_player(), &p1);
}

#[test]
fn test_turns_alternate() {
    let (p1, p2) = players();
    let mut game = Game::new(&p1, &p2, Vec::<String>::new());

    assert_eq!(game.current_player(), &p1);
    assert!(game.make_move(4));
    assert_eq!(game.current_player(), &p2);
    assert!(game.make_move(0));
    assert_eq!(game.current_player(), &p1);
    assert_eq!(game.board().get(4), Some(Mark::First));
    assert_eq!(game.board().get(0), Some(Mark::Second));
}

#[test]
fn test_external_reset() {
    let (p1, p2) = players();
    let mut game = Game::new(&p1, &p2, Vec::<String>::new());

    assert!(game.make_move(4));
    game.reset();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.current_player(), &p1);
    assert_eq!(game.first_player(), &p1);
    assert_eq!(game.second_player(), &p2);
    assert!(game.notifier().is_empty());
}

#[test]
fn test_rounds_continue_after_reset() {
    let (p1, p2) = players();
    let mut game = Game::new(&p1, &p2, Vec::<String>::new());

    for index in [0, 3, 1, 4, 2, 6, 0, 7, 1, 8] {
        assert!(game.make_move(index));
    }
    assert_eq!(
        game.notifier(),
        &vec!["Player 1 wins! 🎉".to_string(), "Player 1 wins! 🎉".to_string()]
    );
}

//! Tests for scripted play transcripts.

use strictly_tictactoe::{GameConfig, play_script};

fn transcript(config: &GameConfig, moves: &[usize]) -> String {
    let mut out = Vec::new();
    play_script(config, moves, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_draw_transcript() {
    let text = transcript(&GameConfig::default(), &[0, 1, 2, 4, 5, 3, 6, 8, 7]);
    assert!(text.contains("It's a draw! 🤝"));
    assert!(!text.contains("wins"));
    assert!(text.ends_with("Player 1 (X) to move\n"));
}

#[test]
fn test_custom_names() {
    let config = GameConfig::default().with_names(Some("Ada".into()), Some("Bo".into()));
    let text = transcript(&config, &[4, 12]);
    assert!(text.contains("Ada (X) takes 4 (Center)"));
    assert!(text.contains("Bo (O) cannot take 12"));
    assert!(text.contains("1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9"));
    assert!(text.ends_with("Bo (O) to move\n"));
}

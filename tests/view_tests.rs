//! View derivation across a full round.

use high_low::core::{CardValue, Choice, GameState, ScriptedSource};
use high_low::games::high_low::GameEngineBuilder;
use high_low::rules::Outcome;
use high_low::view::{CardFace, Control, View};

fn face(v: u8) -> CardFace {
    CardFace::Revealed(CardValue::new(v).unwrap())
}

#[test]
fn test_view_follows_round() {
    let mut game = GameEngineBuilder::new().build_with(ScriptedSource::new(&[3, 7, 5]));

    // New: both hidden, only Start Game
    let view = View::from(&game.snapshot());
    assert_eq!((view.left, view.right), (CardFace::Hidden, CardFace::Hidden));
    assert_eq!(view.controls.as_slice(), &[Control::StartGame]);
    assert!(view.banner.is_none());

    // Started: left revealed, Higher/Lower offered
    game.start();
    let view = View::from(&game.snapshot());
    assert_eq!((view.left, view.right), (face(3), CardFace::Hidden));
    assert_eq!(
        view.controls.as_slice(),
        &[Control::Choose(Choice::Higher), Control::Choose(Choice::Lower)]
    );
    assert!(view.banner.is_none());

    // Result: both revealed, banner and Play Again
    game.choose(Choice::Higher);
    let view = View::from(&game.snapshot());
    assert_eq!((view.left, view.right), (face(3), face(7)));
    assert_eq!(view.controls.as_slice(), &[Control::PlayAgain]);
    assert_eq!(view.banner, Some(Outcome::Win));

    let text = view.to_string();
    assert!(text.contains("WIN!"));
    assert!(text.contains("[a] Play Again"));
    assert!(!text.contains('?'));

    // Play again: right card hidden again, new left card
    game.restart();
    let view = View::from(&game.snapshot());
    assert_eq!(game.state(), GameState::Started);
    assert_eq!((view.left, view.right), (face(5), CardFace::Hidden));
    assert!(!view.to_string().contains("WIN!"));
}

#[test]
fn test_controls_drive_engine() {
    let mut game = GameEngineBuilder::new().build_with(ScriptedSource::new(&[9, 1]));

    // Always press the first offered control.
    for _ in 0..3 {
        let view = View::from(&game.snapshot());
        let control = view.controls[0];
        assert!(game.send(control.event()), "{} should be accepted", control.label());
    }

    // Start, Higher, Play Again -> back to Started with a fresh left card
    assert_eq!(game.state(), GameState::Started);
    assert_eq!(game.context().left_value(), CardValue::new(9));
}

#[test]
fn test_lose_banner() {
    let mut game = GameEngineBuilder::new().build_with(ScriptedSource::new(&[4, 4]));
    game.start();
    game.choose(Choice::Lower);

    let view = View::from(&game.snapshot());
    assert_eq!(view.banner, Some(Outcome::Lose));
    assert!(view.to_string().contains("LOSE!"));
}

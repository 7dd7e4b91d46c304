//! Full games played through the public API.

use memory_game::{BoardSize, CardFace, FlipOutcome, GameError, GameState, Symbol};

const A: Symbol = Symbol::new(0);
const B: Symbol = Symbol::new(1);
const C: Symbol = Symbol::new(2);
const D: Symbol = Symbol::new(3);

fn interleaved() -> GameState {
    GameState::from_symbols(BoardSize::Small, vec![A, B, A, B, C, D, C, D]).unwrap()
}

#[test]
fn test_matching_every_pair_wins() {
    let mut game = interleaved();

    assert_eq!(game.flip(0).unwrap(), FlipOutcome::FirstOfPair);
    assert_eq!(game.moves_count(), 1);

    assert_eq!(game.flip(2).unwrap(), FlipOutcome::Matched);
    assert_eq!(game.pairs_found_count(), 1);
    assert_eq!(game.moves_count(), 2);
    assert!(game.card(0).unwrap().is_matched);
    assert!(game.card(2).unwrap().is_matched);

    assert_eq!(game.flip(1).unwrap(), FlipOutcome::FirstOfPair);
    assert_eq!(game.moves_count(), 3);

    assert_eq!(game.flip(3).unwrap(), FlipOutcome::Matched);
    assert_eq!(game.pairs_found_count(), 2);
    assert_eq!(game.moves_count(), 4);
    assert!(!game.have_won());

    for (first, second) in [(4, 6), (5, 7)] {
        game.flip(first).unwrap();
        game.flip(second).unwrap();
    }
    assert!(game.have_won());
    assert_eq!(game.moves_count(), 8);
    assert!(game.view().faces.iter().all(|f| matches!(f, CardFace::Matched(_))));
}

#[test]
fn test_mismatch_returns_cards_face_down() {
    let mut game = interleaved();
    game.flip(0).unwrap();
    assert_eq!(game.flip(1).unwrap(), FlipOutcome::Mismatched);
    assert!(!game.is_face_up(0).unwrap());
    assert!(!game.is_face_up(1).unwrap());
    assert_eq!(game.moves_count(), 2);
    assert_eq!(game.pairs_found_count(), 0);
}

#[test]
fn test_second_tap_on_lone_card_leaves_state_unchanged() {
    let mut game = interleaved();
    game.flip(0).unwrap();
    let before = game.view();

    let err = game.flip(0).unwrap_err();
    assert!(err.is_invalid_move());
    assert_eq!(game.view(), before);
    assert_eq!(game.lone_face_up(), Some(0));
}

#[test]
fn test_error_messages() {
    let mut game = interleaved();
    assert_eq!(
        game.flip(12).unwrap_err().to_string(),
        "Position 12 is outside the board of 8 cards"
    );
    let err = GameState::from_symbols(BoardSize::Small, vec![A; 8]).unwrap_err();
    assert_eq!(err.to_string(), "Symbol 0 appears 8 times, expected exactly 2");
}

#[test]
fn test_board_view_serializes_for_renderers() {
    let mut game = interleaved();
    game.flip(0).unwrap();
    let json = serde_json::to_value(game.view()).unwrap();

    assert_eq!(json["size"], "small");
    assert_eq!(json["width"], 2);
    assert_eq!(json["moves"], 1);
    assert_eq!(json["faces"][0], serde_json::json!({ "state": "face_up", "symbol": 0 }));
    assert_eq!(json["faces"][1], serde_json::json!({ "state": "hidden" }));

    let back: memory_game::BoardView = serde_json::from_value(json).unwrap();
    assert_eq!(back, game.view());
}

#[test]
fn test_board_size_preference_is_serialized_by_code() {
    let json = serde_json::to_string(&BoardSize::Medium).unwrap();
    assert_eq!(json, "\"medium\"");
    let size: BoardSize = serde_json::from_str("\"large\"").unwrap();
    assert_eq!(size, BoardSize::Large);
    assert!(matches!(
        "giant".parse::<BoardSize>(),
        Err(GameError::UnknownBoardSize(_))
    ));
}

//! Wire format of projected views.

#![cfg(feature = "serde")]

use lastcard::{Card, Game, GameOptions, GameSetup, GameView, PlayerId, Rank, Suit};
use serde_json::{Value, json};

#[test]
fn view_serializes_without_opponent_cards() {
    let king = Card::new(Suit::Hearts, Rank::King);
    let setup = GameSetup {
        players: vec!["p1".into(), "p2".into()],
        hands: vec![
            vec![king, Card::new(Suit::Clubs, Rank::Seven)],
            vec![Card::new(Suit::Diamonds, Rank::Queen)],
        ],
        pile: vec![Card::new(Suit::Hearts, Rank::Three)],
        current_turn: Some("p1".into()),
        ..GameSetup::default()
    };
    let game = Game::from_setup("wire".into(), GameOptions::default(), 1, setup);
    game.play_card(&PlayerId::from("p1"), king, None).unwrap();

    let view = game.game_state_for_player(&PlayerId::from("p1")).unwrap();
    let value = serde_json::to_value(&view).unwrap();

    assert_eq!(
        value,
        json!({
            "yourHand": [{ "suit": "CLUBS", "rank": "SEVEN" }],
            "topCard": { "suit": "HEARTS", "rank": "KING" },
            "isMyTurn": false,
            "opponentCardCount": 1,
            "suitOverride": null,
            "drawPenalty": 3,
            "status": "waiting"
        })
    );

    let Value::Object(fields) = &value else {
        panic!("view is not a JSON object");
    };
    assert!(fields.keys().all(|key| !key.starts_with("opponent") || key == "opponentCardCount"));
    assert!(!value.to_string().contains("QUEEN"));

    let back: GameView = serde_json::from_value(value).unwrap();
    assert_eq!(back, view);
}

#[test]
fn ids_serialize_as_plain_strings() {
    assert_eq!(
        serde_json::to_value(PlayerId::from("alice")).unwrap(),
        json!("alice")
    );
    let suit: Suit = serde_json::from_value(json!("SPADES")).unwrap();
    assert_eq!(suit, Suit::Spades);
}

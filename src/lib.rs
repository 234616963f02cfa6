//! An authoritative rules engine for Last Card, a two-player Crazy-Eights
//! style shedding game, with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the deck, the discard pile,
//! and both hands, validates every move, and projects a per-player
//! [`GameView`] that never reveals the opponent's cards. A [`SessionStore`]
//! keeps live games keyed by session id for a transport layer to drive.
//!
//! # Example
//!
//! ```
//! use lastcard::{Game, GameOptions, PlayerId};
//!
//! let game = Game::new("table-1".into(), GameOptions::default(), 42);
//! let alice = PlayerId::from("alice");
//! game.add_player(alice.clone()).unwrap();
//! game.add_player(PlayerId::from("bob")).unwrap();
//! game.start().unwrap();
//!
//! let view = game.game_state_for_player(&alice).unwrap();
//! assert_eq!(view.your_hand.len(), 7);
//! assert_eq!(view.opponent_card_count, 7);
//! assert!(view.is_my_turn);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod session;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, Pile};
pub use error::{DrawError, JoinError, PassError, PlayError, SessionError, StartError};
pub use game::{Game, GameSetup, GameStatus, GameView, PlayerId};
pub use hand::Hand;
pub use options::GameOptions;
pub use session::{Departure, SessionId, SessionStore};

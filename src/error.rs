//! Error types for game operations.
//!
//! Every error is a refusal: the operation that returned it left the game
//! exactly as it was.

use thiserror::Error;

/// Errors that can occur when taking a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Both seats are taken.
    #[error("both seats are taken")]
    SessionFull,
    /// The player already holds a seat.
    #[error("player is already seated")]
    AlreadySeated,
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The game is not waiting for players.
    #[error("invalid game state for starting")]
    InvalidState,
    /// Fewer than two players are seated.
    #[error("two players are required")]
    NotEnoughPlayers,
    /// The hands would leave no deck to play from.
    #[error("hand size leaves no cards in the deck")]
    HandSizeTooLarge,
    /// No plain card was left in the deck to open the pile with.
    #[error("no plain card available to open the pile")]
    NoOpeningCard,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game is over.
    #[error("the game is over")]
    GameFinished,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The player does not hold the card.
    #[error("card is not in the player's hand")]
    CardNotInHand,
    /// A King chain is active and only a King may be played.
    #[error("a draw penalty is pending; only a king may be played")]
    PenaltyPending,
    /// The card matches neither the suit to follow nor the active rank.
    #[error("card does not match the active card")]
    NoMatch,
}

/// Errors that can occur when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The game is over.
    #[error("the game is over")]
    GameFinished,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}

/// Errors that can occur when passing the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PassError {
    /// The game is over.
    #[error("the game is over")]
    GameFinished,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
}

/// Errors returned by the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No session with this id exists.
    #[error("session not found")]
    NotFound,
    /// The player could not be seated.
    #[error(transparent)]
    Join(#[from] JoinError),
    /// The game could not be started.
    #[error(transparent)]
    Start(#[from] StartError),
}

//! Card types and deck utilities.

use alloc::vec::Vec;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two. Keeps the turn with the player who played it.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight. Wild; the player names the suit to follow.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack. Keeps the turn with the player who played it.
    Jack,
    /// Queen.
    Queen,
    /// King. Raises the draw penalty for the opponent.
    King,
}

impl Rank {
    /// All thirteen ranks, ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns whether playing this rank triggers an effect beyond moving the turn.
    ///
    /// Special ranks are never chosen as the opening card.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, Self::Eight | Self::Two | Self::Jack | Self::King)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Builds one unshuffled standard deck, suit by suit.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

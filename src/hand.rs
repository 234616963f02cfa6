//! Player hand representation.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// The cards a seated player holds, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds several cards, keeping their order.
    pub fn extend(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
    }

    /// Removes the first copy of `card`.
    ///
    /// Returns `false` and leaves the hand untouched if the card is not held.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&held| held == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the number of cards of `rank` held.
    #[must_use]
    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|card| card.rank == rank).count()
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

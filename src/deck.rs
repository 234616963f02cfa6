//! Draw deck and discard pile bookkeeping.
//!
//! The [`Deck`] holds every card that is neither in a hand nor on the
//! [`Pile`]. Cards leave the deck from its top; when it runs dry the pile is
//! recycled underneath its active card and reshuffled.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, standard_deck};

/// The face-down draw deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    /// Cards in the deck; the last element is the top card.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a full 52-card deck shuffled with `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self {
            cards: standard_deck(),
        };
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck that yields `draws` in order, first element first.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the remaining cards (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the number of cards left.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Takes the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Takes up to `count` cards from the top, in draw order.
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        let take = count.min(self.cards.len());
        let mut drawn = self.cards.split_off(self.cards.len() - take);
        drawn.reverse();
        drawn
    }

    /// Removes and returns the first non-special card found scanning down
    /// from `offset` positions below the top.
    ///
    /// Returns `None`, leaving the deck untouched, when no plain card lies at
    /// or below the starting position.
    pub fn take_opening_card(&mut self, offset: usize) -> Option<Card> {
        let start = self.cards.len().checked_sub(offset)?;
        let index = (0..start)
            .rev()
            .find(|&i| !self.cards[i].rank.is_special())?;
        Some(self.cards.remove(index))
    }
}

/// The face-up discard pile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    /// Played cards; the last element is the active card.
    cards: Vec<Card>,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile from cards in play order; the last one is active.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the card the next play is judged against.
    #[must_use]
    pub fn active(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Places a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the number of cards on the pile.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the pile, oldest card first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Moves every card except the active one into `deck` and reshuffles it.
    ///
    /// Afterwards the pile holds only its former active card. Returns the
    /// number of cards recycled, which is zero when the pile held at most one.
    pub fn recycle_into<R: Rng + ?Sized>(&mut self, deck: &mut Deck, rng: &mut R) -> usize {
        let Some(active) = self.cards.pop() else {
            return 0;
        };

        let recycled = self.cards.len();
        deck.cards.append(&mut self.cards);
        deck.shuffle(rng);
        self.cards.push(active);
        recycled
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::card::{DECK_SIZE, Rank, Suit};

    const fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn shuffled_deck_is_complete() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);

        let mut sorted = deck.cards().to_vec();
        let mut reference = standard_deck();
        sorted.sort_by_key(|c| (c.suit as u8, c.rank as u8));
        reference.sort_by_key(|c| (c.suit as u8, c.rank as u8));
        assert_eq!(sorted, reference);
    }

    #[test]
    fn draws_follow_given_order() {
        let mut deck = Deck::from_draws(&[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Spades, Rank::Nine),
        ]);

        assert_eq!(deck.draw(), Some(card(Suit::Hearts, Rank::Ace)));
        assert_eq!(
            deck.draw_many(5),
            [card(Suit::Clubs, Rank::Five), card(Suit::Spades, Rank::Nine)]
        );
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn opening_card_skips_offset_and_special_ranks() {
        let mut deck = Deck::from_draws(&[
            card(Suit::Hearts, Rank::Three),
            card(Suit::Clubs, Rank::Eight),
            card(Suit::Spades, Rank::King),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Hearts, Rank::Nine),
        ]);

        assert_eq!(
            deck.take_opening_card(1),
            Some(card(Suit::Diamonds, Rank::Six))
        );
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.draw(), Some(card(Suit::Hearts, Rank::Three)));
    }

    #[test]
    fn opening_card_scan_from_top_takes_top_card() {
        let mut deck = Deck::from_draws(&[
            card(Suit::Hearts, Rank::Three),
            card(Suit::Clubs, Rank::Five),
        ]);

        assert_eq!(
            deck.take_opening_card(0),
            Some(card(Suit::Hearts, Rank::Three))
        );
        assert_eq!(deck.cards(), [card(Suit::Clubs, Rank::Five)]);
    }

    #[test]
    fn opening_card_scan_reports_exhaustion() {
        let mut deck = Deck::from_draws(&[
            card(Suit::Hearts, Rank::Three),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Spades, Rank::Jack),
        ]);

        assert_eq!(deck.take_opening_card(1), None);
        assert_eq!(deck.len(), 3);
        assert_eq!(Deck::new().take_opening_card(1), None);
    }

    #[test]
    fn recycle_keeps_active_card_on_pile() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut deck = Deck::new();
        let mut pile = Pile::from_cards(alloc::vec![
            card(Suit::Hearts, Rank::Three),
            card(Suit::Hearts, Rank::Seven),
            card(Suit::Clubs, Rank::Seven),
        ]);

        assert_eq!(pile.recycle_into(&mut deck, &mut rng), 2);
        assert_eq!(pile.cards(), [card(Suit::Clubs, Rank::Seven)]);
        assert_eq!(deck.len(), 2);
        assert!(deck.cards().contains(&card(Suit::Hearts, Rank::Three)));
        assert!(deck.cards().contains(&card(Suit::Hearts, Rank::Seven)));
    }

    #[test]
    fn recycle_of_single_card_pile_yields_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut deck = Deck::new();
        let mut pile = Pile::from_cards(alloc::vec![card(Suit::Hearts, Rank::Three)]);

        assert_eq!(pile.recycle_into(&mut deck, &mut rng), 0);
        assert!(deck.is_empty());
        assert_eq!(pile.len(), 1);
    }
}

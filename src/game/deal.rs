use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::DECK_SIZE;
use crate::deck::{Deck, Pile};
use crate::error::{SessionError, StartError};
use crate::hand::Hand;
use crate::game::PlayerId;

use super::{Game, GameStatus, SEATS, Table};

impl Game {
    /// Shuffles a fresh deck, deals the hands, and turns the opening card.
    ///
    /// Each player receives `hand_size` cards in seating order. The opening
    /// card is the first plain card found scanning down from
    /// `opening_scan_offset` below the top of the remaining deck, so the game
    /// never opens on an Eight, Two, Jack, or King. The first seated player
    /// moves first.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for players, fewer than two
    /// players are seated, the hands would use up the deck, or no plain card
    /// is left to open with. The game is unchanged in every case.
    pub fn start(&self) -> Result<(), StartError> {
        let mut table = self.table.lock();
        self.deal(&mut table)
    }

    /// Seats `player` and starts the game as one step.
    ///
    /// If the game cannot start, the seat is given up again, so a failed
    /// attempt leaves the game exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot be seated or the game cannot be
    /// started.
    pub fn join_and_start(&self, player: PlayerId) -> Result<(), SessionError> {
        let mut table = self.table.lock();
        self.seat(&mut table, player)?;

        if let Err(err) = self.deal(&mut table) {
            if let Some(player) = table.players.pop() {
                debug!(game = %self.id, %player, %err, "seat released after failed start");
            }
            table.hands.pop();
            return Err(err.into());
        }
        Ok(())
    }

    fn deal(&self, table: &mut Table) -> Result<(), StartError> {
        if table.status != GameStatus::Waiting {
            return Err(StartError::InvalidState);
        }
        if table.players.len() != SEATS {
            debug!(game = %self.id, seated = table.players.len(), "start rejected");
            return Err(StartError::NotEnoughPlayers);
        }
        if self.options.hand_size.saturating_mul(SEATS) >= DECK_SIZE {
            debug!(game = %self.id, hand_size = self.options.hand_size, "start rejected");
            return Err(StartError::HandSizeTooLarge);
        }

        let mut deck = Deck::shuffled(&mut table.rng);
        let hands: Vec<Hand> = (0..SEATS)
            .map(|_| Hand::from_cards(deck.draw_many(self.options.hand_size)))
            .collect();
        let Some(opening) = deck.take_opening_card(self.options.opening_scan_offset) else {
            debug!(game = %self.id, remaining = deck.len(), "no plain opening card");
            return Err(StartError::NoOpeningCard);
        };

        table.deck = deck;
        table.hands = hands;
        table.pile = Pile::from_cards(alloc::vec![opening]);
        table.suit_override = None;
        table.draw_penalty = 0;
        table.current_turn = Some(0);
        table.status = GameStatus::Playing;

        info!(game = %self.id, opening = ?opening, first = %table.players[0], "game started");
        Ok(())
    }
}

use tracing::debug;

use crate::card::{Card, Rank, Suit};
use crate::error::{PassError, PlayError};
use crate::game::PlayerId;

use super::{Game, Table};

impl Game {
    fn ensure_player_turn(&self, table: &Table, player: &PlayerId) -> Result<usize, PlayError> {
        if self.is_locked(table) {
            return Err(PlayError::GameFinished);
        }

        let seat = table.seat_of(player).ok_or(PlayError::PlayerNotFound)?;
        if table.current_turn != Some(seat) {
            return Err(PlayError::NotYourTurn);
        }

        Ok(seat)
    }

    /// Finishes the game after a King only if the mover is out of cards and
    /// the opponent holds no King to answer with.
    fn check_king_win(&self, table: &mut Table, seat: usize) {
        if !table.hands[seat].is_empty() {
            return;
        }

        let opponent_kings = table
            .opponent_seat(seat)
            .map_or(0, |other| table.hands[other].count_rank(Rank::King));
        if opponent_kings == 0 {
            self.finish(table, seat);
        } else {
            debug!(game = %self.id, opponent_kings, "king win blocked by counter-king");
        }
    }

    /// Plays a card from the player's hand onto the pile.
    ///
    /// Rules, checked in order:
    /// - While a draw penalty is pending only a King may be played; it passes
    ///   the turn and raises the penalty again.
    /// - An Eight is always playable and declares `chosen_suit` as the suit
    ///   to follow.
    /// - Any other card must match the suit to follow (the declared suit, or
    ///   the active card's suit) or the active card's rank.
    /// - A Two or Jack keeps the turn with the player. A King passes the turn
    ///   and raises the penalty. Anything else passes the turn.
    ///
    /// A player who empties their hand wins, except that a Two or Jack never
    /// ends the game and a final King only wins if the opponent holds no King.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the player is not seated, it is
    /// not the player's turn, the card is not in the player's hand, a penalty
    /// is pending and the card is not a King, or the card does not match.
    pub fn play_card(
        &self,
        player: &PlayerId,
        card: Card,
        chosen_suit: Option<Suit>,
    ) -> Result<(), PlayError> {
        let mut table = self.table.lock();
        let result = self.apply_play(&mut table, player, card, chosen_suit);
        if let Err(err) = result {
            debug!(game = %self.id, %player, ?card, %err, "play rejected");
        }
        result
    }

    fn apply_play(
        &self,
        table: &mut Table,
        player: &PlayerId,
        card: Card,
        chosen_suit: Option<Suit>,
    ) -> Result<(), PlayError> {
        let seat = self.ensure_player_turn(table, player)?;
        if !table.hands[seat].contains(card) {
            return Err(PlayError::CardNotInHand);
        }

        if table.draw_penalty > 0 {
            if card.rank != Rank::King {
                return Err(PlayError::PenaltyPending);
            }
            table.discard(seat, card);
            table.pass_turn(seat);
            table.draw_penalty = table.draw_penalty.saturating_add(self.options.king_penalty);
            debug!(game = %self.id, penalty = table.draw_penalty, "king chain escalated");
            return Ok(());
        }

        if card.rank == Rank::Eight {
            table.suit_override = chosen_suit;
            table.discard(seat, card);
            table.pass_turn(seat);
            self.check_win(table, seat);
            return Ok(());
        }

        if let Some(active) = table.pile.active() {
            let suit_to_follow = table.suit_override.unwrap_or(active.suit);
            if card.suit != suit_to_follow && card.rank != active.rank {
                return Err(PlayError::NoMatch);
            }
        }
        table.suit_override = None;

        match card.rank {
            // An emptied hand is not checked here; the player simply keeps the turn.
            Rank::Two | Rank::Jack => {
                table.discard(seat, card);
            }
            Rank::King => {
                table.discard(seat, card);
                table.pass_turn(seat);
                table.draw_penalty = table.draw_penalty.saturating_add(self.options.king_penalty);
                self.check_king_win(table, seat);
            }
            _ => {
                table.discard(seat, card);
                table.pass_turn(seat);
                self.check_win(table, seat);
            }
        }

        Ok(())
    }

    /// Hands the turn to the opponent.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the player is not seated, or it
    /// is not the player's turn.
    pub fn pass(&self, player: &PlayerId) -> Result<(), PassError> {
        let mut table = self.table.lock();
        let seat = self
            .ensure_player_turn(&table, player)
            .map_err(|err| match err {
                PlayError::GameFinished => PassError::GameFinished,
                PlayError::PlayerNotFound => PassError::PlayerNotFound,
                _ => PassError::NotYourTurn,
            })
            .inspect_err(|err| debug!(game = %self.id, %player, %err, "pass rejected"))?;

        table.pass_turn(seat);
        Ok(())
    }
}

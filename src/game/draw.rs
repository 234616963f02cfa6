use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::error::DrawError;
use crate::game::PlayerId;

use super::Game;

impl Game {
    /// Draws cards from the deck into the player's hand.
    ///
    /// With a draw penalty pending, up to that many cards are drawn and the
    /// penalty is cleared; otherwise a single card is drawn. An empty deck is
    /// refilled from the discard pile (all but its active card) before and,
    /// if needed, during the draw. The batch is shorter than requested only
    /// when the deck and pile together cannot supply it.
    ///
    /// Drawing never moves the turn; follow with [`Game::pass`] to do so.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or the player is not seated.
    pub fn draw_card(&self, player: &PlayerId) -> Result<Vec<Card>, DrawError> {
        let mut table = self.table.lock();
        if self.is_locked(&table) {
            debug!(game = %self.id, %player, "draw rejected: game finished");
            return Err(DrawError::GameFinished);
        }
        let Some(seat) = table.seat_of(player) else {
            debug!(game = %self.id, %player, "draw rejected: not seated");
            return Err(DrawError::PlayerNotFound);
        };

        if table.deck.is_empty() {
            table.recycle();
        }

        let drawn = if table.draw_penalty > 0 {
            let wanted = table.draw_penalty as usize;
            let mut drawn = table.deck.draw_many(wanted);
            while drawn.len() < wanted && table.recycle() > 0 {
                let missing = wanted - drawn.len();
                drawn.extend(table.deck.draw_many(missing));
            }
            debug!(
                game = %self.id,
                %player,
                penalty = wanted,
                drawn = drawn.len(),
                "penalty drawn"
            );
            table.draw_penalty = 0;
            drawn
        } else {
            table.deck.draw().into_iter().collect()
        };

        table.hands[seat].extend(&drawn);
        Ok(drawn)
    }
}

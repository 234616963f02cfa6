//! Per-player projection of a game.

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::game::{GameStatus, PlayerId};

use super::{Game, Table};

/// What one player is allowed to see of a game.
///
/// The opponent's hand appears only as a count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameView {
    /// The viewing player's own cards.
    pub your_hand: Vec<Card>,
    /// The active card on the pile.
    pub top_card: Option<Card>,
    /// Whether the viewing player is to move.
    pub is_my_turn: bool,
    /// Number of cards the opponent holds.
    pub opponent_card_count: usize,
    /// Suit declared by the most recent Eight, if still in force.
    pub suit_override: Option<Suit>,
    /// Cards the next drawer must take.
    pub draw_penalty: u32,
    /// Game status.
    pub status: GameStatus,
}

impl Game {
    fn project(table: &Table, seat: usize) -> GameView {
        GameView {
            your_hand: table.hands[seat].cards().to_vec(),
            top_card: table.pile.active(),
            is_my_turn: table.current_turn == Some(seat),
            opponent_card_count: table
                .opponent_seat(seat)
                .map_or(0, |other| table.hands[other].len()),
            suit_override: table.suit_override,
            draw_penalty: table.draw_penalty,
            status: table.status,
        }
    }

    /// Returns the game as seen by `player`.
    ///
    /// Returns `None` if the player is not seated.
    pub fn game_state_for_player(&self, player: &PlayerId) -> Option<GameView> {
        let table = self.table.lock();
        let seat = table.seat_of(player)?;
        Some(Self::project(&table, seat))
    }

    /// Returns one view per seated player, taken at the same instant.
    pub fn views(&self) -> Vec<(PlayerId, GameView)> {
        let table = self.table.lock();
        table
            .players
            .iter()
            .enumerate()
            .map(|(seat, player)| (player.clone(), Self::project(&table, seat)))
            .collect()
    }
}

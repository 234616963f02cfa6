//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use crate::card::{Card, Suit};
use crate::deck::{Deck, Pile};
use crate::error::JoinError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::session::SessionId;
use crate::sync::Mutex;

mod actions;
mod deal;
mod draw;
pub mod state;
mod view;

pub use state::{GameStatus, PlayerId};
pub use view::GameView;

/// Number of seats at a table.
pub const SEATS: usize = 2;

/// Everything that changes while a game is played.
///
/// Every public [`Game`] operation takes the lock on this once and holds it
/// for the whole operation, so concurrent callers are serialized.
struct Table {
    /// Seated players in seating order.
    players: Vec<PlayerId>,
    /// Hands, indexed by seat.
    hands: Vec<Hand>,
    deck: Deck,
    pile: Pile,
    /// Seat whose turn it is.
    current_turn: Option<usize>,
    /// Suit declared by the most recent Eight.
    suit_override: Option<Suit>,
    /// Cards the next drawer must take.
    draw_penalty: u32,
    status: GameStatus,
    rng: ChaCha8Rng,
}

impl Table {
    fn seat_of(&self, player: &PlayerId) -> Option<usize> {
        self.players.iter().position(|seated| seated == player)
    }

    fn opponent_seat(&self, seat: usize) -> Option<usize> {
        (0..self.players.len()).find(|&other| other != seat)
    }

    fn pass_turn(&mut self, seat: usize) {
        self.current_turn = self.opponent_seat(seat);
    }

    /// Moves a held card from the seat's hand onto the pile.
    fn discard(&mut self, seat: usize, card: Card) {
        if self.hands[seat].remove(card) {
            self.pile.push(card);
        }
    }

    /// Refills an empty deck from the pile. Returns the number of cards recycled.
    fn recycle(&mut self) -> usize {
        let Self {
            deck, pile, rng, ..
        } = self;
        let recycled = pile.recycle_into(deck, rng);
        trace!(recycled, "recycled discard pile into deck");
        recycled
    }
}

/// Cards and seating for a position set up by hand rather than dealt.
///
/// Used with [`Game::from_setup`] to resume or reproduce a specific position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSetup {
    /// Seated players in seating order. Only the first two are seated.
    pub players: Vec<PlayerId>,
    /// Hands in seating order. Missing hands start empty.
    pub hands: Vec<Vec<Card>>,
    /// Discard pile, oldest card first; the last card is active.
    pub pile: Vec<Card>,
    /// Draw deck in the order cards will be drawn.
    pub deck: Vec<Card>,
    /// Player whose turn it is.
    pub current_turn: Option<PlayerId>,
}

/// A two-player game of Last Card.
///
/// The game owns the deck, the discard pile, and both hands. None of these
/// are reachable from outside; callers see the game through
/// [`Game::game_state_for_player`], which hides the opponent's cards.
///
/// # Example
///
/// ```
/// use lastcard::{Game, GameOptions, GameStatus, PlayerId};
///
/// let game = Game::new("table-1".into(), GameOptions::default(), 42);
/// game.add_player(PlayerId::from("alice")).unwrap();
/// game.add_player(PlayerId::from("bob")).unwrap();
/// game.start().unwrap();
/// assert_eq!(game.status(), GameStatus::Playing);
/// ```
pub struct Game {
    id: SessionId,
    options: GameOptions,
    table: Mutex<Table>,
}

impl Game {
    /// Creates an empty game waiting for players, shuffling with `seed`.
    #[must_use]
    pub fn new(id: SessionId, options: GameOptions, seed: u64) -> Self {
        Self {
            id,
            options,
            table: Mutex::new(Table {
                players: Vec::new(),
                hands: Vec::new(),
                deck: Deck::new(),
                pile: Pile::new(),
                current_turn: None,
                suit_override: None,
                draw_penalty: 0,
                status: GameStatus::Waiting,
                rng: ChaCha8Rng::seed_from_u64(seed),
            }),
        }
    }

    /// Creates a game in an arbitrary position without dealing.
    ///
    /// The status stays [`GameStatus::Waiting`]; moves are accepted as soon as
    /// `current_turn` names a seated player.
    ///
    /// # Example
    ///
    /// ```
    /// use lastcard::{Card, Game, GameOptions, GameSetup, PlayerId, Rank, Suit};
    ///
    /// let setup = GameSetup {
    ///     players: vec!["p1".into(), "p2".into()],
    ///     hands: vec![
    ///         vec![Card::new(Suit::Hearts, Rank::Five)],
    ///         vec![Card::new(Suit::Clubs, Rank::Queen)],
    ///     ],
    ///     pile: vec![Card::new(Suit::Hearts, Rank::Three)],
    ///     current_turn: Some("p1".into()),
    ///     ..GameSetup::default()
    /// };
    /// let game = Game::from_setup("123".into(), GameOptions::default(), 1, setup);
    /// let view = game.game_state_for_player(&PlayerId::from("p1")).unwrap();
    /// assert!(view.is_my_turn);
    /// ```
    #[must_use]
    pub fn from_setup(id: SessionId, options: GameOptions, seed: u64, setup: GameSetup) -> Self {
        let GameSetup {
            mut players,
            hands,
            pile,
            deck,
            current_turn,
        } = setup;
        players.truncate(SEATS);

        let mut hands: Vec<Hand> = hands
            .into_iter()
            .take(players.len())
            .map(Hand::from_cards)
            .collect();
        hands.resize_with(players.len(), Hand::new);

        let current_turn = current_turn.and_then(|p| players.iter().position(|seated| *seated == p));

        let game = Self::new(id, options, seed);
        {
            let mut table = game.table.lock();
            table.players = players;
            table.hands = hands;
            table.pile = Pile::from_cards(pile);
            table.deck = Deck::from_draws(&deck);
            table.current_turn = current_turn;
        }
        game
    }

    /// Returns the game id.
    #[must_use]
    pub const fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the options this game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Seats a player.
    ///
    /// # Errors
    ///
    /// Returns an error if both seats are taken or the player is already seated.
    pub fn add_player(&self, player: PlayerId) -> Result<(), JoinError> {
        let mut table = self.table.lock();
        self.seat(&mut table, player)
    }

    fn seat(&self, table: &mut Table, player: PlayerId) -> Result<(), JoinError> {
        if table.seat_of(&player).is_some() {
            debug!(game = %self.id, %player, "join rejected: already seated");
            return Err(JoinError::AlreadySeated);
        }
        if table.players.len() >= SEATS {
            debug!(game = %self.id, %player, "join rejected: session full");
            return Err(JoinError::SessionFull);
        }

        debug!(game = %self.id, %player, seat = table.players.len(), "player seated");
        table.players.push(player);
        table.hands.push(Hand::new());
        Ok(())
    }

    /// Returns the seated players in seating order.
    pub fn get_players(&self) -> Vec<PlayerId> {
        self.table.lock().players.clone()
    }

    /// Returns the other seated player, if there is one.
    pub fn get_opponent_id(&self, player: &PlayerId) -> Option<PlayerId> {
        self.table
            .lock()
            .players
            .iter()
            .find(|seated| *seated != player)
            .cloned()
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.table.lock().players.len()
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.table.lock().status
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Option<PlayerId> {
        let table = self.table.lock();
        table
            .current_turn
            .and_then(|seat| table.players.get(seat))
            .cloned()
    }

    /// Returns the pending draw penalty.
    pub fn draw_penalty(&self) -> u32 {
        self.table.lock().draw_penalty
    }

    /// Returns the suit declared by the most recent Eight, if still in force.
    pub fn suit_override(&self) -> Option<Suit> {
        self.table.lock().suit_override
    }

    /// Returns the number of cards left in the draw deck.
    pub fn cards_remaining(&self) -> usize {
        self.table.lock().deck.len()
    }

    /// Returns whether moves are refused because the game is over.
    fn is_locked(&self, table: &Table) -> bool {
        self.options.lock_finished && table.status == GameStatus::Finished
    }

    fn finish(&self, table: &mut Table, winner: usize) {
        table.status = GameStatus::Finished;
        info!(game = %self.id, winner = %table.players[winner], "game finished");
    }

    /// Finishes the game if the seat has no cards left.
    fn check_win(&self, table: &mut Table, seat: usize) {
        if table.hands[seat].is_empty() {
            self.finish(table, seat);
        }
    }
}

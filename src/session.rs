//! Registry of live games keyed by session id.
//!
//! The transport layer owns connections and broadcasting; this store owns
//! the games. Each game sits behind its own lock, so moves in different
//! sessions never wait on each other while moves within one session are
//! applied one at a time.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::info;

use crate::error::SessionError;
use crate::game::{Game, GameView, PlayerId};
use crate::options::GameOptions;
use crate::sync::Mutex;

/// Length of generated session ids.
const SESSION_ID_LEN: usize = 6;

/// Identifier of a session and of the game played in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SessionId(String);

impl SessionId {
    /// Creates a session id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generates a short lowercase base-36 id.
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..SESSION_ID_LEN)
            .filter_map(|_| char::from_digit(rng.random_range(0..36), 36))
            .collect();
        Self(id)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A session closed because one of its players left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// The closed session.
    pub session: SessionId,
    /// The player left behind, who should be told.
    pub opponent: Option<PlayerId>,
}

/// Live games keyed by session id.
///
/// # Example
///
/// ```
/// use lastcard::{GameOptions, GameStatus, PlayerId, SessionStore};
///
/// let store = SessionStore::new(GameOptions::default(), 7);
/// let session = store.create(PlayerId::from("alice")).unwrap();
/// store.join(&session, PlayerId::from("bob")).unwrap();
///
/// let game = store.get(&session).unwrap();
/// assert_eq!(game.status(), GameStatus::Playing);
/// ```
pub struct SessionStore {
    options: GameOptions,
    sessions: Mutex<HashMap<SessionId, Arc<Game>>>,
    /// Source of session ids and per-game shuffle seeds.
    rng: Mutex<ChaCha8Rng>,
}

impl SessionStore {
    /// Creates an empty store. Every game it creates is seeded from `seed`.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            sessions: Mutex::new(HashMap::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Opens a new session with `host` in the first seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot be seated.
    pub fn create(&self, host: PlayerId) -> Result<SessionId, SessionError> {
        let mut sessions = self.sessions.lock();
        let mut rng = self.rng.lock();

        let mut id = SessionId::random(&mut *rng);
        while sessions.contains_key(&id) {
            id = SessionId::random(&mut *rng);
        }
        let seed = rng.next_u64();
        drop(rng);

        let game = Game::new(id.clone(), self.options, seed);
        game.add_player(host)?;
        sessions.insert(id.clone(), Arc::new(game));
        drop(sessions);

        info!(session = %id, "session created");
        Ok(id)
    }

    /// Seats `player` in the session and starts the game.
    ///
    /// A failed start releases the seat again.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist, the player cannot be
    /// seated, or the game cannot be started.
    pub fn join(&self, session: &SessionId, player: PlayerId) -> Result<(), SessionError> {
        let game = self.get(session).ok_or(SessionError::NotFound)?;
        game.join_and_start(player)
    }

    /// Returns the game played in `session`.
    pub fn get(&self, session: &SessionId) -> Option<Arc<Game>> {
        self.sessions.lock().get(session).cloned()
    }

    /// Returns one view per seated player, for broadcasting after a move.
    pub fn views(&self, session: &SessionId) -> Option<Vec<(PlayerId, GameView)>> {
        self.get(session).map(|game| game.views())
    }

    /// Closes a session.
    pub fn remove(&self, session: &SessionId) -> Option<Arc<Game>> {
        let removed = self.sessions.lock().remove(session);
        if removed.is_some() {
            info!(%session, "session removed");
        }
        removed
    }

    /// Closes every session `player` is seated in.
    ///
    /// Returns the closed sessions with the opponent to notify in each.
    pub fn disconnect(&self, player: &PlayerId) -> Vec<Departure> {
        let mut sessions = self.sessions.lock();
        let closing: Vec<SessionId> = sessions
            .iter()
            .filter(|(_, game)| game.get_players().contains(player))
            .map(|(id, _)| id.clone())
            .collect();

        let mut departures = Vec::with_capacity(closing.len());
        for session in closing {
            if let Some(game) = sessions.remove(&session) {
                info!(%session, %player, "session closed on disconnect");
                departures.push(Departure {
                    opponent: game.get_opponent_id(player),
                    session,
                });
            }
        }
        departures
    }

    /// Returns the number of open sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    /// Returns whether no session is open.
    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

//! Game configuration options.

/// Configuration options for a game.
///
/// The defaults are the house rules: seven-card hands, a three-card penalty
/// per King, and finished games locked against further moves.
///
/// ```
/// use lastcard::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(5)
///     .with_king_penalty(2);
/// assert_eq!(options.hand_size, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each player at the start.
    pub hand_size: usize,
    /// Cards added to the draw penalty by each King.
    pub king_penalty: u32,
    /// Position below the top of the deck where the opening-card scan begins.
    pub opening_scan_offset: usize,
    /// Whether a finished game rejects further plays, draws, and passes.
    pub lock_finished: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 7,
            king_penalty: 3,
            opening_scan_offset: 1,
            lock_finished: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use lastcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(8);
    /// assert_eq!(options.hand_size, 8);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the penalty added by each King.
    ///
    /// # Example
    ///
    /// ```
    /// use lastcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_king_penalty(4);
    /// assert_eq!(options.king_penalty, 4);
    /// ```
    #[must_use]
    pub const fn with_king_penalty(mut self, penalty: u32) -> Self {
        self.king_penalty = penalty;
        self
    }

    /// Sets where the opening-card scan starts, counted from the top of the deck.
    #[must_use]
    pub const fn with_opening_scan_offset(mut self, offset: usize) -> Self {
        self.opening_scan_offset = offset;
        self
    }

    /// Sets whether a finished game rejects further moves.
    ///
    /// Disabling the lock reproduces the permissive legacy behavior, where
    /// plays and draws keep mutating a finished game.
    ///
    /// # Example
    ///
    /// ```
    /// use lastcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_lock_finished(false);
    /// assert!(!options.lock_finished);
    /// ```
    #[must_use]
    pub const fn with_lock_finished(mut self, lock: bool) -> Self {
        self.lock_finished = lock;
        self
    }
}

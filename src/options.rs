//! Game configuration options.

use crate::card::DECK_SIZE;
use crate::error::ConfigError;
use crate::hand::HAND_CAPACITY;

/// Fewest players a game can seat.
pub const MIN_PLAYERS: usize = 2;

/// Configuration options for a matching game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use matchpile::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(3)
///     .with_shuffle(false);
/// assert_eq!(options.players, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of players.
    pub players: usize,
    /// Cards dealt to each hand at setup.
    pub initial_hand: usize,
    /// Cards dealt face up to the center pile at setup.
    pub initial_center: usize,
    /// Maximum cards a hand can hold.
    pub hand_capacity: usize,
    /// Whether [`Game::new`](crate::Game::new) shuffles the deck.
    pub shuffle: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: MIN_PLAYERS,
            initial_hand: 4,
            initial_center: 4,
            hand_capacity: HAND_CAPACITY,
            shuffle: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use matchpile::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets how many cards each hand is dealt.
    #[must_use]
    pub const fn with_initial_hand(mut self, cards: usize) -> Self {
        self.initial_hand = cards;
        self
    }

    /// Sets how many cards start in the center pile.
    #[must_use]
    pub const fn with_initial_center(mut self, cards: usize) -> Self {
        self.initial_center = cards;
        self
    }

    /// Sets the hand capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use matchpile::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_capacity(6);
    /// assert_eq!(options.hand_capacity, 6);
    /// ```
    #[must_use]
    pub const fn with_hand_capacity(mut self, capacity: usize) -> Self {
        self.hand_capacity = capacity;
        self
    }

    /// Sets whether the deck is shuffled before dealing.
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Number of cards the initial deal takes from the deck.
    #[must_use]
    pub const fn cards_dealt(&self) -> usize {
        self.players
            .saturating_mul(self.initial_hand)
            .saturating_add(self.initial_center)
    }

    /// Checks that a game can be set up with these options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooFewPlayers`] below two players,
    /// [`ConfigError::TooManyPlayers`] if the deal does not fit in one deck,
    /// [`ConfigError::ZeroHandCapacity`] if hands cannot hold a card, and
    /// [`ConfigError::DealExceedsCapacity`] if a dealt hand would not fit in
    /// a hand.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.players < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers);
        }
        if self.cards_dealt() > DECK_SIZE {
            return Err(ConfigError::TooManyPlayers);
        }
        if self.hand_capacity == 0 {
            return Err(ConfigError::ZeroHandCapacity);
        }
        if self.initial_hand > self.hand_capacity {
            return Err(ConfigError::DealExceedsCapacity);
        }
        Ok(())
    }
}

use alloc::vec::Vec;

use log::{debug, info};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{self, Card};
use crate::error::ConfigError;
use crate::options::GameOptions;
use crate::pile::{Queue, Stack};
use crate::player::Player;

use super::{Game, GameState};

impl Game {
    /// Creates a new game, shuffling the deck with the given seed.
    ///
    /// With [`GameOptions::shuffle`] turned off the standard deck order is
    /// dealt instead, which makes the deal fully predictable.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the options cannot seat a game.
    ///
    /// # Example
    ///
    /// ```
    /// use matchpile::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_players(3), 42).unwrap();
    /// assert_eq!(game.player_count(), 3);
    /// assert_eq!(game.total_cards(), 52);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;
        let mut deck = card::standard_deck();
        if options.shuffle {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            deck.shuffle(&mut rng);
        }
        Self::deal(options, deck)
    }

    /// Creates a new game that deals `deck` in the order given.
    ///
    /// The first cards go to the hands, player 0 first, then the center
    /// pile; the rest become the draw pile in order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDeck`] if `deck` is not exactly one
    /// standard deck, or another [`ConfigError`] if the options cannot seat
    /// a game.
    pub fn from_deck(options: GameOptions, deck: Vec<Card>) -> Result<Self, ConfigError> {
        options.validate()?;
        if !card::is_standard_deck(&deck) {
            return Err(ConfigError::InvalidDeck);
        }
        Self::deal(options, deck)
    }

    fn deal(options: GameOptions, deck: Vec<Card>) -> Result<Self, ConfigError> {
        let mut draw_pile: Queue<Card> = deck.into_iter().collect();
        let mut players = Vec::with_capacity(options.players);

        for _ in 0..options.players {
            let mut player = Player::new(options.hand_capacity);
            for _ in 0..options.initial_hand {
                let card = draw_pile.dequeue().ok_or(ConfigError::TooManyPlayers)?;
                player
                    .hand_mut()
                    .add(card)
                    .map_err(|_| ConfigError::DealExceedsCapacity)?;
            }
            players.push(player);
        }

        let mut center = Stack::new();
        for _ in 0..options.initial_center {
            center.push(draw_pile.dequeue().ok_or(ConfigError::TooManyPlayers)?);
        }

        info!(
            "dealt {} players, {} center cards, {} left to draw",
            players.len(),
            center.len(),
            draw_pile.len()
        );

        let mut game = Self {
            draw_pile,
            center,
            players,
            options,
            state: GameState::TurnStart,
            current: 0,
            next_seat: 0,
        };
        if game.next_actor().is_none() {
            debug!("nothing left to draw after the deal");
            game.finish();
        }
        Ok(game)
    }
}

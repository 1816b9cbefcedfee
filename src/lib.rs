//! A turn-based card-matching game engine with optional `no_std` support.
//!
//! Players draw from a shared draw pile, match hand cards against the
//! center pile, steal each other's earned piles by matching the top card,
//! and discard to end their turn. When the draw pile runs out the earned
//! piles are scored and a winner is picked.
//!
//! The crate provides a [`Game`] type that owns every pile and exposes the
//! turn as small steps ([`Game::start_turn`], [`Game::attempt_match`],
//! [`Game::attempt_steal`], [`Game::discard`]), plus [`Game::run`] to play a
//! whole game through a [`Controller`].
//!
//! # Example
//!
//! ```
//! use matchpile::{Choice, Controller, Game, GameOptions};
//!
//! struct AlwaysDiscard;
//!
//! impl Controller for AlwaysDiscard {
//!     fn choose(&mut self, _game: &Game) -> Choice {
//!         Choice::Discard(0)
//!     }
//! }
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! let result = game.run(&mut AlwaysDiscard);
//! assert_eq!(result.scores.len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod pile;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, standard_deck};
pub use error::{ActionError, CapacityError, ConfigError, InputError, ResultError};
pub use game::{Choice, Controller, Game, GameEvent, GameState, run_game};
pub use hand::{HAND_CAPACITY, Hand};
pub use options::{GameOptions, MIN_PLAYERS};
pub use pile::{Queue, Stack};
pub use player::Player;
pub use result::{Draw, GameResult, MatchOutcome, PlayerScore, StealOutcome, TurnStart};

//! Error types for game operations.

use thiserror::Error;

/// Errors that refuse game construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fewer than two players were requested.
    #[error("at least two players are required")]
    TooFewPlayers,
    /// The initial deal needs more cards than the deck holds.
    #[error("too many players for one deck")]
    TooManyPlayers,
    /// Hands cannot hold a single card.
    #[error("hand capacity must be at least one card")]
    ZeroHandCapacity,
    /// The initial hand is larger than the hand capacity.
    #[error("initial hand size exceeds hand capacity")]
    DealExceedsCapacity,
    /// A supplied deck is not exactly one standard deck.
    #[error("deck must contain each of the 52 standard cards exactly once")]
    InvalidDeck,
}

/// A card was added to a hand that is already full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("hand is at capacity ({capacity} cards)")]
pub struct CapacityError {
    /// The capacity of the hand that refused the card.
    pub capacity: usize,
}

/// Errors that can occur during a player's turn.
///
/// Every variant is recoverable: the turn stays where it was and the player
/// may choose again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Hand index is outside the current hand.
    #[error("no card at that hand position")]
    InvalidHandIndex,
    /// Target player does not exist.
    #[error("no such player")]
    InvalidTarget,
    /// A player tried to steal from their own earned pile.
    #[error("cannot steal from your own earned pile")]
    SelfTarget,
}

/// Errors that can occur while reading shell input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing was entered.
    #[error("no input")]
    Empty,
    /// Input was expected to be a number.
    #[error("not a number")]
    NotANumber,
    /// Action selector is neither 1 nor 2.
    #[error("unknown action")]
    UnknownAction,
    /// Hand position is outside the hand.
    #[error("hand position out of range")]
    IndexOutOfRange,
    /// Player letter does not name a seat.
    #[error("no such player")]
    InvalidTarget,
    /// Player letter names the acting player.
    #[error("cannot steal from yourself")]
    SelfTarget,
}

/// Errors that can occur when reading the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResultError {
    /// The draw pile is not exhausted yet.
    #[error("game is still in progress")]
    GameInProgress,
}

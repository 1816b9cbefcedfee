//! Outcome types for turn actions and the final tally.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::CapacityError;

/// What happened when a player tried to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// A card moved from the draw pile into the hand.
    Card(Card),
    /// The draw pile is exhausted.
    PileEmpty,
    /// The hand is full; the card stays on the draw pile.
    HandFull(CapacityError),
}

impl Draw {
    /// Returns the drawn card, if any.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Self::Card(card) => Some(*card),
            Self::PileEmpty | Self::HandFull(_) => None,
        }
    }
}

/// The start of a player's turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnStart {
    /// Seat index of the acting player.
    pub player: usize,
    /// The opening draw.
    pub draw: Draw,
}

/// Result of trying to match a hand card against the center pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Center cards were collected into the earned pile.
    Matched {
        /// The hand card that was played.
        card: Card,
        /// Number of center cards collected, not counting `card`.
        collected: usize,
        /// The follow-up draw.
        draw: Draw,
        /// Whether the turn ended because the player has nothing left to play.
        turn_ended: bool,
    },
    /// Nothing in the center pile shares the card's rank.
    NoMatch {
        /// The hand card that was tried.
        card: Card,
    },
}

/// Result of trying to steal another player's earned pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StealOutcome {
    /// The target's earned pile now sits under the acting player's card.
    Stole {
        /// Seat the pile was taken from.
        target: usize,
        /// The hand card that matched the target's top card.
        card: Card,
        /// Number of cards taken from the target.
        taken: usize,
        /// The follow-up draw.
        draw: Draw,
        /// Whether the turn ended because the player has nothing left to play.
        turn_ended: bool,
    },
    /// The hand holds nothing matching the target's top card, or the
    /// target's earned pile is empty.
    NoMatch {
        /// Seat that was targeted.
        target: usize,
    },
}

/// A player's final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerScore {
    /// Seat index.
    pub player: usize,
    /// Points in the earned pile.
    pub score: u32,
    /// Number of cards in the earned pile.
    pub earned: usize,
}

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Scores in seat order.
    pub scores: Vec<PlayerScore>,
    /// Seat with the highest score. Ties go to the lowest seat.
    pub winner: usize,
    /// The winning score.
    pub winning_score: u32,
}

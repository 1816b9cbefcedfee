//! Player state: a hand and an earned pile.

use crate::card::Card;
use crate::hand::Hand;
use crate::pile::Stack;

/// A seat at the table.
#[derive(Debug, Clone)]
pub struct Player {
    hand: Hand,
    earned: Stack<Card>,
}

impl Player {
    /// Creates a player with an empty hand of the given capacity.
    #[must_use]
    pub const fn new(hand_capacity: usize) -> Self {
        Self {
            hand: Hand::with_capacity(hand_capacity),
            earned: Stack::new(),
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the player's hand mutably.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the player's earned pile.
    #[must_use]
    pub const fn earned_pile(&self) -> &Stack<Card> {
        &self.earned
    }

    /// Returns the player's earned pile mutably.
    pub const fn earned_pile_mut(&mut self) -> &mut Stack<Card> {
        &mut self.earned
    }

    /// Returns the most recently earned card.
    #[must_use]
    pub fn top_earned(&self) -> Option<Card> {
        self.earned.peek().copied()
    }

    /// Returns the number of cards this player holds across hand and pile.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.earned.len()
    }

    /// Scores the earned pile: Ace 20, J/Q/K 10, numeric ranks 5.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.earned.iter().map(Card::points).sum()
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(crate::hand::HAND_CAPACITY)
    }
}

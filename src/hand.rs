//! Player hand representation.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::CapacityError;

/// Default number of cards a hand can hold.
pub const HAND_CAPACITY: usize = 10;

/// A player's hand: a bounded, ordered run of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were received.
    cards: Vec<Card>,
    /// Maximum number of cards.
    capacity: usize,
}

impl Hand {
    /// Creates an empty hand with the default capacity.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_capacity(HAND_CAPACITY)
    }

    /// Creates an empty hand holding at most `capacity` cards.
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::new(),
            capacity,
        }
    }

    /// Adds a card to the end of the hand.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the hand is full. The card is not stored.
    pub fn add(&mut self, card: Card) -> Result<(), CapacityError> {
        if self.is_full() {
            return Err(CapacityError {
                capacity: self.capacity,
            });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Returns the card at `index` without removing it.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Removes the card at `index`, shifting later cards left.
    ///
    /// Returns `None` and leaves the hand untouched if `index` is out of
    /// range.
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Returns the position of the first card that matches `card` by rank.
    #[must_use]
    pub fn position_matching(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|held| held.matches(card))
    }

    /// Returns the first card that matches `card` by rank.
    #[must_use]
    pub fn find_matching(&self, card: &Card) -> Option<Card> {
        self.position_matching(card).and_then(|index| self.get(index))
    }

    /// Removes the first card that matches `card` by rank, if any.
    pub fn remove_matching(&mut self, card: &Card) -> Option<Card> {
        let index = self.position_matching(card)?;
        self.remove_at(index)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    /// Returns the maximum number of cards.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

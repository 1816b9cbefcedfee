use crate::card::Card;

use super::chain::{Chain, Iter};

/// A last-in, first-out pile.
///
/// The center pile and every earned pile are stacks. Iteration runs from the
/// top (most recently pushed) to the bottom.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    chain: Chain<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Puts a value on top of the stack.
    pub fn push(&mut self, value: T) {
        self.chain.push_front(value);
    }

    /// Removes and returns the top value, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.chain.pop_front()
    }

    /// Returns the top value without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.chain.front()
    }

    /// Returns whether the stack is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Returns the number of values in the stack.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Iterates from top to bottom.
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Moves the whole of `other` on top of this stack.
    ///
    /// `other` keeps its internal order, so its top becomes this stack's new
    /// top and this stack's previous contents sit beneath it. `other` is
    /// left empty.
    pub fn steal_from(&mut self, other: &mut Self) {
        let mut anchor = None;
        while let Some(value) = other.pop() {
            anchor = Some(self.chain.insert_after(anchor, value));
        }
    }

    /// Returns the value `n` positions from the bottom, counting the bottom
    /// as 1 and the top as `len()`.
    ///
    /// Uses a lead/trail two-pointer walk. `n == 0` and `n > len()` both
    /// yield `None`.
    #[must_use]
    pub fn find_nth_from_end(&self, n: usize) -> Option<&T> {
        let mut lead = self.iter();
        for _ in 0..n {
            lead.next()?;
        }
        let mut trail = self.iter();
        for _ in lead {
            trail.next();
        }
        trail.next()
    }
}

impl Stack<Card> {
    /// Moves every card sharing `card`'s rank into `destination`.
    ///
    /// Matches are pushed in top-to-bottom scan order; the remaining cards
    /// keep their relative order. Returns how many cards were moved.
    pub fn collect_matches(&mut self, card: &Card, destination: &mut Self) -> usize {
        self.chain
            .extract_where(|held| held.matches(card), |taken| destination.push(taken))
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes values in iteration order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        for value in iter {
            stack.push(value);
        }
        stack
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use super::chain::{Chain, Iter};

/// A first-in, first-out pile. The draw pile is a queue.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    chain: Chain<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Appends a value at the tail.
    pub fn enqueue(&mut self, value: T) {
        self.chain.push_back(value);
    }

    /// Removes and returns the head value, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.chain.pop_front()
    }

    /// Returns the head value without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.chain.front()
    }

    /// Returns whether the queue is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Returns the number of values in the queue.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Iterates from head to tail.
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Arena-backed singly-linked chain shared by [`Stack`](super::Stack) and
//! [`Queue`](super::Queue).

use alloc::vec::Vec;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// A singly-linked chain whose nodes live in a slot arena.
///
/// Each node owns one value and the index of the next node. Vacated slots
/// are recycled through a free list so a push after a pop does not grow the
/// arena.
#[derive(Debug, Clone)]
pub(crate) struct Chain<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Chain<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn node(&self, index: usize) -> Option<&Node<T>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        if let Some(index) = self.free.pop() {
            self.slots[index] = Some(node);
            index
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        }
    }

    fn release(&mut self, index: usize) -> Option<Node<T>> {
        let node = self.slots.get_mut(index)?.take()?;
        self.free.push(index);
        self.len -= 1;
        Some(node)
    }

    fn set_next(&mut self, index: usize, next: Option<usize>) {
        if let Some(node) = self.node_mut(index) {
            node.next = next;
        }
    }

    pub(crate) fn push_front(&mut self, value: T) {
        self.insert_after(None, value);
    }

    /// Links `value` directly after the node at `anchor`, or at the head
    /// when `anchor` is `None`. Returns the new node's index.
    pub(crate) fn insert_after(&mut self, anchor: Option<usize>, value: T) -> usize {
        let next = match anchor {
            Some(prev) => self.node(prev).and_then(|node| node.next),
            None => self.head,
        };
        let index = self.alloc(Node { value, next });
        match anchor {
            Some(prev) => self.set_next(prev, Some(index)),
            None => self.head = Some(index),
        }
        if next.is_none() {
            self.tail = Some(index);
        }
        self.len += 1;
        index
    }

    pub(crate) fn push_back(&mut self, value: T) {
        let index = self.alloc(Node { value, next: None });
        match self.tail {
            Some(tail) => self.set_next(tail, Some(index)),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.release(head)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(node.value)
    }

    pub(crate) fn front(&self) -> Option<&T> {
        self.head.and_then(|index| self.node(index)).map(|node| &node.value)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Unlinks every value for which `pred` returns `true`, handing each to
    /// `sink` in front-to-back order. Survivors keep their relative order.
    pub(crate) fn extract_where<P, S>(&mut self, mut pred: P, mut sink: S) -> usize
    where
        P: FnMut(&T) -> bool,
        S: FnMut(T),
    {
        let mut removed = 0;
        let mut prev: Option<usize> = None;
        let mut cursor = self.head;

        while let Some(current) = cursor {
            let Some((hit, next)) = self.node(current).map(|node| (pred(&node.value), node.next))
            else {
                break;
            };

            if hit {
                match prev {
                    Some(p) => self.set_next(p, next),
                    None => self.head = next,
                }
                if self.tail == Some(current) {
                    self.tail = prev;
                }
                if let Some(node) = self.release(current) {
                    sink(node.value);
                    removed += 1;
                }
            } else {
                prev = Some(current);
            }
            cursor = next;
        }

        removed
    }

    pub(crate) const fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: self,
            cursor: self.head,
            remaining: self.len,
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back iterator over a chain.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    chain: &'a Chain<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.chain.node(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

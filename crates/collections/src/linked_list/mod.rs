//! A doubly linked list whose nodes live in a `Vec` and point at each other by
//! index. Slots freed by removals are handed out again before the arena grows.

use std::fmt;
use std::iter::FusedIterator;

use log::trace;

use crate::{Error, Result};

struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

pub struct List<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes `value` at the tail
    pub fn append(&mut self, value: T) {
        let i = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        self.set_next(self.tail, Some(i));
        self.tail = Some(i);
        self.len += 1;
    }

    /// Pushes `value` at the head
    pub fn prepend(&mut self, value: T) {
        let i = self.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        self.set_prev(self.head, Some(i));
        self.head = Some(i);
        self.len += 1;
    }

    /// Removes the tail
    pub fn pop(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.unlink(tail)
    }

    /// Removes the head
    pub fn shift(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(head)
    }

    /// Removes the `index`-th element counting from the head
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index >= self.len()`
    pub fn delete(&mut self, index: usize) -> Result<T> {
        let out_of_bounds = Error::IndexOutOfBounds {
            index,
            len: self.len,
        };

        let Some(slot) = self.slot_of(index) else {
            trace!(target: "linked_list", "{out_of_bounds}");
            return Err(out_of_bounds);
        };
        trace!(target: "linked_list", "deleting index {index} from slot {slot}");
        self.unlink(slot).ok_or(out_of_bounds)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.node(self.slot_of(index)?).map(|node| &node.value)
    }

    pub fn front(&self) -> Option<&T> {
        self.node(self.head?).map(|node| &node.value)
    }

    pub fn back(&self) -> Option<&T> {
        self.node(self.tail?).map(|node| &node.value)
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            len: self.len,
        }
    }

    // [private]

    fn node(&self, slot: usize) -> Option<&Node<T>> {
        self.slots.get(slot)?.as_ref()
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(slot)?.as_mut()
    }

    /// Stores `node` in a recycled slot if there is one
    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(i) => {
                self.slots[i] = Some(node);
                i
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Points `at.next` to `to`, with no `at` the head is repointed
    fn set_next(&mut self, at: Option<usize>, to: Option<usize>) {
        if let Some(node) = at.and_then(|i| self.node_mut(i)) {
            node.next = to;
        } else {
            self.head = to;
        }
    }

    /// Points `at.prev` to `to`, with no `at` the tail is repointed
    fn set_prev(&mut self, at: Option<usize>, to: Option<usize>) {
        if let Some(node) = at.and_then(|i| self.node_mut(i)) {
            node.prev = to;
        } else {
            self.tail = to;
        }
    }

    fn unlink(&mut self, slot: usize) -> Option<T> {
        let node = self.slots.get_mut(slot)?.take()?;
        self.set_next(node.prev, node.next);
        self.set_prev(node.next, node.prev);
        self.free.push(slot);
        self.len -= 1;
        Some(node.value)
    }

    /// Finds the slot of the `index`-th element, walking from the nearer end
    fn slot_of(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        if index < self.len / 2 {
            (0..index).try_fold(self.head?, |i, _| self.node(i)?.next)
        } else {
            (index + 1..self.len).try_fold(self.tail?, |i, _| self.node(i)?.prev)
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// [iterators]

pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<usize>,
    back: Option<usize>,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.list.node(self.front?)?;
        self.front = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.list.node(self.back?)?;
        self.back = node.prev;
        self.len -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.shift()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

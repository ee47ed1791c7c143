use std::{iter::FusedIterator, slice};

use super::{HashMap, chain};

/// Lazily walks a [`HashMap`], bucket by bucket, each bucket in chain order.
///
/// Holds a shared borrow of the map, so the map cannot be
/// modified while an `Iter` is alive.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    buckets: slice::Iter<'a, chain::Chain>,
    chain: chain::Iter<'a>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(map: &'a HashMap) -> Self {
        Self {
            buckets: map.buckets.iter(),
            chain: chain::Iter::default(),
            remaining: map.len(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining -= 1;
                return Some((entry.key(), entry.value()));
            }
            // current chain exhausted, move on to the next bucket
            self.chain = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

//! A fixed-capacity, separately chained hash map from strings to strings.
//!
//! The bucket array is allocated once in [`HashMap::new`] and never grows,
//! so the bucket a key lands in only depends on its hash and the capacity
//! the map was created with. Colliding keys share a bucket by being linked
//! into the same [`Chain`].

mod chain;
mod hash;
mod iter;

use std::fmt;

use log::{debug, trace};

pub use chain::{Chain, Entry, Iter as ChainIter};
pub use iter::Iter;

use crate::macros::boxentry;
use crate::{Error, Result};

/// Number of buckets used by [`HashMap::default`]
pub const DEFAULT_CAPACITY: usize = 16;

pub struct HashMap {
    buckets: Box<[Chain]>,
    size: usize,
}

impl Default for HashMap {
    fn default() -> Self {
        Self::with_buckets(DEFAULT_CAPACITY)
    }
}

impl HashMap {
    /// Creates an empty map with `capacity` buckets.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCapacity`] if `capacity` is zero,
    /// there would be nowhere to hash keys into
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self::with_buckets(capacity))
    }

    fn with_buckets(capacity: usize) -> Self {
        debug!(target: "hashmap", "new map with {capacity} buckets");
        Self {
            buckets: (0..capacity).map(|_| Chain::new()).collect(),
            size: 0,
        }
    }

    /// Returns the number of entries in the map
    pub fn len(&self) -> usize {
        self.size
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets, fixed for the lifetime of the map
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Average chain length, entries / buckets
    pub fn load_factor(&self) -> f32 {
        self.size as f32 / self.capacity() as f32
    }

    /// The bucket `key` hashes into
    pub fn bucket_index(&self, key: &str) -> usize {
        hash::hash(key) as usize % self.capacity()
    }

    /// The chain stored in bucket `index`, if the index is in range
    pub fn chain(&self, index: usize) -> Option<&Chain> {
        self.buckets.get(index)
    }

    /// Inserts a new key/value pair at the tail of its bucket's chain.
    ///
    /// Existing values are never overwritten.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if `key` is already stored,
    /// in which case the map is not modified
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let entry = boxentry!(key, value);
        let i = self.bucket_index(&entry.key);

        match self.buckets[i].push_back(entry) {
            Ok(()) => {
                self.size += 1;
                trace!(target: "hashmap", "added to bucket {i}, chain length {}", self.buckets[i].len());
                Ok(())
            }
            Err(rejected) => {
                let Entry { key, .. } = *rejected;
                trace!(target: "hashmap", "rejected duplicate {key:?} in bucket {i}");
                Err(Error::DuplicateKey(key))
            }
        }
    }

    /// Looks up the value stored under `key`
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `key` is not stored
    pub fn get(&self, key: &str) -> Result<&str> {
        self.buckets[self.bucket_index(key)]
            .find(key)
            .map(Entry::value)
            .ok_or_else(|| Error::NotFound(key.to_owned()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Unlinks the entry stored under `key`, returning its value
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `key` is not stored,
    /// in which case the map is not modified
    pub fn del(&mut self, key: &str) -> Result<String> {
        let i = self.bucket_index(key);
        let Some(removed) = self.buckets[i].unlink(key) else {
            trace!(target: "hashmap", "nothing to delete for {key:?} in bucket {i}");
            return Err(Error::NotFound(key.to_owned()));
        };

        self.size -= 1;
        trace!(target: "hashmap", "deleted {key:?} from bucket {i}, {} entries left", self.size);

        let Entry { value, .. } = *removed;
        Ok(value)
    }

    // [adapters]

    /// Iterates over every `(key, value)` pair, in bucket order,
    /// and in insertion order within a bucket
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(_, v)| v)
    }
}

impl<'a> IntoIterator for &'a HashMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for HashMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // only occupied buckets, keyed by their index
        let occupied = self
            .buckets
            .iter()
            .enumerate()
            .filter(|(_, chain)| !chain.is_empty());

        f.debug_map().entries(occupied).finish()
    }
}

#[cfg(test)]
mod test {
    use super::HashMap;
    use crate::{Error, init_logger};

    /// Keys hashing into bucket 70 of a 100 bucket map
    const BUCKET_70: [&str; 3] = ["k0", "k291", "k365"];

    fn fruits() -> HashMap {
        let mut h = HashMap::new(100).unwrap();
        h.add("fruit22", "apple").unwrap();
        h.add("fruit169", "banana").unwrap();
        h.add("fruit94", "cucumber").unwrap();
        h.add("fruit281", "orange").unwrap();
        h
    }

    #[test]
    fn new() {
        init_logger();

        assert_eq!(HashMap::new(0).unwrap_err(), Error::InvalidCapacity(0));

        let h = HashMap::new(7).unwrap();
        assert_eq!(h.capacity(), 7);
        assert_eq!(h.len(), 0);
        assert!(h.is_empty());
        assert!((0..7).all(|i| h.chain(i).is_some_and(|c| c.is_empty())));
        assert!(h.chain(7).is_none());

        assert_eq!(HashMap::default().capacity(), super::DEFAULT_CAPACITY);
    }

    #[test]
    fn add_and_get() {
        init_logger();
        let mut h = HashMap::new(8).unwrap();

        h.add("peti", "is a baby").unwrap();
        h.add("sina", "is a tiny baby").unwrap();

        assert_eq!(h.len(), 2);
        assert_eq!(h.get("peti"), Ok("is a baby"));
        assert_eq!(h.get("sina"), Ok("is a tiny baby"));
        assert_eq!(h.get("nobody"), Err(Error::NotFound("nobody".into())));
        assert!(h.contains_key("peti"));
        assert!(!h.contains_key("nobody"));
    }

    #[test]
    fn duplicate_keeps_first_value() {
        init_logger();
        let mut h = HashMap::new(8).unwrap();

        h.add("foo", "bar").unwrap();
        assert_eq!(h.add("foo", "baz"), Err(Error::DuplicateKey("foo".into())));
        assert_eq!(h.add("foo", "baz"), Err(Error::DuplicateKey("foo".into())));

        assert_eq!(h.get("foo"), Ok("bar"));
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn fruit_scenario() {
        init_logger();
        let mut h = fruits();

        assert_eq!(h.len(), 4);
        assert_eq!(h.get("fruit94"), Ok("cucumber"));

        // fruit169 is chained behind fruit22
        assert_eq!(h.bucket_index("fruit22"), h.bucket_index("fruit169"));
        assert_eq!(h.chain(41).map(|c| c.len()), Some(2));

        assert_eq!(h.del("fruit169"), Ok("banana".into()));
        assert_eq!(h.len(), 3);
        assert_eq!(h.get("fruit169"), Err(Error::NotFound("fruit169".into())));
        assert_eq!(h.get("fruit22"), Ok("apple"));
        assert_eq!(h.chain(41).map(|c| c.len()), Some(1));
    }

    #[test]
    fn colliding_keys() {
        init_logger();
        let mut h = HashMap::new(100).unwrap();

        for k in BUCKET_70 {
            assert_eq!(h.bucket_index(k), 70);
            h.add(k, k.to_uppercase()).unwrap();
        }

        let chain: Vec<_> = h.chain(70).unwrap().iter().map(|e| e.key()).collect();
        assert_eq!(chain, BUCKET_70);
        for k in BUCKET_70 {
            assert_eq!(h.get(k), Ok(k.to_uppercase().as_str()));
        }
    }

    #[test]
    fn del_from_chain() {
        init_logger();

        // head, middle and tail of the same chain
        for (n, victim) in BUCKET_70.iter().enumerate() {
            let mut h = HashMap::new(100).unwrap();
            for k in BUCKET_70 {
                h.add(k, "").unwrap();
            }

            h.del(victim).unwrap();

            let expected: Vec<_> = BUCKET_70
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != n)
                .map(|(_, k)| *k)
                .collect();
            let chain: Vec<_> = h.chain(70).unwrap().iter().map(|e| e.key()).collect();

            assert_eq!(chain, expected);
            assert_eq!(h.len(), 2);
            assert!(h.get(victim).is_err());
        }
    }

    #[test]
    fn failures_do_not_mutate() {
        init_logger();
        let mut h = fruits();
        let before = format!("{h:?}");

        for _ in 0..3 {
            assert_eq!(h.del("fruit0"), Err(Error::NotFound("fruit0".into())));
            assert_eq!(h.add("fruit94", "x"), Err(Error::DuplicateKey("fruit94".into())));
            assert!(h.get("fruit0").is_err());
        }

        assert_eq!(h.len(), 4);
        assert_eq!(format!("{h:?}"), before);
    }

    #[test]
    fn delete_everything() {
        init_logger();
        let mut h = HashMap::new(3).unwrap();

        for i in 0..25 {
            h.add(format!("{i}"), format!("{i}")).unwrap();
        }
        assert_eq!(h.len(), 25);
        assert!(h.load_factor() > 8.0);

        for i in 0..25 {
            let k = format!("{i}");
            assert_eq!(h.del(&k), Ok(k.clone()));
            assert_eq!(h.len(), 24 - i);
        }

        assert!(h.is_empty());
        assert_eq!(h.iter().count(), 0);
        assert_eq!(h.load_factor(), 0.0);
    }

    #[test]
    fn single_bucket() {
        init_logger();
        let mut h = HashMap::new(1).unwrap();

        for i in 0..25 {
            h.add(format!("{i}"), "").unwrap();
        }

        // everything collides, so iteration is plain insertion order
        let keys: Vec<_> = h.keys().map(str::to_owned).collect();
        let expected: Vec<_> = (0..25).map(|i| format!("{i}")).collect();
        assert_eq!(keys, expected);
        dbg!(&h);
    }

    #[test]
    fn iter_matches_len() {
        init_logger();
        let mut h = fruits();
        h.del("fruit22").unwrap();
        h.add("fruit7", "kiwi").unwrap();

        assert_eq!(h.iter().count(), h.len());
        assert_eq!((&h).into_iter().count(), h.len());

        let mut values: Vec<_> = h.values().collect();
        values.sort_unstable();
        assert_eq!(values, ["banana", "cucumber", "kiwi", "orange"]);
    }

    #[test]
    fn dbg() {
        let mut h = HashMap::new(100).unwrap();
        h.add("fruit22", "apple").unwrap();
        h.add("fruit169", "banana").unwrap();

        assert_eq!(format!("{h:?}"), "{41: [<fruit22, apple>, <fruit169, banana>]}");
    }

    #[test]
    fn rust_doc_example() {
        init_logger();
        let mut book_reviews = HashMap::default();

        // Review some books.
        book_reviews.add("Adventures of Huckleberry Finn", "My favorite book.").unwrap();
        book_reviews.add("Grimms' Fairy Tales", "Masterpiece.").unwrap();
        book_reviews.add("Pride and Prejudice", "Very enjoyable.").unwrap();
        book_reviews.add("The Adventures of Sherlock Holmes", "Eye lyked it alot.").unwrap();

        assert!(!book_reviews.contains_key("Les Misérables"));

        // oops, this review has a lot of spelling mistakes, let's delete it.
        book_reviews.del("The Adventures of Sherlock Holmes").unwrap();
        assert_eq!(book_reviews.len(), 3);

        assert_eq!(book_reviews.get("Pride and Prejudice"), Ok("Very enjoyable."));
        assert!(matches!(
            book_reviews.get("Alice's Adventure in Wonderland"),
            Err(Error::NotFound(_))
        ));

        for (book, review) in &book_reviews {
            println!("{book}: \"{review}\"");
        }
    }
}

use std::fmt;

/// One key/value association, owning the rest of its chain
pub struct Entry {
    pub(crate) key: String,
    pub(crate) value: String,
    pub(crate) next: Option<Box<Entry>>,
}

impl Entry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The entry linked after this one in the same bucket
    pub fn next(&self) -> Option<&Entry> {
        self.next.as_deref()
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}
impl Eq for Entry {}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.key, self.value)
    }
}

/// The contents of a single bucket: a singly linked list of entries
/// kept in insertion order, new entries go to the tail
#[derive(Default)]
pub struct Chain {
    head: Option<Box<Entry>>,
    len: usize,
}

impl Chain {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&Entry> {
        self.head.as_deref()
    }

    pub fn find(&self, key: &str) -> Option<&Entry> {
        self.iter().find(|entry| entry.key == key)
    }

    /// Walks to the tail and links `entry` after it.
    ///
    /// If an entry with the same key is met on the way the chain is left as is
    /// and `entry` is handed back.
    pub(crate) fn push_back(&mut self, entry: Box<Entry>) -> Result<(), Box<Entry>> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            if node.key == entry.key {
                return Err(entry);
            }
            link = &mut node.next;
        }

        *link = Some(entry);
        self.len += 1;
        Ok(())
    }

    /// Splices the entry holding `key` out of the chain,
    /// whoever owned it (the bucket or its predecessor) takes over its successor
    pub(crate) fn unlink(&mut self, key: &str) -> Option<Box<Entry>> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.key != key) {
            link = &mut link.as_mut()?.next;
        }

        let mut removed = link.take()?;
        *link = removed.next.take();
        self.len -= 1;
        Some(removed)
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            current: self.head(),
            len: self.len,
        }
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        // unlink one box at a time, dropping the head directly
        // would recurse once per entry
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// [iterators]

#[derive(Debug, Clone, Default)]
pub struct Iter<'a> {
    current: Option<&'a Entry>,
    len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.current = node.next();
        self.len -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for Iter<'_> {}

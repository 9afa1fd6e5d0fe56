//! Chain: the collision list of a single bucket.
//!
//! Entries are stored in an arena shared by every chain of a map; a chain
//! is only a head key plus a `next` link in each node, so chains never
//! point at each other or at the map. The list is kept most-recent-first
//! and holds at most one entry per key.

use crate::entry::{match_by_key, Entry};
use slotmap::{DefaultKey, SlotMap};

/// A linked node in the shared arena.
#[derive(Debug)]
pub struct Node<K, V> {
    entry: Entry<K, V>,
    next: Option<DefaultKey>,
}

/// Arena holding the nodes of every chain in one map.
pub type ChainSlots<K, V> = SlotMap<DefaultKey, Node<K, V>>;

/// Not `Clone`: a copy would alias nodes the original may free.
#[derive(Debug, Default)]
pub struct Chain {
    head: Option<DefaultKey>,
    len: usize,
}

/// Head-to-tail traversal of one chain.
pub struct Iter<'a, K, V> {
    slots: &'a ChainSlots<K, V>,
    cur: Option<DefaultKey>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let slots = self.slots;
        let node = &slots[self.cur?];
        self.cur = node.next;
        Some(&node.entry)
    }
}

impl Chain {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg_attr(not(feature = "bench_internal"), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter<'a, K, V>(&self, slots: &'a ChainSlots<K, V>) -> Iter<'a, K, V> {
        Iter {
            slots,
            cur: self.head,
        }
    }

    /// Map `key` to `value`, replacing any entry with the same key.
    ///
    /// The new entry always becomes the head. Returns the displaced entry,
    /// if there was one.
    pub fn map<K, V>(
        &mut self,
        slots: &mut ChainSlots<K, V>,
        key: K,
        value: V,
    ) -> Option<Entry<K, V>>
    where
        K: PartialEq,
    {
        let displaced = self.unmap(slots, &key);
        let node = Node {
            entry: Entry::new(key, value),
            next: self.head,
        };
        self.head = Some(slots.insert(node));
        self.len += 1;
        displaced
    }

    pub fn find<'a, K, V>(
        &self,
        slots: &'a ChainSlots<K, V>,
        key: &K,
    ) -> Option<&'a Entry<K, V>>
    where
        K: PartialEq,
    {
        let matches = match_by_key(key);
        self.iter(slots).find(|e| matches(*e))
    }

    pub fn has_matching_entry<K, V>(&self, slots: &ChainSlots<K, V>, key: &K) -> bool
    where
        K: PartialEq,
    {
        let matches = match_by_key(key);
        self.iter(slots).any(|e| matches(e))
    }

    /// Unlink and return the entry for `key`; no-op when absent.
    pub fn unmap<K, V>(&mut self, slots: &mut ChainSlots<K, V>, key: &K) -> Option<Entry<K, V>>
    where
        K: PartialEq,
    {
        let matches = match_by_key(key);
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.head;

        while let Some(at) = cur {
            let (hit, next) = {
                let node = &slots[at];
                (matches(&node.entry), node.next)
            };
            if hit {
                match prev {
                    None => self.head = next,
                    Some(p) => slots[p].next = next,
                }
                self.len -= 1;
                let removed = slots.remove(at).map(|n| n.entry);
                // At most one entry per key, so the rest of the chain is clean.
                debug_assert!(!self.has_matching_entry(slots, key));
                return removed;
            }
            prev = Some(at);
            cur = next;
        }
        None
    }
}

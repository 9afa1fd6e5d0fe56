//! ChainedMap: fixed bucket array routing every operation to one chain.

use crate::chain::{Chain, ChainSlots};
use crate::error::ValueNotFound;
use crate::key::BucketKey;
use log::{debug, trace};
use slotmap::SlotMap;

/// Number of buckets used when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Fixed-capacity map from keys to values using separate chaining.
///
/// `CAPACITY` buckets are allocated up front and never change. A key `k`
/// always lives in bucket `k mod CAPACITY`; colliding keys share that
/// bucket's chain, most recently written first.
#[derive(Debug)]
pub struct ChainedMap<K, V, const CAPACITY: usize = DEFAULT_CAPACITY> {
    buckets: Box<[Chain]>,
    slots: ChainSlots<K, V>, // node storage shared by all chains
}

impl<K, V, const CAPACITY: usize> ChainedMap<K, V, CAPACITY>
where
    K: BucketKey,
{
    const NON_ZERO_CAPACITY: () = assert!(CAPACITY > 0, "ChainedMap needs at least one bucket");

    pub fn new() -> Self {
        let () = Self::NON_ZERO_CAPACITY;
        debug!("creating chained map with {} buckets", CAPACITY);
        Self {
            buckets: (0..CAPACITY).map(|_| Chain::new()).collect(),
            slots: SlotMap::new(),
        }
    }

    /// Bucket index of `key`: `key mod CAPACITY`, always in `[0, CAPACITY)`.
    #[inline]
    pub fn hash(key: K) -> usize {
        key.bucket(CAPACITY)
    }

    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of entries chained in `bucket`; zero for an index out of range.
    pub fn chain_len(&self, bucket: usize) -> usize {
        self.buckets.get(bucket).map_or(0, Chain::len)
    }

    /// Map `key` to `value`, replacing any previous value for `key`.
    pub fn put(&mut self, key: K, value: V) {
        let bucket = Self::hash(key);
        if self.buckets[bucket]
            .map(&mut self.slots, key, value)
            .is_some()
        {
            trace!("put replaced {:?} in bucket {}", key, bucket);
        }
    }

    /// Value stored for `key`, or `ValueNotFound` carrying `key`.
    pub fn get(&self, key: K) -> Result<&V, ValueNotFound<K>> {
        let bucket = Self::hash(key);
        match self.buckets[bucket].find(&self.slots, &key) {
            Some(entry) => Ok(entry.value()),
            None => {
                trace!("get missed {:?} in bucket {}", key, bucket);
                Err(ValueNotFound::new(key))
            }
        }
    }

    pub fn has_value_for(&self, key: K) -> bool {
        let bucket = Self::hash(key);
        self.buckets[bucket].has_matching_entry(&self.slots, &key)
    }

    /// Remove any entry for `key`. Absent keys are not an error.
    pub fn unmap(&mut self, key: K) {
        let bucket = Self::hash(key);
        if self.buckets[bucket].unmap(&mut self.slots, &key).is_some() {
            trace!("unmapped {:?} from bucket {}", key, bucket);
        }
    }
}

impl<K, V, const CAPACITY: usize> Default for ChainedMap<K, V, CAPACITY>
where
    K: BucketKey,
{
    fn default() -> Self {
        Self::new()
    }
}

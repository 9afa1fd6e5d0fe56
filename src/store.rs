//! KeyValueStore: the abstract capability harnesses drive.

use crate::chained_map::ChainedMap;
use crate::error::ValueNotFound;
use crate::key::BucketKey;

/// A store mapping each unique key to zero or one value.
///
/// Implementations decide the storage; callers only rely on these four
/// operations. `unmap` on an absent key is a successful no-op.
pub trait KeyValueStore<K, V> {
    /// Assign `value` at `key`, replacing any value already stored there.
    fn put(&mut self, key: K, value: V);

    /// A copy of the value stored at `key`.
    fn get(&self, key: K) -> Result<V, ValueNotFound<K>>;

    fn has_value_for(&self, key: K) -> bool;

    fn unmap(&mut self, key: K);
}

impl<K, V, const CAPACITY: usize> KeyValueStore<K, V> for ChainedMap<K, V, CAPACITY>
where
    K: BucketKey,
    V: Clone,
{
    #[inline]
    fn put(&mut self, key: K, value: V) {
        ChainedMap::put(self, key, value)
    }

    #[inline]
    fn get(&self, key: K) -> Result<V, ValueNotFound<K>> {
        ChainedMap::get(self, key).cloned()
    }

    #[inline]
    fn has_value_for(&self, key: K) -> bool {
        ChainedMap::has_value_for(self, key)
    }

    #[inline]
    fn unmap(&mut self, key: K) {
        ChainedMap::unmap(self, key)
    }
}

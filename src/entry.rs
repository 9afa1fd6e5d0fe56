//! Entry: a stored key/value pair and the key-matching predicate.

/// A key/value pair held in a chain. The key is fixed once stored.
#[derive(Clone, Debug)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Entries are the same mapping iff their keys match; values are ignored.
impl<K: PartialEq, V> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        match_by_key(&self.key)(other)
    }
}

impl<K: Eq, V> Eq for Entry<K, V> {}

/// Predicate matching entries whose key equals `key`.
///
/// Every chain operation that looks an entry up by key goes through this,
/// so "same mapping" means exactly one thing: equal keys. Values never
/// take part in the comparison.
#[inline]
pub fn match_by_key<K, V>(key: &K) -> impl Fn(&Entry<K, V>) -> bool + '_
where
    K: PartialEq,
{
    move |entry: &Entry<K, V>| entry.key == *key
}

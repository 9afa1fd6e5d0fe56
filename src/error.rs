//! Domain errors.

use thiserror::Error;

/// Lookup found no entry for `key`.
///
/// Returned only by `get`; every other operation is total.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("no value stored for key {key:?}")]
pub struct ValueNotFound<K> {
    key: K,
}

impl<K> ValueNotFound<K> {
    pub fn new(key: K) -> Self {
        Self { key }
    }

    /// The key whose lookup failed.
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn into_key(self) -> K {
        self.key
    }
}

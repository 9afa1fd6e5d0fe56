//! chained-map: a fixed-capacity key/value store built from an array of
//! separately chained buckets.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: the smallest map that is still easy to reason about: a fixed
//!   bucket array, a fixed `key mod CAPACITY` hash, and one collision list
//!   per bucket.
//! - Layers:
//!   - Entry<K, V>: plain key/value pair plus `match_by_key`, the single
//!     predicate deciding whether two mappings are the same.
//!   - Chain: one bucket's collision list, most-recent-first, with at most
//!     one entry per key.
//!   - ChainedMap<K, V, CAPACITY>: owns the buckets and routes every
//!     operation to exactly one chain.
//!   - KeyValueStore<K, V>: the four-operation capability harnesses and
//!     benchmarks are written against.
//!
//! Constraints
//! - Single-threaded: mutation takes `&mut self`, so callers that share a
//!   map across threads wrap it themselves (e.g. in a `Mutex`).
//! - Capacity is a const parameter (default 1024) and never changes; there
//!   is no resizing or rehashing. Zero buckets is a compile-time error.
//! - Keys are integers or `char` (see `BucketKey`). Signed keys use the
//!   Euclidean remainder so negative keys stay in range.
//! - Missing keys are reported through `Result`, never by panicking.
//!
//! Storage
//! - Nodes of every chain live in one `slotmap` arena owned by the map; a
//!   chain is just a head key and each node carries a `next` key. Chains
//!   never reference the map or each other, so there are no cycles and
//!   dropping the map drops every entry.
//! - `put` on an existing key unlinks the old node before linking the new
//!   one at the head, so the old value is never observable afterwards.
//!
//! Notes and non-goals
//! - No iteration over the whole map; `chain_len` and `len` are the only
//!   structural views.
//! - No custom hashers: bucket placement must stay predictable for
//!   harnesses measuring it.
//! - Logging goes through the `log` facade at debug/trace level; the crate
//!   never installs a logger.

#[cfg(not(feature = "bench_internal"))]
mod chain;
#[cfg(feature = "bench_internal")]
pub mod chain;
mod chained_map;
mod chained_map_proptest;
pub mod entry;
mod error;
mod key;
mod store;

// Public surface
pub use chained_map::{ChainedMap, DEFAULT_CAPACITY};
pub use error::ValueNotFound;
pub use key::BucketKey;
pub use store::KeyValueStore;

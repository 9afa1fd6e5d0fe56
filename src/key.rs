//! Bucket selection: maps a key onto `[0, capacity)` by modulo.

use core::fmt::Debug;

/// A key that can be placed in a bucket by `key mod capacity`.
///
/// The table never hashes keys any other way; this trait only fixes how
/// each key type reaches a non-negative integer before the modulo is taken.
/// Unsigned keys are used as-is, signed keys use the Euclidean remainder so
/// negative keys still land inside the table, and `char` uses its scalar
/// value. Other key types must be mapped to one of these by the caller.
pub trait BucketKey: Copy + Eq + Debug {
    /// Bucket index for this key in a table of `capacity` buckets.
    ///
    /// `capacity` must be non-zero; the result is always `< capacity`.
    fn bucket(self, capacity: usize) -> usize;
}

macro_rules! unsigned_bucket_key {
    ($($t:ty),* $(,)?) => {$(
        impl BucketKey for $t {
            #[inline]
            fn bucket(self, capacity: usize) -> usize {
                // Widen first so large keys are reduced, not truncated.
                (self as u128 % capacity as u128) as usize
            }
        }
    )*};
}

macro_rules! signed_bucket_key {
    ($($t:ty),* $(,)?) => {$(
        impl BucketKey for $t {
            #[inline]
            fn bucket(self, capacity: usize) -> usize {
                (self as i128).rem_euclid(capacity as i128) as usize
            }
        }
    )*};
}

unsigned_bucket_key!(u8, u16, u32, u64, u128, usize);
signed_bucket_key!(i8, i16, i32, i64, i128, isize);

impl BucketKey for char {
    #[inline]
    fn bucket(self, capacity: usize) -> usize {
        (self as u32).bucket(capacity)
    }
}

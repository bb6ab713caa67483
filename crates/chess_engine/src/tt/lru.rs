use std::collections::HashMap;
use std::num::NonZeroUsize;

use tracing::trace;

use super::TranspositionCache;
use crate::hash::HashPair;

/// Least-recently-used cache with per-`low` buckets.
///
/// Capacity counts buckets, not entries. Evicting a bucket drops every entry that shares its
/// `low` half.
pub struct LruCache<V> {
    buckets: ::lru::LruCache<u32, HashMap<u32, V>>,
}

fn non_zero(capacity: usize) -> NonZeroUsize {
    NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)
}

impl<V> LruCache<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            buckets: ::lru::LruCache::new(non_zero(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.buckets.cap().get()
    }
}

impl<V> TranspositionCache<V> for LruCache<V> {
    fn get(&mut self, hash: HashPair) -> Option<&V> {
        self.buckets.get(&hash.low)?.get(&hash.high)
    }

    fn add(&mut self, hash: HashPair, value: V) -> &V {
        if self.buckets.len() == self.capacity() && !self.buckets.contains(&hash.low) {
            if let Some((low, bucket)) = self.buckets.pop_lru() {
                trace!(bucket = low, entries = bucket.len(), "[TT] evicting bucket");
            }
        }
        let bucket = self.buckets.get_or_insert_mut(hash.low, HashMap::new);
        bucket.insert(hash.high, value);
        &bucket[&hash.high]
    }

    fn size(&self) -> usize {
        self.buckets.len()
    }

    fn clear(&mut self) {
        self.buckets.clear();
    }

    fn set_capacity(&mut self, capacity: usize) {
        self.buckets.resize(non_zero(capacity));
    }
}

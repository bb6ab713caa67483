use std::collections::HashMap;

use tracing::trace;

use super::TranspositionCache;
use crate::hash::HashPair;

/// Grows until it holds `capacity` entries, then starts over from empty on the next insert.
pub struct ClearWhenFullCache<V> {
    buckets: HashMap<u32, HashMap<u32, V>>,
    capacity: usize,
    entries: usize,
}

impl<V> ClearWhenFullCache<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            buckets: HashMap::new(),
            capacity: capacity.max(1),
            entries: 0,
        }
    }
}

impl<V> TranspositionCache<V> for ClearWhenFullCache<V> {
    fn get(&mut self, hash: HashPair) -> Option<&V> {
        self.buckets.get(&hash.low)?.get(&hash.high)
    }

    fn add(&mut self, hash: HashPair, value: V) -> &V {
        // may clear one insert early when `hash` is already present
        if self.entries >= self.capacity {
            trace!(entries = self.entries, "[TT] cache full, clearing");
            self.clear();
        }
        let bucket = self.buckets.entry(hash.low).or_default();
        if bucket.insert(hash.high, value).is_none() {
            self.entries += 1;
        }
        &bucket[&hash.high]
    }

    fn size(&self) -> usize {
        self.entries
    }

    fn clear(&mut self) {
        self.buckets.clear();
        self.entries = 0;
    }

    fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resets_after_capacity_reached() {
        let mut cache = ClearWhenFullCache::new(5);
        for i in 0..5 {
            cache.add(HashPair { low: i, high: i }, i);
        }
        assert_eq!(cache.size(), 5);

        cache.add(HashPair { low: 5, high: 5 }, 5);
        assert_eq!(cache.size(), 1);
        assert_eq!(cache.get(HashPair { low: 0, high: 0 }), None);
        assert_eq!(cache.get(HashPair { low: 5, high: 5 }), Some(&5));
    }

    #[test]
    fn test_size_counts_entries_in_shared_bucket() {
        let mut cache = ClearWhenFullCache::new(10);
        cache.add(HashPair { low: 1, high: 1 }, 'a');
        cache.add(HashPair { low: 1, high: 2 }, 'b');
        cache.add(HashPair { low: 1, high: 2 }, 'c');
        assert_eq!(cache.size(), 2, "replacing an entry does not grow the cache");
        assert_eq!(cache.get(HashPair { low: 1, high: 2 }), Some(&'c'));
    }

    #[test]
    fn test_set_capacity_applies_to_next_insert() {
        let mut cache = ClearWhenFullCache::new(10);
        for i in 0..3 {
            cache.add(HashPair { low: i, high: 0 }, i);
        }
        cache.set_capacity(3);
        cache.add(HashPair { low: 9, high: 0 }, 9);
        assert_eq!(cache.size(), 1);
    }
}

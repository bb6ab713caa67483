//! Transposition caches
//!
//! Search results and legal-move lists are cached by [`HashPair`]. Two eviction policies share the
//! [`TranspositionCache`] contract:
//!
//! - [`LruCache`] groups entries in buckets keyed by `low` and evicts whole buckets, least
//!   recently touched first, once the bucket count exceeds its capacity.
//! - [`ClearWhenFullCache`] counts entries and throws everything away when an insert arrives at
//!   capacity. Cheaper bookkeeping at the price of an occasional burst of recomputation.
//!
//! Both only report a hit on exact `(low, high)` equality. Two different positions with identical
//! pairs are indistinguishable; that risk is accepted, not detected.

mod clear_when_full;
mod lru;

use serde::{Deserialize, Serialize};

use crate::hash::HashPair;

pub use self::clear_when_full::ClearWhenFullCache;
pub use self::lru::LruCache;

pub trait TranspositionCache<V> {
    /// Entry stored under exactly this hash, if any.
    fn get(&mut self, hash: HashPair) -> Option<&V>;

    /// Stores `value`, replacing any previous entry for the same hash, and returns the stored entry.
    fn add(&mut self, hash: HashPair, value: V) -> &V;

    /// Number of buckets (LRU) or entries (clear-when-full) currently held.
    fn size(&self) -> usize;

    fn clear(&mut self);

    fn set_capacity(&mut self, capacity: usize);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheKind {
    #[default]
    Lru,
    ClearWhenFull,
}

pub type BoxedCache<V> = Box<dyn TranspositionCache<V> + Send>;

/// Builds the cache selected by configuration.
pub fn new_cache<V: Send + 'static>(kind: CacheKind, capacity: usize) -> BoxedCache<V> {
    match kind {
        CacheKind::Lru => Box::new(LruCache::new(capacity)),
        CacheKind::ClearWhenFull => Box::new(ClearWhenFullCache::new(capacity)),
    }
}

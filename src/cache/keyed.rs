//! Keyed Cache Module
//!
//! In-memory cache keyed by spacecraft id. The service layer reads through
//! it: successful store lookups populate it, and writes drop the entry for
//! the touched key so no stale value survives an update or delete.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::cache::CacheStats;

// == Keyed Cache ==
/// Unbounded keyed cache with hit/miss/invalidation counters.
///
/// Entries never expire; they leave the cache only through `invalidate` or
/// `clear`. All methods take `&self` and hold the inner lock only for the
/// duration of a map operation, never across I/O.
#[derive(Debug)]
pub struct KeyedCache<K, V> {
    /// Key-value storage
    entries: RwLock<HashMap<K, V>>,
    /// Lookups answered from the map
    hits: AtomicU64,
    /// Lookups that found nothing
    misses: AtomicU64,
    /// Entries removed by invalidation
    invalidations: AtomicU64,
}

impl<K: Eq + Hash, V: Clone> KeyedCache<K, V> {
    // == Constructor ==
    /// Creates an empty cache with all counters at zero.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            invalidations: AtomicU64::new(0),
        }
    }

    // == Get ==
    /// Returns a clone of the cached value for `key`, if present.
    ///
    /// Records a hit or a miss.
    pub fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        match entries.get(key) {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(value.clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    // == Put ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// A key holds at most one value, so putting twice leaves one entry.
    pub fn put(&self, key: K, value: V) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key, value);
    }

    // == Invalidate ==
    /// Removes the entry for `key`, returning true if one was removed.
    ///
    /// Invalidating an absent key is a no-op, so repeated invalidation of
    /// the same key is safe. Only actual removals are counted.
    pub fn invalidate(&self, key: &K) -> bool {
        let removed = {
            let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
            entries.remove(key).is_some()
        };
        if removed {
            self.invalidations.fetch_add(1, Ordering::Relaxed);
        }
        removed
    }

    // == Clear ==
    /// Removes every entry. Counters keep their values.
    #[allow(dead_code)]
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.clear();
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // == Stats ==
    /// Snapshot of the counters and the current entry count.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            invalidations: self.invalidations.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

impl<K: Eq + Hash, V: Clone> Default for KeyedCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

//! Response Cache Module
//!
//! TTL key/value store memoizing raw model completions keyed by request
//! fingerprint. Entries expire lazily at read time; a background sweep
//! removes expired entries the readers never observe. No capacity bound.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};

// == Response Cache ==
/// Fingerprint-keyed store for upstream completion text.
#[derive(Debug)]
pub struct ResponseCache {
    /// Fingerprint -> cached completion
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in milliseconds applied when `set` is called without one
    default_ttl_ms: u64,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a new cache with the given default TTL in milliseconds.
    pub fn new(default_ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl_ms,
        }
    }

    // == Set ==
    /// Stores a completion under a fingerprint key with an optional TTL.
    ///
    /// An existing entry for the same fingerprint is overwritten and its
    /// expiry reset. Key equality is by the fingerprint string itself, so
    /// structurally equal requests hit the same slot.
    pub fn set(&mut self, key: String, value: String, ttl_ms: Option<u64>) {
        let entry = CacheEntry::new(value, ttl_ms.unwrap_or(self.default_ttl_ms));
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves the completion cached under a fingerprint, if still live.
    ///
    /// An entry whose TTL elapsed is removed on observation and reported as
    /// a miss.
    pub fn get(&mut self, key: &str) -> Option<String> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.entries.remove(key);
                self.stats.record_expired(1);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Purge Expired ==
    /// Removes all expired entries, returning how many were dropped.
    ///
    /// Called by the background sweep task.
    pub fn purge_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        self.stats.record_expired(count as u64);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

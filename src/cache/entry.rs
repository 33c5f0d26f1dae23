//! Cache Entry Module
//!
//! Defines the structure for cached model completions with absolute expiry.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached completion with its expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached payload (raw model completion text)
    pub value: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_ms` milliseconds from now.
    pub fn new(value: String, ttl_ms: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            value,
            created_at: now,
            expires_at: now + ttl_ms,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to `expires_at`, so an entry with a zero TTL is
    /// immediately absent.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining lifetime in milliseconds, zero once expired.
    #[allow(dead_code)]
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

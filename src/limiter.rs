//! Rate Limiter Module
//!
//! Sliding-window request counter per client identity, gating admission to
//! the generation pipeline. Each identity's history is pruned to the active
//! window on every check; rejected attempts are not recorded and do not
//! count toward the window.

use std::collections::{HashMap, VecDeque};

use crate::cache::current_timestamp_ms;

// == Rate Limiter ==
/// Per-identity sliding-window admission control.
#[derive(Debug)]
pub struct RateLimiter {
    /// Maximum admitted requests per identity within the window
    limit: usize,
    /// Window length in milliseconds
    window_ms: u64,
    /// Identity -> admitted request timestamps (oldest first)
    windows: HashMap<String, VecDeque<u64>>,
}

impl RateLimiter {
    // == Constructor ==
    /// Creates a limiter admitting `limit` requests per `window_ms` per identity.
    pub fn new(limit: usize, window_ms: u64) -> Self {
        Self {
            limit,
            window_ms,
            windows: HashMap::new(),
        }
    }

    // == Admit ==
    /// Checks and records a request for `identity` against the wall clock.
    ///
    /// Returns true iff fewer than `limit` requests from this identity fall
    /// within the trailing window, in which case the request is recorded.
    pub fn admit(&mut self, identity: &str) -> bool {
        self.admit_at(identity, current_timestamp_ms())
    }

    // == Admit At ==
    /// Clock-explicit admission check; `admit` delegates here.
    ///
    /// Taking the timestamp as a parameter keeps the window arithmetic
    /// deterministic under test.
    pub fn admit_at(&mut self, identity: &str, now_ms: u64) -> bool {
        let window_ms = self.window_ms;
        let limit = self.limit;
        let window = self.windows.entry(identity.to_string()).or_default();

        // Prune history to the trailing window before the size check
        while window
            .front()
            .is_some_and(|&t| now_ms.saturating_sub(t) >= window_ms)
        {
            window.pop_front();
        }

        if window.len() >= limit {
            return false;
        }

        window.push_back(now_ms);
        true
    }

    // == Prune Idle ==
    /// Drops identities whose entire history fell out of the window.
    ///
    /// Returns the number of identities removed. Called by the background
    /// sweep task so long-gone clients do not accumulate.
    pub fn prune_idle(&mut self) -> usize {
        self.prune_idle_at(current_timestamp_ms())
    }

    /// Clock-explicit variant of [`prune_idle`](Self::prune_idle).
    pub fn prune_idle_at(&mut self, now_ms: u64) -> usize {
        let before = self.windows.len();
        let window_ms = self.window_ms;
        self.windows.retain(|_, window| {
            window
                .back()
                .is_some_and(|&t| now_ms.saturating_sub(t) < window_ms)
        });
        before - self.windows.len()
    }

    // == Tracked Identities ==
    /// Returns the number of identities currently tracked.
    pub fn tracked_identities(&self) -> usize {
        self.windows.len()
    }
}

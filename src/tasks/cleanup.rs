//! Guard-State Sweep Task
//!
//! Background task that periodically removes expired completion-cache
//! entries and rate-limiter identities whose windows emptied. Readers
//! already evict lazily; the sweep only keeps entries nobody re-reads from
//! accumulating.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ResponseCache;
use crate::limiter::RateLimiter;

/// Spawns a background task that periodically sweeps the shared guard state.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. Each sweep takes a write lock on the cache and the
/// limiter in turn.
///
/// # Arguments
/// * `cache` - Shared completion cache
/// * `limiter` - Shared rate limiter
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during graceful
/// shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<ResponseCache>>,
    limiter: Arc<RwLock<RateLimiter>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting guard-state sweep task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let expired = {
                let mut cache_guard = cache.write().await;
                cache_guard.purge_expired()
            };

            let pruned = {
                let mut limiter_guard = limiter.write().await;
                limiter_guard.prune_idle()
            };

            if expired > 0 || pruned > 0 {
                info!(
                    "Sweep removed {} expired completions and {} idle clients",
                    expired, pruned
                );
            } else {
                debug!("Sweep found nothing to remove");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_sweep_removes_expired_cache_entries() {
        let cache = Arc::new(RwLock::new(ResponseCache::new(3_600_000)));
        let limiter = Arc::new(RwLock::new(RateLimiter::new(10, 60_000)));

        {
            let mut cache_guard = cache.write().await;
            cache_guard.set("fp".to_string(), "payload".to_string(), Some(100));
        }

        let handle = spawn_cleanup_task(cache.clone(), limiter, 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let cache_guard = cache.read().await;
            assert!(cache_guard.is_empty(), "Expired entry should have been swept");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_preserves_live_entries() {
        let cache = Arc::new(RwLock::new(ResponseCache::new(3_600_000)));
        let limiter = Arc::new(RwLock::new(RateLimiter::new(10, 3_600_000)));

        {
            let mut cache_guard = cache.write().await;
            cache_guard.set("fp".to_string(), "payload".to_string(), Some(60_000));
        }
        {
            let mut limiter_guard = limiter.write().await;
            assert!(limiter_guard.admit("client"));
        }

        let handle = spawn_cleanup_task(cache.clone(), limiter.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut cache_guard = cache.write().await;
            assert!(cache_guard.get("fp").is_some(), "Live entry should survive");
        }
        {
            let limiter_guard = limiter.read().await;
            assert_eq!(limiter_guard.tracked_identities(), 1);
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let cache = Arc::new(RwLock::new(ResponseCache::new(3_600_000)));
        let limiter = Arc::new(RwLock::new(RateLimiter::new(10, 60_000)));

        let handle = spawn_cleanup_task(cache, limiter, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}

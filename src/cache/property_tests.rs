//! Property-Based Tests for the Response Cache

use proptest::prelude::*;

use crate::cache::ResponseCache;

// == Test Configuration ==
const TEST_DEFAULT_TTL_MS: u64 = 300_000;

// == Strategies ==
/// Generates fingerprint-shaped keys (hex-ish, non-empty)
fn fingerprint_strategy() -> impl Strategy<Value = String> {
    "[a-f0-9]{8,64}"
}

/// Generates completion-shaped payloads
fn payload_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9<>/{}();:# \n]{0,256}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (fingerprint_strategy(), payload_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        4 => fingerprint_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => Just(CacheOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a payload and reading it back before expiry returns the exact
    // payload that was stored.
    #[test]
    fn prop_roundtrip_storage(key in fingerprint_strategy(), value in payload_strategy()) {
        let mut cache = ResponseCache::new(TEST_DEFAULT_TTL_MS);

        cache.set(key.clone(), value.clone(), None);

        prop_assert_eq!(cache.get(&key), Some(value));
    }

    // Overwriting a fingerprint leaves exactly one entry holding the last
    // value written.
    #[test]
    fn prop_overwrite_semantics(
        key in fingerprint_strategy(),
        value1 in payload_strategy(),
        value2 in payload_strategy()
    ) {
        let mut cache = ResponseCache::new(TEST_DEFAULT_TTL_MS);

        cache.set(key.clone(), value1, None);
        cache.set(key.clone(), value2.clone(), None);

        prop_assert_eq!(cache.get(&key), Some(value2));
        prop_assert_eq!(cache.len(), 1);
    }

    // Hit/miss counters track every lookup across arbitrary operation
    // sequences, and the entry count matches reality.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut cache = ResponseCache::new(TEST_DEFAULT_TTL_MS);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => cache.set(key, value, None),
                CacheOp::Get { key } => match cache.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Clear => cache.clear(),
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, cache.len(), "Total entries mismatch");
    }

    // A zero TTL means the entry is logically absent on the very next read.
    #[test]
    fn prop_zero_ttl_never_readable(key in fingerprint_strategy(), value in payload_strategy()) {
        let mut cache = ResponseCache::new(TEST_DEFAULT_TTL_MS);

        cache.set(key.clone(), value, Some(0));

        prop_assert_eq!(cache.get(&key), None);
        prop_assert!(cache.is_empty(), "Expired entry should be removed on observation");
    }
}

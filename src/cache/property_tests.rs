//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the store's bounds and accounting over
//! arbitrary operation sequences.

use proptest::prelude::*;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_CAPACITY: usize = 100;
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates cache keys drawn from a small alphabet so operation
/// sequences revisit keys often.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-f0-9]{1,8}".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,64}".prop_map(|s| s)
}

/// One step of a generated operation sequence.
#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: String },
    Get { key: String },
    Remove { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Remove { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Hits and misses must add up to exactly the lookups issued, no
    // matter how puts, gets and removes interleave.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(TEST_CAPACITY, TEST_TTL).unwrap();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Put { key, value } => store.put(key, value),
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Remove { key } => {
                    let _ = store.remove(&key);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.entries, store.len(), "Entry count mismatch");
    }

    // A stored value comes back bit-identical before it can expire.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(TEST_CAPACITY, TEST_TTL).unwrap();

        store.put(key.clone(), value.clone());

        let retrieved = store.get(&key);
        prop_assert_eq!(retrieved, Some(value), "Round-trip value mismatch");
    }

    // Writing a key twice keeps one entry holding the second value.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = CacheStore::new(TEST_CAPACITY, TEST_TTL).unwrap();

        store.put(key.clone(), value1);
        store.put(key.clone(), value2.clone());

        prop_assert_eq!(store.get(&key), Some(value2), "Overwrite should return new value");
        prop_assert_eq!(store.len(), 1, "Should have exactly one entry after overwrite");
        prop_assert_eq!(store.stats().evictions, 0, "Overwrite must not evict");
    }

    // The resident count never exceeds capacity, and the recency
    // tracker never drifts from the map.
    #[test]
    fn prop_capacity_enforcement(
        entries in prop::collection::vec(
            (key_strategy(), value_strategy()),
            1..200
        )
    ) {
        let capacity = 50;
        let mut store = CacheStore::new(capacity, TEST_TTL).unwrap();

        for (key, value) in entries {
            store.put(key, value);
            prop_assert!(
                store.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                store.len(),
                capacity
            );
            store.assert_consistent();
        }
    }

    // A sequence of upserts on one key accumulates every appended item.
    #[test]
    fn prop_upsert_accumulates(
        key in key_strategy(),
        items in prop::collection::vec(value_strategy(), 1..20)
    ) {
        let mut store: CacheStore<String, Vec<String>> =
            CacheStore::new(1, TEST_TTL).unwrap();

        for item in &items {
            let item = item.clone();
            store.upsert(key.clone(), move |history| {
                let mut history = history.unwrap_or_default();
                history.push(item);
                history
            });
        }

        prop_assert_eq!(store.get(&key), Some(items));
    }
}

// Property tests for LRU eviction behavior
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Filling a full cache evicts exactly the key that has gone longest
    // without a use.
    #[test]
    fn prop_lru_eviction_order(
        initial_keys in prop::collection::vec(key_strategy(), 3..10),
        new_key in key_strategy(),
        new_value in value_strategy()
    ) {
        let unique_keys: Vec<String> = initial_keys
            .into_iter()
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        prop_assume!(unique_keys.len() >= 2);
        prop_assume!(!unique_keys.contains(&new_key));

        let capacity = unique_keys.len();
        let mut store = CacheStore::new(capacity, TEST_TTL).unwrap();

        let oldest_key = unique_keys[0].clone();
        for key in &unique_keys {
            store.put(key.clone(), format!("value_{key}"));
        }
        prop_assert_eq!(store.len(), capacity);

        store.put(new_key.clone(), new_value);

        prop_assert_eq!(store.len(), capacity, "Eviction must keep the store at capacity");
        prop_assert!(
            store.get(&oldest_key).is_none(),
            "Oldest key '{}' should have been evicted",
            oldest_key
        );
        prop_assert!(store.get(&new_key).is_some(), "New key should exist");

        for key in unique_keys.iter().skip(1) {
            prop_assert!(
                store.get(key).is_some(),
                "Key '{}' should have survived",
                key
            );
        }
    }

    // A hit protects its key from the next eviction; the protection
    // moves to the runner-up.
    #[test]
    fn prop_lru_access_tracking(
        keys in prop::collection::vec(key_strategy(), 3..8),
        new_key in key_strategy(),
        new_value in value_strategy()
    ) {
        let unique_keys: Vec<String> = keys
            .into_iter()
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        prop_assume!(unique_keys.len() >= 3);
        prop_assume!(!unique_keys.contains(&new_key));

        let capacity = unique_keys.len();
        let mut store = CacheStore::new(capacity, TEST_TTL).unwrap();

        for key in &unique_keys {
            store.put(key.clone(), format!("value_{key}"));
        }

        let accessed_key = unique_keys[0].clone();
        let _ = store.get(&accessed_key);
        let expected_evicted = unique_keys[1].clone();

        store.put(new_key.clone(), new_value);

        prop_assert!(
            store.get(&accessed_key).is_some(),
            "Refreshed key '{}' must not be evicted",
            accessed_key
        );
        prop_assert!(
            store.get(&expected_evicted).is_none(),
            "Key '{}' was the oldest after the refresh and should be gone",
            expected_evicted
        );
        prop_assert!(store.get(&new_key).is_some(), "New key should exist");
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // Once an entry's age passes the TTL, a lookup misses and the entry
    // is gone from the store.
    #[test]
    fn prop_ttl_expiration_behavior(
        key in key_strategy(),
        value in value_strategy()
    ) {
        let ttl = Duration::from_millis(50);
        let mut store = CacheStore::new(TEST_CAPACITY, ttl).unwrap();

        store.put(key.clone(), value.clone());
        prop_assert_eq!(store.get(&key), Some(value), "Entry should be fresh right after put");

        sleep(Duration::from_millis(90));

        prop_assert!(store.get(&key).is_none(), "Entry should be gone after the TTL");
        prop_assert_eq!(store.len(), 0, "Expired entry must be removed, not linger");
        store.assert_consistent();
    }
}

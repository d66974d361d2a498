//! Integration tests for the lock-serialized shared tree.
//!
//! These tests verify cross-thread behavior that unit tests don't cover.

use std::sync::Arc;
use std::thread;

use btree_index::{Error, SharedBTree};
use tracing_subscriber::EnvFilter;

/// Route `tracing` output to the test harness when `RUST_LOG` is set.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Test concurrent writers to disjoint key ranges.
#[test]
fn test_concurrent_writers() {
    init_tracing();
    let tree = Arc::new(SharedBTree::new(3).unwrap());

    let mut handles = vec![];
    for i in 0..8u32 {
        let tree_clone = Arc::clone(&tree);
        handles.push(thread::spawn(move || {
            for j in 0..200u32 {
                tree_clone.insert(i * 1_000 + j).unwrap();
            }
        }));
    }

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(tree.len(), 1_600);
    let guard = tree.read();
    guard.check_invariants().unwrap();
    let keys: Vec<u32> = guard.iter().copied().collect();
    let mut expected: Vec<u32> = (0..8u32)
        .flat_map(|i| (0..200u32).map(move |j| i * 1_000 + j))
        .collect();
    expected.sort_unstable();
    assert_eq!(keys, expected);
}

/// Test writers racing on the same keys: exactly one insert per key wins.
#[test]
fn test_racing_duplicate_inserts() {
    init_tracing();
    let tree = Arc::new(SharedBTree::new(2).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tree_clone = Arc::clone(&tree);
            thread::spawn(move || {
                (0..100u32)
                    .filter(|&k| tree_clone.insert(k).is_ok())
                    .count()
            })
        })
        .collect();

    let wins: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(wins, 100);
    assert_eq!(tree.len(), 100);
    assert_eq!(tree.insert(0), Err(Error::DuplicateKey));
}

/// Test mixed inserts and deletes with concurrent readers.
#[test]
fn test_mixed_writers_and_readers() {
    init_tracing();
    let tree = Arc::new(SharedBTree::new(2).unwrap());
    for k in 0..500u32 {
        tree.insert(k).unwrap();
    }

    let deleter = {
        let tree = Arc::clone(&tree);
        thread::spawn(move || {
            for k in (0..500u32).filter(|k| k % 2 == 0) {
                tree.delete(&k).unwrap();
            }
        })
    };
    let inserter = {
        let tree = Arc::clone(&tree);
        thread::spawn(move || {
            for k in 500..700u32 {
                tree.insert(k).unwrap();
            }
        })
    };
    let reader = {
        let tree = Arc::clone(&tree);
        thread::spawn(move || {
            for _ in 0..50 {
                let guard = tree.read();
                guard.check_invariants().unwrap();
                let keys: Vec<u32> = guard.iter().copied().collect();
                assert!(keys.windows(2).all(|w| w[0] < w[1]));
            }
        })
    };

    deleter.join().unwrap();
    inserter.join().unwrap();
    reader.join().unwrap();

    assert_eq!(tree.len(), 450);
    assert!(!tree.contains(&0));
    assert!(tree.contains(&499));
    assert!(tree.contains(&699));

    let stats = tree.stats();
    assert!(stats.splits > 0);
    assert!(stats.merges + stats.borrows() > 0);
}

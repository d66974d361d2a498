//! Structural operation counters for the B-tree.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counts of rebalancing operations performed by a tree.
///
/// Counters are atomic so a tree behind a shared read lock can still report
/// them, and so `snapshot()` works through `&self`.
///
/// # Memory Ordering
/// All updates use `Ordering::Relaxed`: each counter only needs atomicity,
/// and no counter is used to synchronize with another.
///
/// # Example
/// ```
/// use btree_index::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// for key in 0..4 {
///     tree.insert(key).unwrap();
/// }
/// assert_eq!(tree.stats().snapshot().root_growths, 1);
/// ```
#[derive(Debug, Default)]
pub struct TreeStats {
    /// Full children split while descending for insertion (root splits included).
    pub splits: AtomicU64,

    /// Sibling pairs merged during deletion.
    pub merges: AtomicU64,

    /// Keys rotated in from a left sibling.
    pub borrows_left: AtomicU64,

    /// Keys rotated in from a right sibling.
    pub borrows_right: AtomicU64,

    /// Times the tree grew a level.
    pub root_growths: AtomicU64,

    /// Times the tree lost a level.
    pub root_shrinks: AtomicU64,
}

impl TreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            splits: self.splits.load(Ordering::Relaxed),
            merges: self.merges.load(Ordering::Relaxed),
            borrows_left: self.borrows_left.load(Ordering::Relaxed),
            borrows_right: self.borrows_right.load(Ordering::Relaxed),
            root_growths: self.root_growths.load(Ordering::Relaxed),
            root_shrinks: self.root_shrinks.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.splits.store(0, Ordering::Relaxed);
        self.merges.store(0, Ordering::Relaxed);
        self.borrows_left.store(0, Ordering::Relaxed);
        self.borrows_right.store(0, Ordering::Relaxed);
        self.root_growths.store(0, Ordering::Relaxed);
        self.root_shrinks.store(0, Ordering::Relaxed);
    }

    /// Emit the current counters as a single `info` event.
    pub fn emit_tracing(&self) {
        let snapshot = self.snapshot();
        tracing::info!(
            target: "btree_index::stats",
            splits = snapshot.splits,
            merges = snapshot.merges,
            borrows_left = snapshot.borrows_left,
            borrows_right = snapshot.borrows_right,
            root_growths = snapshot.root_growths,
            root_shrinks = snapshot.root_shrinks,
            "btree stats snapshot"
        );
    }
}

/// A point-in-time copy of [`TreeStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub splits: u64,
    pub merges: u64,
    pub borrows_left: u64,
    pub borrows_right: u64,
    pub root_growths: u64,
    pub root_shrinks: u64,
}

impl StatsSnapshot {
    /// Total borrows in either direction.
    pub fn borrows(&self) -> u64 {
        self.borrows_left + self.borrows_right
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ splits: {}, merges: {}, borrows: {}, height: +{}/-{} }}",
            self.splits,
            self.merges,
            self.borrows(),
            self.root_growths,
            self.root_shrinks
        )
    }
}

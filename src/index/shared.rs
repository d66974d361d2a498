//! Lock-serialized access to a B-tree from several threads.

use parking_lot::{RwLock, RwLockReadGuard};

use crate::common::Result;
use crate::index::btree::{BTree, StatsSnapshot};

/// A [`BTree`] behind a reader-writer lock.
///
/// The tree itself has no internal synchronization. This wrapper serializes
/// every mutation behind the exclusive lock while lookups share it, so the
/// tree only ever sees one writer at a time.
///
/// # Thread Safety
/// - `insert` / `delete` / `clear`: exclusive `write()` lock for the whole operation
/// - `contains` / `len` / `read`: shared `read()` lock
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use btree_index::SharedBTree;
///
/// let tree = Arc::new(SharedBTree::new(3).unwrap());
/// let handles: Vec<_> = (0..4)
///     .map(|t| {
///         let tree = Arc::clone(&tree);
///         thread::spawn(move || {
///             for i in 0..25 {
///                 tree.insert(t * 100 + i).unwrap();
///             }
///         })
///     })
///     .collect();
/// for h in handles {
///     h.join().unwrap();
/// }
/// assert_eq!(tree.len(), 100);
/// ```
pub struct SharedBTree<K> {
    inner: RwLock<BTree<K>>,
}

impl<K> SharedBTree<K> {
    /// Create an empty shared tree with minimum degree `min_degree`.
    ///
    /// # Errors
    /// - `Error::InvalidDegree` if `min_degree` is below 2 or so large that
    ///   `2 * min_degree - 1` overflows.
    pub fn new(min_degree: usize) -> Result<Self> {
        Ok(Self::from_tree(BTree::new(min_degree)?))
    }

    /// Wrap an existing tree.
    pub fn from_tree(tree: BTree<K>) -> Self {
        Self {
            inner: RwLock::new(tree),
        }
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Drop every key.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Hold the shared lock for a multi-step read such as a traversal.
    ///
    /// Writers block until the guard is dropped.
    pub fn read(&self) -> RwLockReadGuard<'_, BTree<K>> {
        self.inner.read()
    }

    /// Snapshot of the rebalancing counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.read().stats().snapshot()
    }

    /// Unwrap the tree.
    pub fn into_inner(self) -> BTree<K> {
        self.inner.into_inner()
    }
}

impl<K: Ord> SharedBTree<K> {
    /// Insert `key` under the exclusive lock.
    ///
    /// # Errors
    /// - `Error::DuplicateKey` if `key` is already present.
    pub fn insert(&self, key: K) -> Result<()> {
        self.inner.write().insert(key)
    }

    /// Delete `key` under the exclusive lock.
    ///
    /// # Errors
    /// - `Error::KeyNotFound` if `key` is absent.
    pub fn delete(&self, key: &K) -> Result<()> {
        self.inner.write().delete(key)
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().contains(key)
    }
}

impl<K: Clone> SharedBTree<K> {
    /// Copy out all keys in ascending order.
    pub fn to_vec(&self) -> Vec<K> {
        self.inner.read().iter().cloned().collect()
    }
}

impl<K> Default for SharedBTree<K> {
    fn default() -> Self {
        Self::from_tree(BTree::default())
    }
}

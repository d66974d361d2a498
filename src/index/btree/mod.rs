//! B-tree index implementation.
//!
//! A classic in-memory B-tree of minimum degree `t`: every node except the
//! root holds between `t - 1` and `2t - 1` keys, internal nodes hold one
//! more child than keys, and all leaves sit at the same depth.
//!
//! Both mutations work strictly top-down. Insertion splits any full child
//! before entering it; deletion tops up any child with only `t - 1` keys
//! before entering it. Neither needs a rebalancing pass on the way back up.
//!
//! # Components
//! - [`BTree`] - owns the root and the degree; public operations
//! - `node` - node layout plus split / merge / borrow primitives
//! - `search` - read-only descent, [`SearchResult`] and [`NodeRef`]
//! - `insert` / `delete` - the two balancing algorithms
//! - [`Iter`] - lazy in-order traversal
//! - [`TreeStats`] - counters for splits, merges, borrows and height changes

mod delete;
mod insert;
mod iter;
mod node;
mod search;
mod stats;
mod validate;

use std::fmt;

use crate::common::config::{DEFAULT_MIN_DEGREE, MIN_DEGREE_CEILING, MIN_DEGREE_FLOOR};
use crate::common::{Error, Result};

pub use iter::Iter;
pub use search::{NodeRef, SearchResult};
pub use stats::{StatsSnapshot, TreeStats};

use node::Node;

/// An ordered set of keys stored in a B-tree.
///
/// # Example
/// ```
/// use btree_index::{BTree, SearchResult};
///
/// let mut tree = BTree::new(3)?;
/// for key in [10, 20, 5, 6, 12, 30, 7, 17] {
///     tree.insert(key)?;
/// }
///
/// let keys: Vec<i32> = tree.iter().copied().collect();
/// assert_eq!(keys, [5, 6, 7, 10, 12, 17, 20, 30]);
///
/// assert!(tree.search(&6).is_found());
/// assert!(matches!(tree.search(&15), SearchResult::NotFound));
///
/// tree.delete(&6)?;
/// assert!(!tree.contains(&6));
/// # Ok::<(), btree_index::Error>(())
/// ```
pub struct BTree<K> {
    /// Root node. An empty tree is a single leaf with no keys.
    root: Box<Node<K>>,

    /// Minimum degree `t`, fixed at construction.
    min_degree: usize,

    /// Number of keys stored.
    len: usize,

    /// Rebalancing counters.
    stats: TreeStats,
}

impl<K> BTree<K> {
    /// Create an empty tree with minimum degree `min_degree`.
    ///
    /// # Errors
    /// - `Error::InvalidDegree` if `min_degree` is below 2 or so large that
    ///   `2 * min_degree - 1` overflows.
    pub fn new(min_degree: usize) -> Result<Self> {
        if !(MIN_DEGREE_FLOOR..=MIN_DEGREE_CEILING).contains(&min_degree) {
            return Err(Error::InvalidDegree { min_degree });
        }
        Ok(Self::with_degree(min_degree))
    }

    /// Create an empty tree with [`DEFAULT_MIN_DEGREE`].
    pub fn new_default() -> Self {
        Self::with_degree(DEFAULT_MIN_DEGREE)
    }

    fn with_degree(min_degree: usize) -> Self {
        Self {
            root: Box::new(Node::new_leaf()),
            min_degree,
            len: 0,
            stats: TreeStats::new(),
        }
    }

    /// The minimum degree `t` this tree was built with.
    #[inline]
    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Number of keys in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels, counting the root. An empty tree has height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &*self.root;
        while let Some(child) = node.children.first() {
            node = &**child;
            height += 1;
        }
        height
    }

    /// Drop every key, leaving an empty leaf root. Statistics are kept.
    pub fn clear(&mut self) {
        self.root = Box::new(Node::new_leaf());
        self.len = 0;
    }

    /// Smallest key, if any.
    pub fn first(&self) -> Option<&K> {
        let mut node = &*self.root;
        while let Some(child) = node.children.first() {
            node = &**child;
        }
        node.keys.first()
    }

    /// Largest key, if any.
    pub fn last(&self) -> Option<&K> {
        let mut node = &*self.root;
        while let Some(child) = node.children.last() {
            node = &**child;
        }
        node.keys.last()
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root, self.len)
    }

    /// Rebalancing counters for this tree.
    #[inline]
    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }
}

impl<K: Ord> BTree<K> {
    /// Find the node holding `key`.
    ///
    /// Never modifies the tree. A miss returns [`SearchResult::NotFound`].
    pub fn search(&self, key: &K) -> SearchResult<'_, K> {
        search::search(&self.root, key)
    }

    /// Whether `key` is stored in the tree.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_found()
    }
}

impl<K> Default for BTree<K> {
    fn default() -> Self {
        Self::new_default()
    }
}

impl<'a, K> IntoIterator for &'a BTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K: fmt::Debug> fmt::Debug for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BTree(t={}, len={}) {{", self.min_degree, self.len)?;
        for (level, keys) in self.debug_dump() {
            writeln!(f, "{}{:?}", "  ".repeat(level + 1), keys)?;
        }
        write!(f, "}}")
    }
}

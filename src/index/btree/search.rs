//! Read-only descent from the root to the node holding a key.

use std::fmt;

use super::node::Node;

/// Borrowed handle to a node inside a [`BTree`](crate::BTree).
///
/// Handed out by [`BTree::search`](crate::BTree::search). The handle borrows
/// the tree, so it cannot outlive a subsequent mutation.
pub struct NodeRef<'a, K> {
    node: &'a Node<K>,
}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(node: &'a Node<K>) -> Self {
        Self { node }
    }

    /// Keys stored in this node, ascending.
    #[inline]
    pub fn keys(&self) -> &'a [K] {
        &self.node.keys
    }

    /// Whether the node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node.leaf
    }

    /// Number of child subtrees (0 for leaves).
    #[inline]
    pub fn child_count(&self) -> usize {
        self.node.children.len()
    }
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("keys", &self.node.keys)
            .field("leaf", &self.node.leaf)
            .finish()
    }
}

/// Outcome of [`BTree::search`](crate::BTree::search).
///
/// A miss is a normal outcome, not an error.
#[derive(Debug)]
pub enum SearchResult<'a, K> {
    /// The key lives at `node.keys()[index]`.
    Found { node: NodeRef<'a, K>, index: usize },
    /// The key is not in the tree.
    NotFound,
}

impl<K> Clone for SearchResult<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for SearchResult<'_, K> {}

impl<'a, K> SearchResult<'a, K> {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found { .. })
    }

    /// The matched key, if any.
    pub fn key(&self) -> Option<&'a K> {
        match self {
            SearchResult::Found { node, index } => node.keys().get(*index),
            SearchResult::NotFound => None,
        }
    }
}

/// Walk from `root` towards `key`.
///
/// At each node take the first slot with `key <= keys[i]`; a match ends the
/// search, a miss in a leaf fails it, otherwise descend into `children[i]`.
pub(crate) fn search<'a, K: Ord>(root: &'a Node<K>, key: &K) -> SearchResult<'a, K> {
    let mut node = root;
    loop {
        match node.find(key) {
            Ok(index) => {
                return SearchResult::Found {
                    node: NodeRef::new(node),
                    index,
                }
            }
            Err(_) if node.leaf => return SearchResult::NotFound,
            Err(idx) => node = &*node.children[idx],
        }
    }
}

//! Deletion: top-down, fixing any thin child before descending into it.
//!
//! Mirrors insertion. Where insertion splits a full child before entering
//! it, deletion makes sure the child it enters holds at least `t` keys, so
//! removing one key from it can never underflow. The fix-up borrows from a
//! sibling when one can spare a key and merges with a sibling otherwise.
//!
//! # Cases at a node
//! ```text
//! key in node, leaf ............ remove it
//! key in node, internal
//!   left child  >= t keys ...... replace with predecessor, delete that from left
//!   right child >= t keys ...... replace with successor, delete that from right
//!   otherwise .................. merge left + key + right, delete from merged
//! key not in node, internal .... fix child (borrow left / borrow right / merge), descend
//! ```

use std::mem;

use tracing::trace;

use super::node::Node;
use super::stats::TreeStats;
use super::BTree;
use crate::common::{Error, Result};

impl<K: Ord> BTree<K> {
    /// Remove `key` from the tree.
    ///
    /// After the removal, a root left with no keys above a single child is
    /// discarded in favour of that child, which is the only way the tree gets
    /// shorter.
    ///
    /// # Errors
    /// - `Error::KeyNotFound` if `key` is absent. Presence is checked before
    ///   any borrow or merge, so a failed delete leaves the tree untouched.
    pub fn delete(&mut self, key: &K) -> Result<()> {
        self.take(key).map(drop).ok_or(Error::KeyNotFound)
    }

    /// Remove `key` and hand back the stored key.
    ///
    /// Returns `None` (without touching the tree) if `key` is absent.
    pub fn take(&mut self, key: &K) -> Option<K> {
        if !self.contains(key) {
            return None;
        }

        let removed = remove(&mut self.root, key, self.min_degree, &self.stats);
        if removed.is_some() {
            self.len -= 1;
        }
        self.shrink_root();
        removed
    }

    /// Remove and return the smallest key.
    pub fn pop_first(&mut self) -> Option<K> {
        if self.is_empty() {
            return None;
        }
        let removed = pop_min(&mut self.root, self.min_degree, &self.stats);
        if removed.is_some() {
            self.len -= 1;
        }
        self.shrink_root();
        removed
    }

    /// Remove and return the largest key.
    pub fn pop_last(&mut self) -> Option<K> {
        if self.is_empty() {
            return None;
        }
        let removed = pop_max(&mut self.root, self.min_degree, &self.stats);
        if removed.is_some() {
            self.len -= 1;
        }
        self.shrink_root();
        removed
    }

    /// Replace an internal root with no keys by its only child.
    fn shrink_root(&mut self) {
        if self.root.leaf || !self.root.keys.is_empty() {
            return;
        }
        if let Some(child) = self.root.children.pop() {
            self.root = child;
            TreeStats::record(&self.stats.root_shrinks);
            trace!(
                target: "btree_index::root",
                height = self.height(),
                "empty root collapsed, tree lost a level"
            );
        }
    }
}

/// Remove `key` from the subtree rooted at `node`.
///
/// `node` is either the root or holds at least `t` keys.
fn remove<K: Ord>(node: &mut Node<K>, key: &K, min_degree: usize, stats: &TreeStats) -> Option<K> {
    match node.find(key) {
        Ok(idx) if node.leaf => Some(node.keys.remove(idx)),
        Ok(idx) => {
            if node.children[idx].len() >= min_degree {
                let pred = pop_max(&mut node.children[idx], min_degree, stats);
                pred.map(|pred| mem::replace(&mut node.keys[idx], pred))
            } else if node.children[idx + 1].len() >= min_degree {
                let succ = pop_min(&mut node.children[idx + 1], min_degree, stats);
                succ.map(|succ| mem::replace(&mut node.keys[idx], succ))
            } else {
                merge(node, idx, stats);
                remove(&mut node.children[idx], key, min_degree, stats)
            }
        }
        Err(_) if node.leaf => None,
        Err(idx) => {
            let idx = fix_child(node, idx, min_degree, stats);
            remove(&mut node.children[idx], key, min_degree, stats)
        }
    }
}

/// Remove the in-order predecessor candidate: the rightmost key of the subtree.
fn pop_max<K: Ord>(node: &mut Node<K>, min_degree: usize, stats: &TreeStats) -> Option<K> {
    let mut node = node;
    while !node.leaf {
        let last = node.children.len() - 1;
        let idx = fix_child(node, last, min_degree, stats);
        node = &mut *node.children[idx];
    }
    node.keys.pop()
}

/// Remove the in-order successor candidate: the leftmost key of the subtree.
fn pop_min<K: Ord>(node: &mut Node<K>, min_degree: usize, stats: &TreeStats) -> Option<K> {
    let mut node = node;
    while !node.leaf {
        let idx = fix_child(node, 0, min_degree, stats);
        node = &mut *node.children[idx];
    }
    if node.keys.is_empty() {
        None
    } else {
        Some(node.keys.remove(0))
    }
}

/// Make sure child `idx` holds at least `t` keys before descending into it.
///
/// Borrows from the left sibling, else the right sibling, else merges with
/// the right sibling (or the left one for the last child). Returns the index
/// of the child to descend into, which moves left by one after a merge with
/// the left sibling.
fn fix_child<K>(node: &mut Node<K>, idx: usize, min_degree: usize, stats: &TreeStats) -> usize {
    if node.children[idx].len() >= min_degree {
        return idx;
    }

    let has_right = idx + 1 < node.children.len();
    if idx > 0 && node.children[idx - 1].len() >= min_degree {
        node.borrow_from_left(idx);
        TreeStats::record(&stats.borrows_left);
        trace!(target: "btree_index::borrow", index = idx, direction = "left", "rotated key into thin child");
        idx
    } else if has_right && node.children[idx + 1].len() >= min_degree {
        node.borrow_from_right(idx);
        TreeStats::record(&stats.borrows_right);
        trace!(target: "btree_index::borrow", index = idx, direction = "right", "rotated key into thin child");
        idx
    } else if has_right {
        merge(node, idx, stats);
        idx
    } else {
        merge(node, idx - 1, stats);
        idx - 1
    }
}

fn merge<K>(node: &mut Node<K>, idx: usize, stats: &TreeStats) {
    node.merge_children(idx);
    TreeStats::record(&stats.merges);
    trace!(
        target: "btree_index::merge",
        index = idx,
        merged_len = node.children[idx].len(),
        "merged sibling pair"
    );
}

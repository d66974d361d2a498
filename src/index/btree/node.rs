//! B-tree node and the structural primitives that reshape it.
//!
//! A [`Node`] owns its keys and children outright; the tree is strictly
//! tree-shaped, so every primitive here moves keys and whole subtrees between
//! siblings through their shared parent. No sibling ever holds a reference to
//! another.
//!
//! # Primitives
//! ```text
//!  split_child(i)            merge_children(i)           borrow_from_left(i)
//!
//!      [ .. ]                   [ a  s  b ]                 [ .. s .. ]
//!        |                        |     |                     /     \
//!  [k0 .. m .. k2t-2]          [x..]  [y..]             [.. l]     [c ..]
//!        ↓                        ↓                           ↓
//!     [ .. m .. ]               [ a  b ]                 [ .. l .. ]
//!      /      \                   |                       /     \
//! [k0..kt-2] [kt..k2t-2]     [x.. s y..]               [..]     [s c ..]
//! ```

use std::mem;

use crate::common::config::max_keys;

/// A single B-tree node.
///
/// Internal nodes always satisfy `children.len() == keys.len() + 1`; leaves
/// have no children at all.
pub(crate) struct Node<K> {
    /// Strictly ascending keys.
    pub(crate) keys: Vec<K>,

    /// Child subtrees, empty for leaves.
    pub(crate) children: Vec<Box<Node<K>>>,

    /// Whether this node sits at the bottom level.
    pub(crate) leaf: bool,
}

impl<K> Node<K> {
    /// Create an empty leaf.
    pub(crate) fn new_leaf() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            leaf: true,
        }
    }

    /// Create an internal node with no keys wrapping a single child.
    ///
    /// This is only legal transiently, while the root grows: the caller
    /// immediately splits `child` so the new node gains its first key.
    pub(crate) fn new_root_over(child: Box<Node<K>>) -> Self {
        Self {
            keys: Vec::new(),
            children: vec![child],
            leaf: false,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub(crate) fn is_full(&self, min_degree: usize) -> bool {
        self.keys.len() == max_keys(min_degree)
    }

    /// Split the full child at `idx` around its median.
    ///
    /// The child keeps keys `0..t-1` (and children `0..t`), a new right
    /// sibling takes keys `t..2t-1` (and children `t..2t`), and the median
    /// key `t-1` moves up into this node at `idx`. The new sibling lands at
    /// child position `idx + 1`.
    pub(crate) fn split_child(&mut self, idx: usize, min_degree: usize) {
        let child = &mut self.children[idx];
        debug_assert!(child.is_full(min_degree), "split of a non-full child");

        let upper_keys = child.keys.split_off(min_degree);
        let median = child.keys.remove(min_degree - 1);
        let upper_children = if child.leaf {
            Vec::new()
        } else {
            child.children.split_off(min_degree)
        };

        let sibling = Node {
            keys: upper_keys,
            children: upper_children,
            leaf: child.leaf,
        };

        self.keys.insert(idx, median);
        self.children.insert(idx + 1, Box::new(sibling));
    }

    /// Fold child `idx + 1` and the separator `keys[idx]` into child `idx`.
    ///
    /// The right sibling is dropped; this node loses one key and one child.
    pub(crate) fn merge_children(&mut self, idx: usize) {
        debug_assert!(idx + 1 < self.children.len(), "merge without right sibling");

        let separator = self.keys.remove(idx);
        let right = *self.children.remove(idx + 1);

        let left = &mut self.children[idx];
        left.keys.push(separator);
        left.keys.extend(right.keys);
        left.children.extend(right.children);
    }

    /// Rotate one key from child `idx - 1` through the parent into child `idx`.
    ///
    /// The separator `keys[idx - 1]` becomes the first key of child `idx`,
    /// the left sibling's last key replaces it, and (for internal children)
    /// the left sibling's last subtree becomes child `idx`'s first subtree.
    pub(crate) fn borrow_from_left(&mut self, idx: usize) {
        let left = &mut self.children[idx - 1];
        debug_assert!(left.keys.len() > 1, "borrow from a thin left sibling");

        let lifted = left.keys.remove(left.keys.len() - 1);
        let moved = if left.leaf { None } else { left.children.pop() };

        let separator = mem::replace(&mut self.keys[idx - 1], lifted);

        let child = &mut self.children[idx];
        child.keys.insert(0, separator);
        if let Some(subtree) = moved {
            child.children.insert(0, subtree);
        }
    }

    /// Rotate one key from child `idx + 1` through the parent into child `idx`.
    ///
    /// Mirror image of [`borrow_from_left`](Self::borrow_from_left).
    pub(crate) fn borrow_from_right(&mut self, idx: usize) {
        let right = &mut self.children[idx + 1];
        debug_assert!(right.keys.len() > 1, "borrow from a thin right sibling");

        let lifted = right.keys.remove(0);
        let moved = if right.leaf {
            None
        } else {
            Some(right.children.remove(0))
        };

        let separator = mem::replace(&mut self.keys[idx], lifted);

        let child = &mut self.children[idx];
        child.keys.push(separator);
        child.children.extend(moved);
    }
}

impl<K: Ord> Node<K> {
    /// First position `i` with `key <= keys[i]`, or `len()` if `key` exceeds every key.
    ///
    /// This is both the slot where `key` lives (if present) and the child to
    /// descend into (if not).
    #[inline]
    pub(crate) fn lower_bound(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// Position of `key` in this node, or the child index to descend into.
    #[inline]
    pub(crate) fn find(&self, key: &K) -> std::result::Result<usize, usize> {
        let idx = self.lower_bound(key);
        match self.keys.get(idx) {
            Some(k) if k == key => Ok(idx),
            _ => Err(idx),
        }
    }
}

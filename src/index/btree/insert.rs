//! Insertion: split full nodes on the way down, then drop the key into a leaf.

use std::mem;

use tracing::trace;

use super::node::Node;
use super::stats::TreeStats;
use super::BTree;
use crate::common::{Error, Result};

impl<K: Ord> BTree<K> {
    /// Insert `key` into the tree.
    ///
    /// Any full node on the root-to-leaf path is split before the descent
    /// passes through it, so the leaf always has room and nothing needs to be
    /// fixed up on the way back. A full root is split under a fresh root,
    /// which is the only way the tree grows taller.
    ///
    /// # Errors
    /// - `Error::DuplicateKey` if `key` is already present. The tree is not modified.
    pub fn insert(&mut self, key: K) -> Result<()> {
        if self.contains(&key) {
            return Err(Error::DuplicateKey);
        }

        if self.root.is_full(self.min_degree) {
            self.grow_root();
        }

        insert_non_full(&mut self.root, key, self.min_degree, &self.stats);
        self.len += 1;
        Ok(())
    }

    /// Push the current root one level down and split it.
    fn grow_root(&mut self) {
        let old_root = mem::replace(&mut self.root, Box::new(Node::new_leaf()));
        let mut new_root = Node::new_root_over(old_root);
        new_root.split_child(0, self.min_degree);
        self.root = Box::new(new_root);

        TreeStats::record(&self.stats.splits);
        TreeStats::record(&self.stats.root_growths);
        trace!(
            target: "btree_index::root",
            height = self.height(),
            "root split, tree grew a level"
        );
    }
}

/// Insert into a subtree whose root is known not to be full.
fn insert_non_full<K: Ord>(root: &mut Node<K>, key: K, min_degree: usize, stats: &TreeStats) {
    let mut node = root;
    loop {
        let mut idx = node.lower_bound(&key);
        if node.leaf {
            node.keys.insert(idx, key);
            return;
        }

        if node.children[idx].is_full(min_degree) {
            node.split_child(idx, min_degree);
            TreeStats::record(&stats.splits);
            trace!(
                target: "btree_index::split",
                index = idx,
                leaf = node.children[idx].leaf,
                "split full child"
            );
            if node.keys[idx] < key {
                idx += 1;
            }
        }

        node = &mut *node.children[idx];
    }
}

#[cfg(test)]
mod tests {
    use crate::{BTree, Error};

    #[test]
    fn test_insert_into_leaf_root_keeps_order() {
        let mut tree = BTree::new(3).unwrap();
        for key in [30, 10, 20] {
            tree.insert(key).unwrap();
        }
        assert_eq!(tree.debug_dump(), vec![(0, &[10, 20, 30][..])]);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_full_root_splits_on_next_insert() {
        let mut tree = BTree::new(3).unwrap();
        for key in 1..=5 {
            tree.insert(key).unwrap();
        }
        assert_eq!(tree.height(), 1);

        tree.insert(6).unwrap();
        assert_eq!(tree.height(), 2);
        assert_eq!(
            tree.debug_dump(),
            vec![(0, &[3][..]), (1, &[1, 2][..]), (1, &[4, 5, 6][..])]
        );
        assert_eq!(tree.stats().snapshot().root_growths, 1);
    }

    #[test]
    fn test_split_shifts_descent_to_right_sibling() {
        let mut tree = BTree::new(2).unwrap();
        for key in [10, 20, 30, 40, 50] {
            tree.insert(key).unwrap();
        }
        // Root [20], right child [30, 40, 50] is full; inserting 45 splits it
        // and must land in the new right sibling.
        tree.insert(45).unwrap();
        assert_eq!(
            tree.debug_dump(),
            vec![
                (0, &[20, 40][..]),
                (1, &[10][..]),
                (1, &[30][..]),
                (1, &[45, 50][..]),
            ]
        );
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_duplicate_insert_rejected_without_mutation() {
        let mut tree = BTree::new(2).unwrap();
        for key in [1, 2, 3] {
            tree.insert(key).unwrap();
        }
        let before = tree.stats().snapshot();

        assert_eq!(tree.insert(2), Err(Error::DuplicateKey));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.stats().snapshot(), before);
    }
}

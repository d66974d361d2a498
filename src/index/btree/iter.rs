//! In-order traversal.

use std::iter::FusedIterator;

use super::node::Node;

/// Lazy in-order iterator over the keys of a [`BTree`](crate::BTree).
///
/// Created by [`BTree::iter`](crate::BTree::iter). Keeps an explicit stack of
/// `(node, next key index)` frames, one per level, so memory is bounded by
/// the tree height. Calling `iter()` again restarts from the smallest key.
pub struct Iter<'a, K> {
    stack: Vec<(&'a Node<K>, usize)>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: &'a Node<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_leftmost(root);
        iter
    }

    /// Push `node` and its leftmost descendants down to a leaf.
    fn push_leftmost(&mut self, mut node: &'a Node<K>) {
        loop {
            self.stack.push((node, 0));
            match node.children.first() {
                Some(child) if !node.leaf => node = &**child,
                _ => break,
            }
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        while let Some(top) = self.stack.last_mut() {
            let (node, idx) = *top;
            if idx < node.keys.len() {
                top.1 += 1;
                if !node.leaf {
                    self.push_leftmost(&node.children[idx + 1]);
                }
                self.remaining = self.remaining.saturating_sub(1);
                return Some(&node.keys[idx]);
            }
            self.stack.pop();
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::BTree;

    #[test]
    fn test_iter_empty_tree() {
        let tree: BTree<i32> = BTree::new(2).unwrap();
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.iter().len(), 0);
    }

    #[test]
    fn test_iter_is_sorted_and_exact() {
        let mut tree = BTree::new(2).unwrap();
        for key in [50, 10, 40, 20, 30, 60, 0, 70, 35, 25] {
            tree.insert(key).unwrap();
        }

        let mut iter = tree.iter();
        assert_eq!(iter.len(), 10);
        iter.next();
        assert_eq!(iter.len(), 9);

        let keys: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(keys, vec![0, 10, 20, 25, 30, 35, 40, 50, 60, 70]);
    }

    #[test]
    fn test_iter_restarts() {
        let mut tree = BTree::new(3).unwrap();
        for key in 1..=30 {
            tree.insert(key).unwrap();
        }
        let first: Vec<_> = tree.iter().take(3).collect();
        let again: Vec<_> = (&tree).into_iter().take(3).collect();
        assert_eq!(first, again);
        assert_eq!(first, vec![&1, &2, &3]);
    }

    #[test]
    fn test_iter_clone_resumes_independently() {
        let mut tree = BTree::new(2).unwrap();
        for key in 1..=8 {
            tree.insert(key).unwrap();
        }
        let mut iter = tree.iter();
        assert_eq!(iter.nth(3), Some(&4));
        let rest: Vec<_> = iter.clone().copied().collect();
        assert_eq!(rest, vec![5, 6, 7, 8]);
        assert_eq!(iter.next(), Some(&5));
    }
}

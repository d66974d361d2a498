//! Structural self-checks and a diagnostic dump.

use super::node::Node;
use super::BTree;
use crate::common::config::{max_keys, min_keys};
use crate::common::{Error, Result};

impl<K> BTree<K> {
    /// Every node as `(level, keys)`, root first, in pre-order.
    ///
    /// For diagnostics and display only; the exact shape is an
    /// implementation detail of the balancing strategy.
    pub fn debug_dump(&self) -> Vec<(usize, &[K])> {
        let mut out = Vec::new();
        let mut stack = vec![(0usize, &*self.root)];
        while let Some((level, node)) = stack.pop() {
            out.push((level, node.keys.as_slice()));
            for child in node.children.iter().rev() {
                stack.push((level + 1, &**child));
            }
        }
        out
    }
}

impl<K: Ord> BTree<K> {
    /// Verify the structural invariants of the whole tree.
    ///
    /// Checks, for every node:
    /// - keys strictly ascending and within the separator bounds of its parent
    /// - non-root occupancy in `[t-1, 2t-1]`, root occupancy at most `2t-1`
    /// - internal nodes have exactly one more child than keys; leaves have none
    /// - all leaves at the same depth
    ///
    /// and that the cached length matches the number of stored keys.
    ///
    /// # Errors
    /// - `Error::InvariantViolated` describing the first violation found.
    pub fn check_invariants(&self) -> Result<()> {
        let mut checker = Checker {
            min_degree: self.min_degree,
            leaf_depth: None,
            keys_seen: 0,
        };
        checker.visit(&self.root, 0, None, None)?;

        if checker.keys_seen != self.len {
            return Err(Error::invariant(format!(
                "length is {} but tree holds {} keys",
                self.len, checker.keys_seen
            )));
        }
        Ok(())
    }
}

struct Checker {
    min_degree: usize,
    leaf_depth: Option<usize>,
    keys_seen: usize,
}

impl Checker {
    fn visit<K: Ord>(
        &mut self,
        node: &Node<K>,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> Result<()> {
        let n = node.len();
        self.keys_seen += n;

        if n > max_keys(self.min_degree) {
            return Err(Error::invariant(format!(
                "node at depth {depth} holds {n} keys, more than {}",
                max_keys(self.min_degree)
            )));
        }
        if depth > 0 && n < min_keys(self.min_degree) {
            return Err(Error::invariant(format!(
                "node at depth {depth} holds {n} keys, fewer than {}",
                min_keys(self.min_degree)
            )));
        }
        if node.keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(Error::invariant(format!(
                "keys at depth {depth} are not strictly ascending"
            )));
        }
        if let (Some(lower), Some(first)) = (lower, node.keys.first()) {
            if first <= lower {
                return Err(Error::invariant(format!(
                    "key at depth {depth} is not above its left separator"
                )));
            }
        }
        if let (Some(upper), Some(last)) = (upper, node.keys.last()) {
            if last >= upper {
                return Err(Error::invariant(format!(
                    "key at depth {depth} is not below its right separator"
                )));
            }
        }

        if node.leaf {
            if !node.children.is_empty() {
                return Err(Error::invariant(format!(
                    "leaf at depth {depth} has {} children",
                    node.children.len()
                )));
            }
            match self.leaf_depth {
                None => self.leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(Error::invariant(format!(
                        "leaf at depth {depth}, expected every leaf at depth {expected}"
                    )));
                }
                Some(_) => {}
            }
            return Ok(());
        }

        if node.children.len() != n + 1 {
            return Err(Error::invariant(format!(
                "internal node at depth {depth} has {n} keys but {} children",
                node.children.len()
            )));
        }
        if n == 0 {
            return Err(Error::invariant(format!(
                "internal node at depth {depth} has no keys"
            )));
        }

        for (i, child) in node.children.iter().enumerate() {
            let lo = if i == 0 { lower } else { node.keys.get(i - 1) };
            let hi = if i == n { upper } else { node.keys.get(i) };
            self.visit(child, depth + 1, lo, hi)?;
        }
        Ok(())
    }
}

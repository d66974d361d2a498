//! Configuration constants for the B-tree index.

/// Smallest legal minimum degree `t`.
///
/// With `t = 2` every node holds 1 to 3 keys (a 2-3-4 tree). Anything lower
/// cannot split a full node into two legal halves.
pub const MIN_DEGREE_FLOOR: usize = 2;

/// Largest legal minimum degree `t`.
///
/// Keeps `2t - 1` representable as a `usize`.
pub const MIN_DEGREE_CEILING: usize = usize::MAX / 2;

/// Minimum degree used by [`BTree::default`](crate::BTree).
///
/// Nodes hold between 2 and 5 keys, which keeps small trees several levels
/// deep and exercises every rebalancing path.
pub const DEFAULT_MIN_DEGREE: usize = 3;

/// Maximum number of keys a node of minimum degree `t` may hold (`2t - 1`).
#[inline]
pub const fn max_keys(min_degree: usize) -> usize {
    2 * min_degree - 1
}

/// Minimum number of keys a non-root node of minimum degree `t` must hold (`t - 1`).
#[inline]
pub const fn min_keys(min_degree: usize) -> usize {
    min_degree - 1
}

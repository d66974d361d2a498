//! btree-index - An in-memory B-tree index over ordered keys.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          btree-index                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Shared access (index::SharedBTree)              │   │
//! │  │        RwLock: one writer at a time, many readers        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Tree (index::btree::BTree)               │   │
//! │  │   insert / delete / search / iter / root grow + shrink   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │      Balancing (split on insert, borrow/merge on delete) │   │
//! │  │       applied top-down before descending, never after    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Node: sorted keys + children              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Error, config)
//! - [`index`] - Index structures (B-tree, shared wrapper)
//!
//! # Quick Start
//! ```
//! use btree_index::BTree;
//!
//! let mut tree = BTree::new(3)?;
//! for key in [10, 20, 5, 6, 12, 30, 7, 17] {
//!     tree.insert(key)?;
//! }
//! tree.delete(&12)?;
//!
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.first(), Some(&5));
//! tree.check_invariants()?;
//! # Ok::<(), btree_index::Error>(())
//! ```
//!
//! # Logging
//! Splits, merges, borrows and root height changes are reported as
//! `tracing` events at `trace` level under the `btree_index::*` targets.
//! The crate never installs a subscriber.

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_MIN_DEGREE, MIN_DEGREE_CEILING, MIN_DEGREE_FLOOR};
pub use common::{Error, Result};

pub use index::btree::{BTree, Iter, NodeRef, SearchResult, StatsSnapshot, TreeStats};
pub use index::SharedBTree;

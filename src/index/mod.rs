//! Index structures.
//!
//! - [`btree`] - the in-memory B-tree
//! - [`SharedBTree`] - a B-tree behind a reader-writer lock for cross-thread use

pub mod btree;
mod shared;

pub use shared::SharedBTree;

//! Error types for the B-tree index.

use thiserror::Error;

use crate::common::config::{MIN_DEGREE_CEILING, MIN_DEGREE_FLOOR};

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by the index.
///
/// A search that misses is *not* an error: it returns
/// [`SearchResult::NotFound`](crate::SearchResult::NotFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The tree was constructed with a minimum degree outside
    /// `MIN_DEGREE_FLOOR..=MIN_DEGREE_CEILING`.
    #[error(
        "minimum degree must be between {} and {}, got {min_degree}",
        MIN_DEGREE_FLOOR,
        MIN_DEGREE_CEILING
    )]
    InvalidDegree { min_degree: usize },

    /// Insert was called with a key that is already present.
    ///
    /// The tree is left untouched.
    #[error("key is already present in the tree")]
    DuplicateKey,

    /// Delete was called with a key that is not present.
    ///
    /// The tree is left untouched: no borrows or merges are performed.
    #[error("key not found in the tree")]
    KeyNotFound,

    /// A structural invariant does not hold.
    ///
    /// Only produced by [`BTree::check_invariants`](crate::BTree::check_invariants).
    /// Seeing this means there is a bug in the balancing code.
    #[error("B-tree invariant violated: {reason}")]
    InvariantViolated { reason: String },
}

impl Error {
    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        Error::InvariantViolated {
            reason: reason.into(),
        }
    }
}

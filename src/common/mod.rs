//! Common types and utilities shared across the crate.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants (degree floor, occupancy bounds)
//! - Error types

pub mod config;
pub mod error;

pub use error::{Error, Result};

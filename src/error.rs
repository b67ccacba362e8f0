//! Error type shared by the map and its configuration

use thiserror::Error;

/// Failures reported by `ChainedHashMap` construction and internal bucket access
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// A computed bucket index fell outside the bucket array.
    ///
    /// The hash function never produces such an index, so seeing this means the
    /// capacity and the bucket array disagree.
    #[error("bucket index {index} out of bounds for capacity {capacity}")]
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Number of buckets at the time of access
        capacity: usize,
    },
    /// The requested initial capacity was zero
    #[error("capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
    /// The requested maximum load factor was not a positive finite number
    #[error("max load must be a positive finite number, got {0}")]
    InvalidMaxLoad(f64),
}
